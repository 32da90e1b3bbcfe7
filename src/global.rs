//! Process-wide default engine.
//!
//! The free functions here run on a shared [`ColumnEngine`] so hosts that
//! don't want to thread an engine through their code can call
//! `termtext::width(s)` directly. Configure it once at start-up; each call
//! uses whichever configuration was current when it started.

use crate::config::{EngineOptions, WidthOverrides};
use crate::engine::ColumnEngine;
use crate::event::{LogLevel, emit_log};
use crate::unicode::WidthMethod;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

fn slot() -> &'static RwLock<Arc<ColumnEngine>> {
    static ENGINE: OnceLock<RwLock<Arc<ColumnEngine>>> = OnceLock::new();
    ENGINE.get_or_init(|| RwLock::new(Arc::new(ColumnEngine::default())))
}

/// The current default engine.
#[must_use]
pub fn default_engine() -> Arc<ColumnEngine> {
    let guard = slot().read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Replace the default engine's options.
pub fn configure(options: EngineOptions) {
    emit_log(
        LogLevel::Debug,
        &format!(
            "default engine reconfigured: tab width {}, {} overrides, {:?}",
            options.tab_width(),
            options.overrides().len(),
            options.width_method()
        ),
    );
    let mut guard = slot().write().unwrap_or_else(PoisonError::into_inner);
    *guard = Arc::new(ColumnEngine::new(options));
}

fn update(f: impl FnOnce(EngineOptions) -> EngineOptions) {
    let options = default_engine().options().clone();
    configure(f(options));
}

/// Set the default engine's tab width. Zero is clamped to 1.
pub fn set_tab_width(tab_width: usize) {
    update(|options| options.with_tab_width(tab_width));
}

/// The default engine's tab width.
#[must_use]
pub fn tab_width() -> usize {
    default_engine().tab_width()
}

/// Replace the default engine's width-override table.
pub fn set_width_overrides(overrides: WidthOverrides) {
    update(|options| options.with_overrides(overrides));
}

/// Set the default engine's ambiguous-width method.
pub fn set_width_method(method: WidthMethod) {
    update(|options| options.with_width_method(method));
}

/// Display width of `s` on the default engine.
///
/// See [`ColumnEngine::width`].
#[must_use]
pub fn width(s: &str) -> usize {
    default_engine().width(s)
}

/// See [`ColumnEngine::expand`].
#[must_use]
pub fn expand(s: &str) -> String {
    default_engine().expand(s)
}

/// See [`ColumnEngine::align_left`].
#[must_use]
pub fn align_left(s: &str, width: usize) -> String {
    default_engine().align_left(s, width)
}

/// See [`ColumnEngine::align_right`].
#[must_use]
pub fn align_right(s: &str, width: usize) -> String {
    default_engine().align_right(s, width)
}

/// See [`ColumnEngine::align_center`].
#[must_use]
pub fn align_center(s: &str, width: usize) -> String {
    default_engine().align_center(s, width)
}

/// See [`ColumnEngine::slice`].
#[must_use]
pub fn slice(s: &str, start: usize, stop: usize) -> String {
    default_engine().slice(s, start, stop)
}

/// See [`ColumnEngine::wrap`].
#[must_use]
pub fn wrap(s: &str, width: usize, prefix: &str) -> String {
    default_engine().wrap(s, width, prefix)
}

/// See [`ColumnEngine::word_wrap`].
#[must_use]
pub fn word_wrap(s: &str, width: usize, prefix: &str) -> String {
    default_engine().word_wrap(s, width, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests here share the default engine
    static SERIAL: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_engine_reconfigure() {
        let _serial = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
        let original = default_engine().options().clone();

        assert_eq!(tab_width(), 8);
        assert_eq!(width("\t"), 8);

        let before = default_engine();
        set_tab_width(4);
        assert_eq!(tab_width(), 4);
        assert_eq!(expand("a\t"), "a   ");
        // Engines handed out earlier keep their settings
        assert_eq!(before.width("\t"), 8);

        set_width_overrides(WidthOverrides::new().with('x', 3));
        assert_eq!(width("x\t"), 4);
        assert_eq!(tab_width(), 4);

        set_width_method(WidthMethod::Unicode);
        assert_eq!(width("①"), 2);

        configure(original);
        assert_eq!(width("x\t①"), 9);
    }

    #[test]
    fn test_free_functions_match_engine() {
        let _serial = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
        let engine = ColumnEngine::default();
        let s = "ab\tc";
        assert_eq!(align_left("ab", 4), engine.align_left("ab", 4));
        assert_eq!(align_right("ab", 4), engine.align_right("ab", 4));
        assert_eq!(align_center("ab", 4), engine.align_center("ab", 4));
        assert_eq!(slice(s, 1, 0), engine.slice(s, 1, 0));
        assert_eq!(wrap(s, 3, ""), engine.wrap(s, 3, ""));
        assert_eq!(word_wrap(s, 3, ""), engine.word_wrap(s, 3, ""));
    }
}
