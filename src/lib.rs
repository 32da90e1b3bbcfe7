//! `termtext` - column-aware text for monospace terminals
//!
//! Measures how many terminal columns a string occupies and lays text out by
//! those columns: tab expansion, padding and alignment, column-indexed
//! slicing, and hard or word-preserving wrapping.
//!
//! Widths follow what a terminal draws rather than what a string stores.
//! Grapheme clusters count once, wide East Asian characters and emoji take
//! two columns, tabs advance to the next tab stop, and `ESC ... m` escape
//! runs take none while still being carried through every transformation.
//!
//! ```
//! use termtext::{ColumnEngine, EngineOptions};
//!
//! let engine = ColumnEngine::new(EngineOptions::default().with_tab_width(4));
//! assert_eq!(engine.width("\x1b[32mok\x1b[0m\t|"), 5);
//! assert_eq!(engine.align_left("漢字", 6), "漢字  ");
//! assert_eq!(engine.word_wrap("Hello, world!", 10, ""), "Hello,\nworld!");
//!
//! // Or use the process-wide default engine
//! assert_eq!(termtext::width("\t"), 8);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // ColumnEngine lives in engine
#![allow(clippy::missing_errors_doc)] // Errors are limited to config parsing
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::must_use_candidate)] // Getters are marked where it matters
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod global;
pub mod unicode;

// Re-export core types at crate root
pub use config::{DEFAULT_TAB_WIDTH, EngineOptions, WidthOverrides};
pub use engine::{Alignment, ColumnEngine};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use unicode::WidthMethod;

// Process-wide API
pub use global::{
    align_center, align_left, align_right, configure, default_engine, expand, set_tab_width,
    set_width_method, set_width_overrides, slice, tab_width, width, word_wrap, wrap,
};
