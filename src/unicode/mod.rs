//! Unicode utilities for grapheme handling and display width.

mod grapheme;
mod width;

pub use grapheme::{Cluster, Clusters, clusters};
pub use width::{WidthMethod, char_width, cluster_width};
