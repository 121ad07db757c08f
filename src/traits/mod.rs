//! Extension traits for wiring existing `Result`s into a tracker.

pub mod result_ext;

pub use result_ext::DeferExt;
