// src/report/mod.rs
//! Plain-text renderers for scan results. Pure functions; no I/O.

pub mod full;
pub mod pages;
pub mod tree;

pub use full::render_full;
pub use pages::{page_count, page_directories, parent_module, render_page, PageOutcome};
pub use tree::render_tree;

pub(crate) fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
