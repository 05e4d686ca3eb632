//! Core utilities for classy.
//!
//! This crate provides the building blocks for analyzing the CSS classes used
//! in a tree of HTML documents:
//! - Collecting markup files from a directory tree
//! - Parsing markup files into a DOM
//! - Scanning a DOM for `class` attributes
//! - Normalizing class attribute values into order-independent signatures

mod collector;
mod constants;
mod parser;
mod scanner;
mod signature;
mod tree;

// Re-export public API
pub use collector::collect_markup_files;
pub use constants::{CLASS_ATTRIBUTE, MARKUP_EXTENSIONS};
pub use parser::{parse_markup_file, signatures_in_file};
pub use scanner::scan;
pub use signature::{Signature, normalize};
pub use tree::MarkupNode;
