//! Constants shared by file collection, parsing and signature building.

/// File extensions of markup documents that should be scanned
pub const MARKUP_EXTENSIONS: &[&str] = &[
    "html", // HTML document
    "htm",  // HTML document, short form
];

/// Attribute whose value is turned into a signature
pub const CLASS_ATTRIBUTE: &str = "class";

/// Opening marker of a templating placeholder, e.g. `{{ if .Active }}`
pub const PLACEHOLDER_OPEN: &str = "{{";

/// Closing marker of a templating placeholder
pub const PLACEHOLDER_CLOSE: &str = "}}";

/// Directories whose name starts with this are never descended into
pub const HIDDEN_PREFIX: char = '.';
