use serde::Serialize;
use std::fmt;

use crate::constants::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};

/// Canonical form of the class set applied to one element.
///
/// Tokens are unique, sorted lexicographically and joined with a single
/// space. The only way to build one is [`Signature::from_raw`], so every
/// value upholds that invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    /// Normalize a raw `class` attribute value.
    ///
    /// Templating placeholders (`{{ ... }}`) are replaced by a space before
    /// tokenizing. An unterminated placeholder swallows the rest of the value.
    pub fn from_raw(raw: &str) -> Self {
        let stripped = strip_placeholders(raw);
        let mut tokens: Vec<&str> = stripped.split_whitespace().collect();
        tokens.sort_unstable();
        tokens.dedup();
        Signature(tokens.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of separator spaces, i.e. one less than the token count for a
    /// non-empty signature and zero for the empty one.
    pub fn word_count(&self) -> usize {
        self.0.matches(' ').count()
    }

    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ').filter(|t| !t.is_empty())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shorthand for [`Signature::from_raw`].
pub fn normalize(raw: &str) -> Signature {
    Signature::from_raw(raw)
}

fn strip_placeholders(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
        out.push_str(&rest[..start]);
        out.push(' ');
        let interior = &rest[start + PLACEHOLDER_OPEN.len()..];
        rest = match interior.find(PLACEHOLDER_CLOSE) {
            Some(end) => &interior[end + PLACEHOLDER_CLOSE.len()..],
            None => "",
        };
    }
    out.push_str(rest);
    out
}
