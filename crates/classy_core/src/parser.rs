use anyhow::{Context, Result};
use html5ever::{parse_document, tendril::TendrilSink};
use log::{debug, trace};
use markup5ever_rcdom::RcDom;
use std::{fs::File, io::BufReader, path::Path};

use crate::{scanner::scan, signature::Signature};

/// Parse one markup file into a DOM.
///
/// html5ever recovers from malformed markup the way browsers do, so only
/// I/O failures surface as errors here.
pub fn parse_markup_file(path: &Path) -> Result<RcDom> {
    trace!("Parsing markup file: {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(dom)
}

/// Signatures of every element carrying a `class` attribute in `path`.
pub fn signatures_in_file(path: &Path) -> Result<Vec<Signature>> {
    let dom = parse_markup_file(path)?;
    let signatures = scan(&dom.document);
    debug!("Found {} class attributes in {}", signatures.len(), path.display());
    Ok(signatures)
}
