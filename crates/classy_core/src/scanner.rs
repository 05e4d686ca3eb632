use log::trace;

use crate::{constants::CLASS_ATTRIBUTE, signature::Signature, tree::MarkupNode};

/// Walk the tree below `root` and return one signature per element that has
/// a `class` attribute, in document order.
///
/// Only the first `class` attribute of an element counts. Non-element nodes
/// contribute nothing but their children are still visited.
pub fn scan<N: MarkupNode>(root: &N) -> Vec<Signature> {
    let mut signatures: Vec<Signature> = element_signature(root).into_iter().collect();

    // Children are pushed in reverse so popping yields document order
    let mut pending: Vec<N> = root.children().into_iter().rev().collect();
    while let Some(node) = pending.pop() {
        if let Some(signature) = element_signature(&node) {
            signatures.push(signature);
        }
        pending.extend(node.children().into_iter().rev());
    }
    signatures
}

fn element_signature<N: MarkupNode>(node: &N) -> Option<Signature> {
    if !node.is_element() {
        return None;
    }
    let raw = node.attribute(CLASS_ATTRIBUTE)?;
    let signature = Signature::from_raw(&raw);
    trace!("Class attribute {:?} normalized to {:?}", raw, signature.as_str());
    Some(signature)
}
