use markup5ever_rcdom::{Handle, NodeData};

/// Read-only view of a parsed markup tree.
///
/// The scanner only needs to know whether a node is an element, what its
/// attributes are and which nodes hang below it, so any parser can be
/// plugged in by implementing this trait for its node handle.
pub trait MarkupNode: Sized {
    fn is_element(&self) -> bool;

    /// Attribute `(name, value)` pairs in source order. Empty for nodes that
    /// are not elements.
    fn attributes(&self) -> Vec<(String, String)>;

    fn children(&self) -> Vec<Self>;

    /// Value of the first attribute called `name`, compared case-sensitively.
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes().into_iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }
}

impl MarkupNode for Handle {
    fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element { .. })
    }

    fn attributes(&self) -> Vec<(String, String)> {
        match &self.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn children(&self) -> Vec<Self> {
        let mut children = self.children.borrow().clone();
        // <template> content lives in a separate fragment
        if let NodeData::Element { template_contents, .. } = &self.data
            && let Some(contents) = template_contents.borrow().as_ref()
        {
            children.push(contents.clone());
        }
        children
    }
}
