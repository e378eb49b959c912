use super::node::XmlNodeData;
use super::xname::{XAttribute, XName};
use indextree::{Arena, NodeId};

/// Mutable XML tree backed by an `indextree` arena.
///
/// Node ids stay valid across attribute edits, which is what lets the
/// rewriters revisit exactly the nodes the extractors reported.
pub struct XmlDocument {
    arena: Arena<XmlNodeData>,
    root: Option<NodeId>,
}

impl XmlDocument {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&XmlNodeData> {
        self.arena.get(id).map(|node| node.get())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut XmlNodeData> {
        self.arena.get_mut(id).map(|node| node.get_mut())
    }

    pub fn add_root(&mut self, data: XmlNodeData) -> NodeId {
        let id = self.arena.new_node(data);
        self.root = Some(id);
        id
    }

    pub fn add_child(&mut self, parent: NodeId, data: XmlNodeData) -> NodeId {
        let child = self.arena.new_node(data);
        parent.append(child, &mut self.arena);
        child
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &XName, value: &str) {
        if let Some(node_data) = self.get_mut(node) {
            if let Some(attrs) = node_data.attributes_mut() {
                if let Some(attr) = attrs.iter_mut().find(|a| &a.name == name) {
                    attr.value = value.to_string();
                } else {
                    attrs.push(XAttribute::new(name.clone(), value));
                }
            }
        }
    }

    /// Drop an attribute; returns whether it was present.
    pub fn remove_attribute(&mut self, node: NodeId, name: &XName) -> bool {
        let Some(attrs) = self.get_mut(node).and_then(|data| data.attributes_mut()) else {
            return false;
        };
        let before = attrs.len();
        attrs.retain(|a| &a.name != name);
        attrs.len() != before
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node)?.parent()
    }

    /// Nearest proper ancestor with the given name.
    pub fn ancestor_named(&self, node: NodeId, name: &XName) -> Option<NodeId> {
        node.ancestors(&self.arena).skip(1).find(|&id| self.is(id, name))
    }

    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        parent.children(&self.arena)
    }

    /// Element children only, skipping text, comments and processing instructions.
    pub fn child_elements(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(parent)
            .filter(move |&id| self.get(id).map(|d| d.is_element()).unwrap_or(false))
    }

    /// Pre-order descendants, including `node` itself.
    pub fn descendants(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.descendants(&self.arena)
    }

    pub fn elements_by_name<'a>(
        &'a self,
        parent: NodeId,
        name: &'a XName,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(parent)
            .filter(move |&child_id| self.is(child_id, name))
    }

    /// Descendant elements (excluding `node`) with the given name, in document order.
    pub fn descendants_by_name<'a>(
        &'a self,
        node: NodeId,
        name: &'a XName,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(node)
            .skip(1)
            .filter(move |&id| self.is(id, name))
    }

    pub fn first_child(&self, parent: NodeId, name: &XName) -> Option<NodeId> {
        self.elements_by_name(parent, name).next()
    }

    pub fn name(&self, id: NodeId) -> Option<&XName> {
        self.get(id).and_then(|data| data.name())
    }

    pub fn is(&self, id: NodeId, name: &XName) -> bool {
        self.name(id).map(|n| n == name).unwrap_or(false)
    }

    /// Value of a namespace-qualified attribute (`w:val`, `r:embed`).
    pub fn attr(&self, id: NodeId, name: &XName) -> Option<&str> {
        self.get(id)?
            .attributes()?
            .iter()
            .find(|a| &a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Value of an unqualified attribute (`val`, `typeface`, `rgb`).
    pub fn attr_local(&self, id: NodeId, local: &str) -> Option<&str> {
        self.get(id)?
            .attributes()?
            .iter()
            .find(|a| a.name.namespace.is_none() && a.name.local_name == local)
            .map(|a| a.value.as_str())
    }
}

impl Default for XmlDocument {
    fn default() -> Self {
        Self::new()
    }
}
