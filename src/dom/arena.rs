//! Arena-based DOM for strained HTML parsing.
//!
//! All nodes live in one vector and link to each other by index. Only the
//! structure html5ever needs to build the tree is kept; text and comments
//! collapse into placeholders.

use html5ever::{LocalName, QualName};

use crate::markup::escape_attr;

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaNodeId(pub u32);

impl ArenaNodeId {
    /// Sentinel value for no node.
    pub const NONE: ArenaNodeId = ArenaNodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Node type in the arena DOM.
#[derive(Debug, Clone)]
pub enum ArenaNodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    ///
    /// The name is boxed so its address stays stable while the arena grows.
    Element {
        name: Box<QualName>,
        attrs: Vec<Attribute>,
    },
    /// Comment, processing instruction or doctype. Content is not kept.
    Placeholder,
}

/// HTML attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

/// A node in the arena DOM.
#[derive(Debug)]
pub struct ArenaNode {
    pub data: ArenaNodeData,
    pub parent: ArenaNodeId,
    pub first_child: ArenaNodeId,
    pub last_child: ArenaNodeId,
    pub prev_sibling: ArenaNodeId,
    pub next_sibling: ArenaNodeId,
}

impl ArenaNode {
    fn new(data: ArenaNodeData) -> Self {
        Self {
            data,
            parent: ArenaNodeId::NONE,
            first_child: ArenaNodeId::NONE,
            last_child: ArenaNodeId::NONE,
            prev_sibling: ArenaNodeId::NONE,
            next_sibling: ArenaNodeId::NONE,
        }
    }
}

/// Arena-based DOM tree.
pub struct ArenaDom {
    nodes: Vec<ArenaNode>,
    document: ArenaNodeId,
}

impl ArenaDom {
    /// Create a new empty DOM with a document root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: ArenaNodeId::NONE,
        };
        dom.document = dom.alloc(ArenaNode::new(ArenaNodeData::Document));
        dom
    }

    fn alloc(&mut self, node: ArenaNode) -> ArenaNodeId {
        let id = ArenaNodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> ArenaNodeId {
        self.document
    }

    /// Get a node by ID.
    pub fn get(&self, id: ArenaNodeId) -> Option<&ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: ArenaNodeId) -> Option<&mut ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Create a new element node.
    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Element {
            name: Box::new(name),
            attrs,
        }))
    }

    /// Create a placeholder for content the parser needs a handle for.
    pub fn create_placeholder(&mut self) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Placeholder))
    }

    /// Append a child to a parent node.
    pub fn append(&mut self, parent: ArenaNodeId, child: ArenaNodeId) {
        self.detach(child);

        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
            child_node.next_sibling = ArenaNodeId::NONE;
        }

        if last_child.is_some()
            && let Some(last_node) = self.get_mut(last_child)
        {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a node before a sibling.
    pub fn insert_before(&mut self, sibling: ArenaNodeId, new_node: ArenaNodeId) {
        self.detach(new_node);

        let (parent, prev) = self
            .get(sibling)
            .map(|n| (n.parent, n.prev_sibling))
            .unwrap_or((ArenaNodeId::NONE, ArenaNodeId::NONE));

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Unlink a node from its parent and siblings.
    pub fn detach(&mut self, target: ArenaNodeId) {
        let Some((parent, prev, next)) = self
            .get(target)
            .map(|n| (n.parent, n.prev_sibling, n.next_sibling))
        else {
            return;
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(target) {
            node.parent = ArenaNodeId::NONE;
            node.prev_sibling = ArenaNodeId::NONE;
            node.next_sibling = ArenaNodeId::NONE;
        }
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: ArenaNodeId) -> ChildrenIter<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(ArenaNodeId::NONE);
        ChildrenIter {
            dom: self,
            current: first,
        }
    }

    /// Find every element with the given tag below `root`, in document order.
    pub fn find_all_by_tag(&self, root: ArenaNodeId, tag: &str) -> Vec<ArenaNodeId> {
        let mut found = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if self.element_name(id).is_some_and(|name| name.as_ref() == tag) {
                found.push(id);
            }
            // Push children in reverse order for left-to-right traversal
            let mut children: Vec<_> = self.children(id).collect();
            children.reverse();
            stack.extend(children);
        }
        found
    }
}

impl Default for ArenaDom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over children of a node.
pub struct ChildrenIter<'a> {
    dom: &'a ArenaDom,
    current: ArenaNodeId,
}

impl Iterator for ChildrenIter<'_> {
    type Item = ArenaNodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .dom
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(ArenaNodeId::NONE);
        Some(id)
    }
}

/// Convenience methods for element nodes.
impl ArenaDom {
    /// Get element's local name (tag).
    pub fn element_name(&self, id: ArenaNodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    /// Get an element's attributes in source order.
    pub fn attrs(&self, id: ArenaNodeId) -> &[Attribute] {
        self.get(id)
            .and_then(|n| match &n.data {
                ArenaNodeData::Element { attrs, .. } => Some(attrs.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Get an attribute value.
    pub fn get_attr(&self, id: ArenaNodeId, attr_name: &str) -> Option<&str> {
        self.attrs(id)
            .iter()
            .find(|a| a.name.local.as_ref() == attr_name)
            .map(|a| a.value.as_str())
    }

    /// Render an element's start tag, for diagnostics.
    pub fn start_tag_markup(&self, id: ArenaNodeId) -> String {
        let Some(name) = self.element_name(id) else {
            return String::new();
        };
        let mut out = format!("<{name}");
        for attr in self.attrs(id) {
            out.push_str(&format!(
                " {}=\"{}\"",
                attr.name.local,
                escape_attr(&attr.value)
            ));
        }
        out.push('>');
        out
    }
}

#[cfg(test)]
mod tests {
    use html5ever::ns;

    use super::*;

    fn make_qname(local: &str) -> QualName {
        QualName::new(None, ns!(html), LocalName::from(local))
    }

    fn make_attr(name: &str, value: &str) -> Attribute {
        Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_create_elements() {
        let mut dom = ArenaDom::new();

        let img = dom.create_element(make_qname("img"), vec![make_attr("width", "100")]);
        dom.append(dom.document(), img);

        assert_eq!(dom.element_name(img).unwrap().as_ref(), "img");
        assert_eq!(dom.get_attr(img, "width"), Some("100"));
        assert_eq!(dom.get_attr(img, "height"), None);
        assert_eq!(dom.children(dom.document()).collect::<Vec<_>>(), vec![img]);
    }

    #[test]
    fn test_append_children() {
        let mut dom = ArenaDom::new();

        let map = dom.create_element(make_qname("map"), vec![]);
        let area1 = dom.create_element(make_qname("area"), vec![]);
        let area2 = dom.create_element(make_qname("area"), vec![]);

        dom.append(dom.document(), map);
        dom.append(map, area1);
        dom.append(map, area2);

        let children: Vec<_> = dom.children(map).collect();
        assert_eq!(children, vec![area1, area2]);
    }

    #[test]
    fn test_insert_before_and_detach() {
        let mut dom = ArenaDom::new();

        let map = dom.create_element(make_qname("map"), vec![]);
        let second = dom.create_element(make_qname("area"), vec![]);
        let first = dom.create_element(make_qname("area"), vec![]);
        dom.append(dom.document(), map);
        dom.append(map, second);
        dom.insert_before(second, first);

        assert_eq!(dom.children(map).collect::<Vec<_>>(), vec![first, second]);

        dom.detach(first);
        assert_eq!(dom.children(map).collect::<Vec<_>>(), vec![second]);

        dom.detach(second);
        assert_eq!(dom.children(map).count(), 0);
    }

    #[test]
    fn test_find_all_by_tag_document_order() {
        let mut dom = ArenaDom::new();

        let map = dom.create_element(make_qname("map"), vec![]);
        let a = dom.create_element(make_qname("area"), vec![make_attr("alt", "a")]);
        let div = dom.create_element(make_qname("div"), vec![]);
        let b = dom.create_element(make_qname("area"), vec![make_attr("alt", "b")]);
        let c = dom.create_element(make_qname("area"), vec![make_attr("alt", "c")]);

        dom.append(dom.document(), map);
        dom.append(map, a);
        dom.append(map, div);
        dom.append(div, b);
        dom.append(map, c);

        let found = dom.find_all_by_tag(map, "area");
        assert_eq!(found, vec![a, b, c]);
    }

    #[test]
    fn test_start_tag_markup_escapes_values() {
        let mut dom = ArenaDom::new();
        let area = dom.create_element(
            make_qname("area"),
            vec![make_attr("shape", "rect"), make_attr("href", "a?b=1&c=\"2\"")],
        );

        assert_eq!(
            dom.start_tag_markup(area),
            r#"<area shape="rect" href="a?b=1&amp;c=&quot;2&quot;">"#
        );
    }
}
