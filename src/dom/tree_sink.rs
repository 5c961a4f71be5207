//! html5ever TreeSink that strains the document down to image-map elements.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute as Html5Attribute, QualName};

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId, Attribute};

/// Handle used by TreeSink to reference nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHandle(pub ArenaNodeId);

impl Default for NodeHandle {
    fn default() -> Self {
        NodeHandle(ArenaNodeId::NONE)
    }
}

/// TreeSink implementation that builds an ArenaDom, keeping attributes only
/// for the strained tags.
///
/// Every element still gets a node because the tree builder needs its name
/// to apply HTML nesting rules. Text, comments and doctypes are dropped.
pub struct StrainingSink {
    dom: RefCell<ArenaDom>,
    keep: &'static [&'static str],
}

impl StrainingSink {
    pub fn new(keep: &'static [&'static str]) -> Self {
        Self {
            dom: RefCell::new(ArenaDom::new()),
            keep,
        }
    }

    /// Consume the sink and return the DOM.
    pub fn into_dom(self) -> ArenaDom {
        self.dom.into_inner()
    }

    fn keeps(&self, name: &QualName) -> bool {
        self.keep.iter().any(|&tag| tag == &*name.local)
    }
}

impl TreeSink for StrainingSink {
    type Handle = NodeHandle;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, msg: std::borrow::Cow<'static, str>) {
        // Lenient like browsers
        log::trace!("html parse error: {msg}");
    }

    fn get_document(&self) -> Self::Handle {
        NodeHandle(self.dom.borrow().document())
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };

        let dom = self.dom.borrow();
        match dom.get(target.0).map(|n| &n.data) {
            Some(ArenaNodeData::Element { name, .. }) => {
                // SAFETY: the QualName is boxed, so its address does not move when
                // the arena vector reallocates, and nodes are never freed before
                // the sink is dropped. The borrow checker cannot see through the
                // RefCell, so the lifetime is extended to that of `self`.
                unsafe { std::mem::transmute::<&QualName, &'a QualName>(&**name) }
            }
            _ => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Html5Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let converted_attrs: Vec<Attribute> = if self.keeps(&name) {
            attrs
                .into_iter()
                .map(|a| Attribute {
                    name: a.name,
                    value: a.value.to_string(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let id = self.dom.borrow_mut().create_element(name, converted_attrs);
        NodeHandle(id)
    }

    fn create_comment(&self, _text: StrTendril) -> Self::Handle {
        NodeHandle(self.dom.borrow_mut().create_placeholder())
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        NodeHandle(self.dom.borrow_mut().create_placeholder())
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        if let NodeOrText::AppendNode(node) = child {
            self.dom.borrow_mut().append(parent.0, node.0);
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let parent = self.dom.borrow().get(element.0).map(|n| n.parent);
        if let Some(parent) = parent
            && parent.is_some()
        {
            self.append(&NodeHandle(parent), child);
            return;
        }
        self.append(prev_element, child);
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        // Template contents are never inspected; reuse the template node
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x.0 == y.0
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        if let NodeOrText::AppendNode(node) = new_node {
            self.dom.borrow_mut().insert_before(sibling.0, node.0);
        }
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Html5Attribute>) {
        let mut dom = self.dom.borrow_mut();
        if let Some(node) = dom.get_mut(target.0)
            && let ArenaNodeData::Element {
                name,
                attrs: existing,
            } = &mut node.data
            && self.keeps(name)
        {
            for attr in attrs {
                if !existing.iter().any(|a| a.name == attr.name) {
                    existing.push(Attribute {
                        name: attr.name,
                        value: attr.value.to_string(),
                    });
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.dom.borrow_mut().detach(target.0);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let children: Vec<_> = self.dom.borrow().children(node.0).collect();

        let mut dom = self.dom.borrow_mut();
        for child in children {
            dom.detach(child);
            dom.append(new_parent.0, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use html5ever::driver::ParseOpts;
    use html5ever::parse_document;
    use html5ever::tendril::TendrilSink;

    use super::*;

    fn parse_html(html: &str) -> ArenaDom {
        let sink = StrainingSink::new(&["img", "map", "area"]);
        parse_document(sink, ParseOpts::default())
            .from_utf8()
            .one(html.as_bytes())
            .into_dom()
    }

    #[test]
    fn test_keeps_strained_attributes() {
        let dom = parse_html(r#"<p class="intro">Hi</p><img src="a.png" width="10" height="20">"#);

        let img = dom.find_all_by_tag(dom.document(), "img")[0];
        assert_eq!(dom.get_attr(img, "src"), Some("a.png"));
        assert_eq!(dom.get_attr(img, "width"), Some("10"));

        let p = dom.find_all_by_tag(dom.document(), "p")[0];
        assert!(dom.attrs(p).is_empty());
    }

    #[test]
    fn test_areas_nest_under_map() {
        let dom = parse_html(
            r#"
            <map name="m">
                <area shape="rect" coords="0,0,1,1">
                <area shape="circle" coords="5,5,2">
            </map>
        "#,
        );

        let map = dom.find_all_by_tag(dom.document(), "map")[0];
        let areas = dom.find_all_by_tag(map, "area");
        assert_eq!(areas.len(), 2);
        assert_eq!(dom.get_attr(areas[1], "shape"), Some("circle"));
    }

    #[test]
    fn test_text_is_dropped() {
        let dom = parse_html("<div>lots of text here</div>");

        let div = dom.find_all_by_tag(dom.document(), "div")[0];
        assert_eq!(dom.children(div).count(), 0);
    }
}
