//! The visual tree components produce.
//!
//! A [`Node`] is a pure description: a kind, a `taffy::Style` for layout, a
//! [`Visual`] for paint, passthrough attributes, and children. Nothing here
//! draws or handles input; a host walks the tree, lays it out, and feeds
//! click messages back to the component that produced it.

use std::borrow::Cow;

use crate::style::Visual;

/// Named glyphs used by paging controls. Which asset backs a name is the
/// host's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    AnglesLeft,
    AngleLeft,
    AngleRight,
    AnglesRight,
    ChevronDown,
}

/// What a node is, for hosts that map kinds onto native elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    Button,
    Select,
    SelectOption,
    Icon(Icon),
    Text,
}

/// A passthrough attribute pair (aria labels, select values, anything the
/// caller forwards).
pub type Attr = (Cow<'static, str>, Cow<'static, str>);

/// One node of the visual tree. `M` is the click message the host hands back
/// to the owning component's `update` when the node is activated.
#[derive(Debug, Clone)]
pub struct Node<M> {
    pub kind: NodeKind,
    pub layout: taffy::Style,
    pub visual: Visual,
    pub attrs: Vec<Attr>,
    pub disabled: bool,
    pub on_click: Option<M>,
    pub text: Option<String>,
    pub children: Vec<Node<M>>,
}

impl<M> Node<M> {
    fn of_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            layout: taffy::Style::default(),
            visual: Visual::default(),
            attrs: Vec::new(),
            disabled: false,
            on_click: None,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn container() -> Self {
        Self::of_kind(NodeKind::Container)
    }

    pub fn button() -> Self {
        Self::of_kind(NodeKind::Button)
    }

    pub fn select() -> Self {
        Self::of_kind(NodeKind::Select)
    }

    pub fn select_option() -> Self {
        Self::of_kind(NodeKind::SelectOption)
    }

    pub fn icon(icon: Icon) -> Self {
        Self::of_kind(NodeKind::Icon(icon))
    }

    pub fn text(content: impl Into<String>) -> Self {
        let mut node = Self::of_kind(NodeKind::Text);
        node.text = Some(content.into());
        node
    }

    pub fn layout(mut self, layout: taffy::Style) -> Self {
        self.layout = layout;
        self
    }

    pub fn visual(mut self, visual: Visual) -> Self {
        self.visual = visual;
        self
    }

    pub fn attr(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, message: M) -> Self {
        self.on_click = Some(message);
        self
    }

    pub fn child(mut self, child: Node<M>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node<M>>) -> Self {
        self.children.extend(children);
        self
    }

    /// First value recorded for `name`, if any.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_ref())
    }

    /// Pre-order visit of this node and every descendant.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node<M>)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Re-tags every click message in the tree, so a host can fold a
    /// component's messages into its own message type.
    pub fn map<N>(self, f: &mut impl FnMut(M) -> N) -> Node<N> {
        Node {
            kind: self.kind,
            layout: self.layout,
            visual: self.visual,
            attrs: self.attrs,
            disabled: self.disabled,
            on_click: self.on_click.map(&mut *f),
            text: self.text,
            children: self
                .children
                .into_iter()
                .map(|child| child.map(&mut *f))
                .collect(),
        }
    }
}
