//! Element abstraction the slot composer operates on.

use crate::node_ref::NodeRef;
use crate::props::PropBag;

/// An element whose props and ref the slot composer can rewrite.
///
/// Implement this for a renderer's element type; [`Element`] is a ready-made
/// implementation for renderers that build a plain tree.
pub trait SlotElement {
    /// Rendered node type delivered to refs.
    type Node: 'static;

    /// Element tag, e.g. `a` or `button`.
    fn tag(&self) -> &str;

    /// Mutable access to the element's props.
    fn props_mut(&mut self) -> &mut PropBag;

    /// Mutable access to the element's ref slot.
    fn node_ref_mut(&mut self) -> &mut Option<NodeRef<Self::Node>>;
}

/// One entry in a slot's child list.
#[derive(Debug, Clone)]
pub enum Child<E> {
    /// A renderable element.
    Element(E),
    /// Bare text.
    Text(String),
    /// Nothing rendered (conditional child that evaluated to nothing).
    Empty,
}

impl<E> Child<E> {
    /// Whether this entry renders anything.
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Plain tree element.
#[derive(Debug, Clone)]
pub struct Element<N> {
    tag: String,
    props: PropBag,
    node_ref: Option<NodeRef<N>>,
    children: Vec<Child<Self>>,
}

impl<N> Element<N> {
    /// Element with empty props and no children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: PropBag::default(),
            node_ref: None,
            children: Vec::new(),
        }
    }

    /// Replace the props.
    #[must_use]
    pub fn with_props(mut self, props: PropBag) -> Self {
        self.props = props;
        self
    }

    /// Attach a ref.
    #[must_use]
    pub fn with_ref(mut self, node_ref: NodeRef<N>) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: Child<Self>) -> Self {
        self.children.push(child);
        self
    }

    /// Current props.
    #[must_use]
    pub const fn props(&self) -> &PropBag {
        &self.props
    }

    /// Current ref.
    #[must_use]
    pub const fn node_ref(&self) -> Option<&NodeRef<N>> {
        self.node_ref.as_ref()
    }

    /// Nested children.
    #[must_use]
    pub fn children(&self) -> &[Child<Self>] {
        &self.children
    }
}

impl<N: 'static> SlotElement for Element<N> {
    type Node = N;

    fn tag(&self) -> &str {
        &self.tag
    }

    fn props_mut(&mut self) -> &mut PropBag {
        &mut self.props
    }

    fn node_ref_mut(&mut self) -> &mut Option<NodeRef<N>> {
        &mut self.node_ref
    }
}
