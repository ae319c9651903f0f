//! The slot composer: render a host component as its single child element.
//!
//! # Design
//! - The child element is returned with merged props and ref, so the child's
//!   element type is what renders; the host contributes no element of its own.
//! - Arity counts rendered children only; `Empty` entries are skipped.
//! - Bare text cannot carry props and is rejected.

use std::fmt;

use tracing::debug;

use crate::element::{Child, SlotElement};
use crate::error::{SlotError, SlotResult};
use crate::node_ref::{NodeRef, compose_refs};
use crate::props::{PropBag, merge_props};

/// Host-side inputs to a slot composition.
pub struct SlotRequest<E: SlotElement> {
    host_props: PropBag,
    host_ref: Option<NodeRef<E::Node>>,
    children: Vec<Child<E>>,
}

impl<E: SlotElement> SlotRequest<E> {
    /// Request with the host's props and no ref or children.
    #[must_use]
    pub fn new(host_props: PropBag) -> Self {
        Self {
            host_props,
            host_ref: None,
            children: Vec::new(),
        }
    }

    /// Attach the host's ref.
    #[must_use]
    pub fn with_ref(mut self, host_ref: NodeRef<E::Node>) -> Self {
        self.host_ref = Some(host_ref);
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: Child<E>) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn element(self, element: E) -> Self {
        self.child(Child::Element(element))
    }
}

impl<E: SlotElement> fmt::Debug for SlotRequest<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SlotRequest")
            .field("host_props", &self.host_props)
            .field("host_ref", &self.host_ref)
            .field("children", &self.children.len())
            .finish()
    }
}

/// Merge host props and ref onto the single child element and return it.
///
/// # Errors
///
/// - [`SlotError::Arity`] when the host does not have exactly one rendered child.
/// - [`SlotError::NotAnElement`] when that child is bare text.
pub fn compose_slot<E: SlotElement>(request: SlotRequest<E>) -> SlotResult<E> {
    let SlotRequest {
        host_props,
        host_ref,
        children,
    } = request;

    let mut rendered: Vec<Child<E>> = children.into_iter().filter(Child::is_rendered).collect();
    if rendered.len() != 1 {
        return Err(SlotError::Arity {
            found: rendered.len(),
        });
    }

    let mut element = match rendered.remove(0) {
        Child::Element(element) => element,
        Child::Text(_) | Child::Empty => return Err(SlotError::NotAnElement),
    };

    let child_props = std::mem::take(element.props_mut());
    *element.props_mut() = merge_props(child_props, host_props);

    let child_ref = element.node_ref_mut().take();
    *element.node_ref_mut() = compose_refs(child_ref, host_ref);

    debug!(tag = element.tag(), "slot composed onto child element");
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use std::cell::RefCell;
    use std::error::Error;
    use std::rc::Rc;

    type Anchor = Element<&'static str>;

    #[test]
    fn child_element_type_survives_with_merged_props() -> Result<(), Box<dyn Error>> {
        let child_props = PropBag::new().class_name("link").attr("href", "/docs");
        let request = SlotRequest::new(PropBag::new().class_name("btn").attr("role", "button"))
            .element(Anchor::new("a").with_props(child_props));
        let element = compose_slot(request)?;
        assert_eq!(element.tag(), "a");
        assert_eq!(element.props().get_class_name(), Some("link btn"));
        assert!(element.props().get_attr("href").is_some());
        assert!(element.props().get_attr("role").is_some());
        Ok(())
    }

    #[test]
    fn empty_entries_do_not_count_toward_arity() -> Result<(), Box<dyn Error>> {
        let request = SlotRequest::new(PropBag::new())
            .child(Child::Empty)
            .element(Anchor::new("span"))
            .child(Child::Empty);
        assert_eq!(compose_slot(request)?.tag(), "span");
        Ok(())
    }

    #[test]
    fn zero_or_many_children_fail_arity() {
        let none = SlotRequest::<Anchor>::new(PropBag::new()).child(Child::Empty);
        assert_eq!(compose_slot(none).err(), Some(SlotError::Arity { found: 0 }));

        let many = SlotRequest::new(PropBag::new())
            .element(Anchor::new("a"))
            .child(Child::Text("label".to_string()))
            .element(Anchor::new("b"));
        assert_eq!(compose_slot(many).err(), Some(SlotError::Arity { found: 3 }));
    }

    #[test]
    fn text_child_is_rejected() {
        let request = SlotRequest::<Anchor>::new(PropBag::new()).child(Child::Text("hi".into()));
        assert_eq!(compose_slot(request).err(), Some(SlotError::NotAnElement));
    }

    #[test]
    fn refs_from_both_sides_see_the_node() -> Result<(), Box<dyn Error>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let track = |label: &'static str| {
            let seen = Rc::clone(&seen);
            NodeRef::new(move |node: Option<&&'static str>| {
                seen.borrow_mut().push(format!("{label}:{}", node.copied().unwrap_or("null")));
            })
        };
        let request = SlotRequest::new(PropBag::new())
            .with_ref(track("host"))
            .element(Anchor::new("a").with_ref(track("child")));
        let element = compose_slot(request)?;
        if let Some(node_ref) = element.node_ref() {
            node_ref.attach(&"anchor-node");
            node_ref.detach();
        }
        assert_eq!(
            *seen.borrow(),
            vec!["child:anchor-node", "host:anchor-node", "host:null", "child:null"]
        );
        Ok(())
    }
}
