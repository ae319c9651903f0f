//! Ref callbacks attached to rendered nodes.

use std::fmt;
use std::rc::Rc;

/// Callback invoked with `Some(node)` on attach and `None` on detach.
pub struct NodeRef<N>(Rc<dyn Fn(Option<&N>)>);

impl<N> NodeRef<N> {
    /// Wrap a closure.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Option<&N>) + 'static,
    {
        Self(Rc::new(callback))
    }

    /// Deliver the attached node.
    pub fn attach(&self, node: &N) {
        (self.0)(Some(node));
    }

    /// Signal that the node went away.
    pub fn detach(&self) {
        (self.0)(None);
    }
}

impl<N: 'static> NodeRef<N> {
    /// Fan one ref out to both callers.
    ///
    /// Attach runs `child` then `host`; detach runs in reverse, `host` then `child`.
    #[must_use]
    pub fn compose(child: Self, host: Self) -> Self {
        Self::new(move |node| match node {
            Some(node) => {
                child.attach(node);
                host.attach(node);
            }
            None => {
                host.detach();
                child.detach();
            }
        })
    }
}

impl<N> Clone for NodeRef<N> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<N> fmt::Debug for NodeRef<N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("NodeRef")
    }
}

/// Merge optional child and host refs; composes only when both are present.
#[must_use]
pub fn compose_refs<N: 'static>(
    child: Option<NodeRef<N>>,
    host: Option<NodeRef<N>>,
) -> Option<NodeRef<N>> {
    match (child, host) {
        (Some(child), Some(host)) => Some(NodeRef::compose(child, host)),
        (child, host) => host.or(child),
    }
}
