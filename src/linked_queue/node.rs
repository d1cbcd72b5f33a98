use crate::error::Result;
use crate::raw::{copy_value, try_box};

pub(crate) type Link = Option<Box<Node>>;

pub(crate) struct Node {
    pub(crate) value: Box<[u8]>,
    pub(crate) next: Link,
}

impl Node {
    /// Allocates a detached node holding its own copy of `value`.
    /// Nothing allocated here survives a failure.
    pub(crate) fn alloc(value: &[u8]) -> Result<Box<Self>> {
        let value = copy_value(value)?;
        try_box(Node { value, next: None })
    }
}

// Drops a chain front to back without recursing through `Box<Node>`.
pub(crate) fn drop_chain(mut link: Link) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}
