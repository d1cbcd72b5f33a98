use super::merge_sort::merge_sort;
use super::node::{drop_chain, Link, Node};
use crate::error::{QueueError, Result};

use std::fmt;
use std::iter::FusedIterator;
use std::ptr::NonNull;

use tracing::trace;

// Singly linked queue of byte strings
pub struct StringQueue {
    head: Link,
    // points into the chain owned by `head`; never used to free
    tail: Option<NonNull<Node>>,
    size: usize,
}

unsafe impl Send for StringQueue {}
unsafe impl Sync for StringQueue {}

impl StringQueue {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn front(&self) -> Option<&[u8]> {
        self.head.as_deref().map(|node| &*node.value)
    }

    pub fn back(&self) -> Option<&[u8]> {
        self.tail.map(|ptr| unsafe { &*(*ptr.as_ptr()).value })
    }

    /// Links a copy of `value` in front of the current head.
    ///
    /// On allocation failure the queue is untouched and nothing allocated by
    /// this call is retained.
    pub fn insert_head(&mut self, value: impl AsRef<[u8]>) -> Result<()> {
        let mut node = Node::alloc(value.as_ref())?;
        node.next = self.head.take();
        if self.tail.is_none() {
            self.tail = Some(NonNull::from(&mut *node));
        }
        self.head = Some(node);
        self.size += 1;
        Ok(())
    }

    /// Links a copy of `value` after the current tail, in O(1).
    pub fn insert_tail(&mut self, value: impl AsRef<[u8]>) -> Result<()> {
        let mut node = Node::alloc(value.as_ref())?;
        let ptr = NonNull::from(&mut *node);
        match self.tail {
            None => self.head = Some(node),
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
        }
        self.tail = Some(ptr);
        self.size += 1;
        Ok(())
    }

    /// Unlinks the head node and frees it.
    ///
    /// If `buf` is given and non-empty, the removed value is copied into it
    /// first: at most `buf.len() - 1` bytes, then a NUL, with any remaining
    /// bytes zeroed. Longer values are truncated.
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<()> {
        let mut node = self.head.take().ok_or(QueueError::Empty)?;
        self.head = node.next.take();
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;

        if let Some(buf) = buf {
            copy_truncated(&node.value, buf);
        }
        Ok(())
    }

    /// Reverses the chain in place by relinking; no node is allocated or freed.
    pub fn reverse(&mut self) {
        if self.size < 2 {
            return;
        }
        trace!(size = self.size, "reversing queue");

        let new_tail = self.head.as_deref_mut().map(NonNull::from);
        let mut prev: Link = None;
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
        self.tail = new_tail;
    }

    /// Sorts ascending by byte-wise comparison. Stable; only relinks nodes.
    pub fn sort(&mut self) {
        if self.size < 2 {
            return;
        }
        trace!(size = self.size, "sorting queue");

        self.head = merge_sort(self.head.take());
        self.tail = last_node(&mut self.head);
    }

    pub fn clear(&mut self) {
        self.tail = None;
        self.size = 0;
        drop_chain(self.head.take());
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            len: self.size,
        }
    }
}

impl Default for StringQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StringQueue {
    fn drop(&mut self) {
        self.clear()
    }
}

impl fmt::Debug for StringQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(String::from_utf8_lossy))
            .finish()
    }
}

fn copy_truncated(src: &[u8], buf: &mut [u8]) {
    let cap = match buf.len().checked_sub(1) {
        Some(cap) => cap,
        None => return,
    };
    let n = src.len().min(cap);
    buf[..n].copy_from_slice(&src[..n]);
    for byte in &mut buf[n..] {
        *byte = 0;
    }
}

// walks to the real last node; `None` only for an empty chain
fn last_node(link: &mut Link) -> Option<NonNull<Node>> {
    let mut last = None;
    let mut curr = link;
    while let Some(node) = curr {
        last = Some(NonNull::from(&mut **node));
        curr = &mut node.next;
    }
    last
}

// ------------------------------------------
// begin: Iter

pub struct Iter<'a> {
    next: Option<&'a Node>,
    len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [u8];
    fn next(&mut self) -> Option<&'a [u8]> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.len -= 1;
            &*node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> IntoIterator for &'a StringQueue {
    type Item = &'a [u8];
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a> FusedIterator for Iter<'a> {}

// end: Iter
// ------------------------------------------
