//! The queue operations over nullable handles.
//!
//! A driver that tracks "no queue" as a state of its own (never created,
//! already destroyed, creation failed) passes `None` here instead of a queue.
//! Queries on an absent queue behave as on an empty one; mutations fail with
//! [`QueueError::Absent`] or do nothing.

use crate::error::{QueueError, Result};
use crate::linked_queue::StringQueue;
use crate::raw::try_box;

use tracing::debug;

fn present<T>(q: Option<T>, op: &'static str) -> Result<T> {
    q.ok_or_else(|| {
        debug!(op, "queue handle is absent");
        QueueError::Absent
    })
}

/// Allocates an empty queue. `None` only if the allocation failed.
pub fn create() -> Option<Box<StringQueue>> {
    try_box(StringQueue::new()).ok()
}

/// Frees every remaining value, node and the queue itself.
pub fn destroy(q: Option<Box<StringQueue>>) {
    drop(q)
}

pub fn insert_head(q: Option<&mut StringQueue>, value: impl AsRef<[u8]>) -> Result<()> {
    present(q, "insert_head")?.insert_head(value)
}

pub fn insert_tail(q: Option<&mut StringQueue>, value: impl AsRef<[u8]>) -> Result<()> {
    present(q, "insert_tail")?.insert_tail(value)
}

pub fn remove_head(q: Option<&mut StringQueue>, buf: Option<&mut [u8]>) -> Result<()> {
    present(q, "remove_head")?.remove_head(buf)
}

pub fn size(q: Option<&StringQueue>) -> usize {
    q.map_or(0, StringQueue::size)
}

pub fn reverse(q: Option<&mut StringQueue>) {
    if let Ok(q) = present(q, "reverse") {
        q.reverse()
    }
}

pub fn sort(q: Option<&mut StringQueue>) {
    if let Ok(q) = present(q, "sort") {
        q.sort()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_absent_queue() {
        init_tracing();

        assert_eq!(insert_head(None, "a"), Err(QueueError::Absent));
        assert_eq!(insert_tail(None, "a"), Err(QueueError::Absent));

        let mut buf = [7_u8; 4];
        assert_eq!(remove_head(None, Some(&mut buf[..])), Err(QueueError::Absent));
        assert_eq!(buf, [7; 4]);
        assert_eq!(remove_head(None, None), Err(QueueError::Absent));

        assert_eq!(size(None), 0);
        reverse(None);
        sort(None);
        destroy(None);
    }

    #[test]
    fn test_handle_lifecycle() {
        let mut q = create();
        assert!(q.is_some());
        assert_eq!(size(q.as_deref()), 0);
        assert_eq!(remove_head(q.as_deref_mut(), None), Err(QueueError::Empty));

        insert_tail(q.as_deref_mut(), "b").unwrap();
        insert_tail(q.as_deref_mut(), "a").unwrap();
        insert_head(q.as_deref_mut(), "c").unwrap();
        assert_eq!(size(q.as_deref()), 3);

        sort(q.as_deref_mut());
        reverse(q.as_deref_mut());

        let mut buf = [0_u8; 8];
        remove_head(q.as_deref_mut(), Some(&mut buf[..])).unwrap();
        assert_eq!(&buf[..2], b"c\0");
        assert_eq!(size(q.as_deref()), 2);

        destroy(q);
    }
}
