//! A queue of byte strings on a singly linked list.
//!
//! [`StringQueue`] owns its nodes through the `next` links and keeps a
//! non-owning pointer to the last node, so both ends accept inserts in O(1).
//! [`handle`] exposes the same operations over nullable queue handles.

pub mod error;
pub mod handle;
pub mod linked_queue;
mod raw;

pub use error::{QueueError, Result};
pub use linked_queue::{Iter, StringQueue};
