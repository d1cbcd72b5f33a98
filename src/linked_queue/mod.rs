mod merge_sort;
mod node;
mod string_queue;

pub use string_queue::{Iter, StringQueue};
