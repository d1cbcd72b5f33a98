mod raw_node;

pub use raw_node::{copy_value, try_box};
