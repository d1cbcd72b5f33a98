use crate::error::{QueueError, Result};

use std::alloc::Layout;
use std::ptr::NonNull;

/// Moves `value` into a fresh heap allocation, reporting allocation failure
/// instead of aborting. On failure `value` is dropped before returning.
pub fn try_box<T>(value: T) -> Result<Box<T>> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(value));
    }

    let ptr = unsafe { std::alloc::alloc(layout) as *mut T };
    let ptr = match NonNull::new(ptr) {
        Some(ptr) => ptr,
        None => return Err(QueueError::AllocFailed { size: layout.size() }),
    };

    unsafe {
        ptr.as_ptr().write(value);
        // the block came from the global allocator with `Layout::new::<T>()`,
        // which is exactly what `Box<T>` frees with
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}

/// Copies `src` into newly owned storage of exactly `src.len()` bytes.
pub fn copy_value(src: &[u8]) -> Result<Box<[u8]>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())
        .map_err(|_| QueueError::AllocFailed { size: src.len() })?;
    buf.extend_from_slice(src);
    Ok(buf.into_boxed_slice())
}

#[cfg(test)]
mod test {
    use super::{copy_value, try_box};

    #[test]
    fn test_try_box() {
        let b = try_box(42_u64).unwrap();
        assert_eq!(*b, 42);

        let unit = try_box(()).unwrap();
        assert_eq!(*unit, ());
    }

    #[test]
    fn test_copy_value() {
        let src = b"gerbil".to_vec();
        let copy = copy_value(&src).unwrap();
        assert_eq!(&*copy, b"gerbil");
        assert_ne!(copy.as_ptr(), src.as_ptr());

        assert!(copy_value(b"").unwrap().is_empty());
    }
}
