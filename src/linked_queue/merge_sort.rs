use super::node::{Link, Node};

/// Cuts the chain after its middle node, found with a slow/fast scan.
/// The front half keeps `ceil(n / 2)` nodes and the halves share nothing.
pub(crate) fn split(mut head: Box<Node>) -> (Box<Node>, Link) {
    // slow starts at `head`, fast one node ahead of it
    let mut steps = 0;
    let mut fast = head.next.as_deref();
    while let Some(next) = fast.and_then(|node| node.next.as_deref()) {
        steps += 1;
        fast = next.next.as_deref();
    }

    let mut slot = &mut head.next;
    for _ in 0..steps {
        if let Some(node) = slot {
            slot = &mut node.next;
        }
    }
    let back = slot.take();
    (head, back)
}

/// Splices two ascending chains into one. Ties take the left node.
pub(crate) fn merge(mut left: Link, mut right: Link) -> Link {
    let mut merged: Link = None;
    let mut cursor = &mut merged;
    loop {
        let take_left = match (&left, &right) {
            (Some(l), Some(r)) => l.value <= r.value,
            _ => break,
        };
        let src = if take_left { &mut left } else { &mut right };
        if let Some(mut node) = src.take() {
            *src = node.next.take();
            cursor = &mut cursor.insert(node).next;
        }
    }
    *cursor = if left.is_some() { left } else { right };
    merged
}

pub(crate) fn merge_sort(head: Link) -> Link {
    match head {
        Some(node) if node.next.is_some() => {
            let (front, back) = split(node);
            merge(merge_sort(Some(front)), merge_sort(back))
        }
        short => short,
    }
}
