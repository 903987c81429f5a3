use crate::HeapOrder;

#[inline]
pub(crate) fn parent_index(index: usize) -> Option<usize> {
    index.checked_sub(1).map(|i| i / 2)
}

#[inline]
pub(crate) fn left_child_index(index: usize) -> usize {
    2 * index + 1
}

/// Index of the last node that has at least one child, or None if there are
/// fewer than 2 items.
pub(crate) fn last_parent_index(len: usize) -> Option<usize> {
    if len < 2 {
        None
    } else {
        Some((len - 2) / 2)
    }
}

/// Check that no child outranks its parent under `order`.
pub(crate) fn is_heap(data: &[i64], order: HeapOrder) -> bool {
    (1..data.len()).all(|child| match parent_index(child) {
        Some(parent) => !order.less(data[child], data[parent]),
        None => true,
    })
}
