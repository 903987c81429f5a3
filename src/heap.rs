use crate::errors::HeapError;
use crate::utils::{is_heap, last_parent_index, left_child_index, parent_index};
use crate::HeapOrder;
use tracing::{debug, trace};

/**
 * A binary heap of integers, kept in a single `Vec` in heap order.
 *
 * The ordering is chosen at construction and never changes: a `Min` heap
 * keeps its smallest element at the root, a `Max` heap its largest. Equal
 * elements come out in no particular order.
 *
 * NB: There is no internal locking. Sharing a heap between threads that
 * mutate it needs external synchronization (eg a `Mutex`).
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntHeap {
    data: Vec<i64>,
    order: HeapOrder,
}

impl IntHeap {
    /// Build a heap over `items` in O(n).
    pub fn new<I: IntoIterator<Item = i64>>(order: HeapOrder, items: I) -> Self {
        let mut heap = IntHeap {
            data: items.into_iter().collect(),
            order,
        };
        heap.heapify();
        debug_assert!(is_heap(&heap.data, order));
        trace!(len = heap.data.len(), %order, "built heap");
        heap
    }

    pub fn new_min<I: IntoIterator<Item = i64>>(items: I) -> Self {
        IntHeap::new(HeapOrder::Min, items)
    }

    pub fn new_max<I: IntoIterator<Item = i64>>(items: I) -> Self {
        IntHeap::new(HeapOrder::Max, items)
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The backing store in heap order. Only the first element (the root)
    /// has a guaranteed position.
    pub fn snapshot(&self) -> &[i64] {
        &self.data
    }

    pub fn insert(&mut self, x: i64) {
        self.data.push(x);
        self.sift_up(self.data.len() - 1);
    }

    /// The highest-priority element, without removing it.
    pub fn peek(&self) -> Result<i64, HeapError> {
        match self.data.first() {
            Some(&root) => Ok(root),
            None => {
                debug!("peek on empty heap");
                Err(HeapError::EmptyHeap)
            }
        }
    }

    /// Remove and return the highest-priority element.
    pub fn extract_root(&mut self) -> Result<i64, HeapError> {
        let last = match self.data.pop() {
            Some(last) => last,
            None => {
                debug!("extract_root on empty heap");
                return Err(HeapError::EmptyHeap);
            }
        };
        if self.data.is_empty() {
            return Ok(last);
        }
        let root = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Ok(root)
    }

    /// Consume the heap, returning its elements in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<i64> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(x) = self.extract_root() {
            sorted.push(x);
        }
        sorted
    }

    fn heapify(&mut self) {
        if let Some(last_parent) = last_parent_index(self.data.len()) {
            for index in (0..=last_parent).rev() {
                self.sift_down(index);
            }
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = parent_index(index) {
            if !self.order.less(self.data[index], self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = left_child_index(index);
            if left >= len {
                break;
            }
            let right = left + 1;
            // Pick the child with the higher priority.
            let child = if right < len && self.order.less(self.data[right], self.data[left]) {
                right
            } else {
                left
            };
            if !self.order.less(self.data[child], self.data[index]) {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}

impl Default for IntHeap {
    fn default() -> Self {
        IntHeap::from(HeapOrder::default())
    }
}

impl From<HeapOrder> for IntHeap {
    fn from(order: HeapOrder) -> Self {
        IntHeap {
            data: Vec::new(),
            order,
        }
    }
}

impl Extend<i64> for IntHeap {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}
