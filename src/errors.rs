use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum HeapError {
    #[error("Heap is empty")]
    EmptyHeap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(HeapError::EmptyHeap.to_string(), "Heap is empty");
    }
}
