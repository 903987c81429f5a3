use std::fmt;

/// Which end of the integer range a heap keeps at its root.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HeapOrder {
    Min,
    Max,
}

impl HeapOrder {
    /// True if `a` has strictly higher priority than `b`.
    #[inline]
    pub fn less(self, a: i64, b: i64) -> bool {
        match self {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }
}

impl Default for HeapOrder {
    fn default() -> Self {
        HeapOrder::Min
    }
}

impl fmt::Display for HeapOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapOrder::Min => write!(f, "min"),
            HeapOrder::Max => write!(f, "max"),
        }
    }
}
