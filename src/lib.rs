mod heap;
mod ordering;
mod utils;

pub mod errors;

pub use errors::HeapError;
pub use heap::IntHeap;
pub use ordering::HeapOrder;
