use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("index {index} out of range for heap of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("heap is empty")]
    Empty,
}
