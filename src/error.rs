use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueueError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue handle is absent")]
    Absent,

    #[error("queue is empty")]
    Empty,

    #[error("failed to allocate {size} bytes")]
    AllocFailed { size: usize },
}
