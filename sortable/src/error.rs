use core::fmt;

/// Errors reported by a [`crate::SortableScope`] while applying a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The index is outside the container (`len` items). For inserts, `index == len` is valid.
    IndexOutOfBounds { index: usize, len: usize },
    /// The container is already borrowed by someone else (e.g. a render pass holding it).
    ContainerBusy,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for container of {len} items")
            }
            Self::ContainerBusy => f.write_str("container is busy"),
        }
    }
}

impl core::error::Error for MoveError {}
