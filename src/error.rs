use thiserror::Error;

/// Error types for container operations
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ContainerError {
    /// Index does not designate a live element
    #[error("Index out of bounds: index {index} is beyond container length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the container
        length: usize,
    },
    /// Insertion point lies past the end of the container
    #[error("Insert out of bounds: index {index} is greater than container length {length}")]
    InsertOutOfBounds {
        /// Requested insertion index
        index: usize,
        /// Current length of the container
        length: usize,
    },
    /// Operation requires at least one element
    #[error("Operation on empty container")]
    EmptyContainer,
    /// Growth coefficient would not make the buffer grow, or is too large
    #[error("Invalid growth policy: coefficient {coefficient} {reason}")]
    InvalidGrowthPolicy {
        /// Rejected coefficient
        coefficient: f32,
        /// Description of the constraint that was violated
        reason: &'static str,
    },
    /// Stack backing discriminator is not recognized
    #[error("Unknown stack kind: {discriminator}")]
    UnknownStackKind {
        /// The rejected discriminator, as given
        discriminator: u8,
    },
    /// Stack backing name is not recognized
    #[error("Unknown stack kind name: expected \"buffer\" or \"list\"")]
    UnknownStackKindName,
}
