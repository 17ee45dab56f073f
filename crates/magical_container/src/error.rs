use thiserror::Error;

/// Returned when an element is removed from a container that holds none.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("cannot remove an element from an empty container")]
pub struct EmptyContainerError;
