use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Structural problems found while walking a [`NodeTree`](crate::NodeTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("cyclic node graph: {id} is its own ancestor")]
    Cycle { id: String },

    #[error("node {parent} references missing child {child}")]
    MissingChild { parent: String, child: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error("backend error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an error raised by a [`Backend`](crate::Backend) implementation.
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Backend(err.into())
    }
}
