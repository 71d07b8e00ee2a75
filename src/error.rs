use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetError>;

/// Errors surfaced at the API boundary of a `Network`.
///
/// Shape errors are detected before any neuron is touched, so a failed call
/// never leaves the network partially updated.
#[derive(Error, Debug)]
pub enum NetError {
    /// Fewer than two layers, or a layer with zero neurons.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// An input or target vector whose length disagrees with the topology.
    #[error("{what} has length {actual}, expected {expected}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetError {
    pub(crate) fn size_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        NetError::SizeMismatch { what, expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_message_names_the_vector() {
        let err = NetError::size_mismatch("input", 2, 3);
        assert_eq!(err.to_string(), "input has length 3, expected 2");
    }
}
