//! Typed error taxonomy for the probability-plotting core.
//!
//! The core never prints or logs; front-ends catch these, present the message,
//! and exit with `Error::exit_code`.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Bad sample data: too few samples, non-finite values, or values outside
    /// the domain of a family's transform.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A distribution or quantile-method name that was never registered.
    #[error("Unknown {kind} name: '{name}'")]
    UnknownKey { kind: &'static str, name: String },

    /// An operation invoked before its required setup step.
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// Regression input with no defined fit (zero x-variance, too few points).
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Out-of-range candidate index.
    #[error("Index {index} out of bounds (len {len})")]
    Index { index: usize, len: usize },

    /// Failure reading the sample source.
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Process exit code for the `pplot` binary.
    ///
    /// 2 = usage/input-surface errors, 3 = bad data, 4 = computation errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::UnknownKey { .. } | Error::Io(_) => 2,
            Error::InvalidInput(_) => 3,
            Error::Precondition(_) | Error::DegenerateInput(_) | Error::Index { .. } => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_message_names_the_offender() {
        let err = Error::UnknownKey {
            kind: "distribution",
            name: "Gamma".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Gamma"));
        assert!(msg.contains("distribution"));
    }

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(
            Error::UnknownKey {
                kind: "distribution",
                name: "x".into()
            }
            .exit_code(),
            2
        );
        assert_eq!(Error::InvalidInput("bad".into()).exit_code(), 3);
        assert_eq!(Error::Index { index: 3, len: 0 }.exit_code(), 4);
    }
}
