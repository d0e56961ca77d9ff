//! Error type shared by the whole console crate.

use thiserror::Error;

/// Errors that can occur when building or talking to a console.
///
/// Normal per-frame operation (appending, merging, eviction, fading) is total
/// and never produces an error. Everything here is either a setup problem or a
/// host integration bug.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A configuration value is out of its legal range or could not be parsed.
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending setting.
        field: &'static str,
        /// Human readable explanation.
        reason: String,
    },

    /// A required collaborator was not supplied at build time.
    #[error("Missing dependency: {0}")]
    MissingDependency(&'static str),

    /// The console behind a handle is gone (or was never attached).
    #[error("Console is not attached. Build a Console and keep it alive while handles are in use")]
    NotAttached,

    /// A pending line read lost its console before the line was committed.
    #[error("Line read aborted: the console was dropped before input was committed")]
    ReadAborted,
}

impl ConsoleError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConsoleError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConsoleError::invalid("alpha", "must be within 0 and 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for `alpha`: must be within 0 and 1"
        );

        let err = ConsoleError::MissingDependency("glyph metrics");
        assert_eq!(err.to_string(), "Missing dependency: glyph metrics");
    }
}
