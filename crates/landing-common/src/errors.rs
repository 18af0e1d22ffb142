use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of a single form submission attempt.
///
/// Validation problems never surface here: they are reported inline on the
/// offending fields and abort the attempt before any request is made.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("no submission endpoint configured")]
    MissingEndpoint,

    #[error("failed to build request: {0}")]
    Request(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    #[error("unknown message kind: {0}")]
    UnknownKind(String),

    #[error("invalid snapshot: {0}")]
    Snapshot(String),

    #[error("no document mounted")]
    NotMounted,
}

#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("nav.mobile_breakpoint = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: nav.mobile_breakpoint = 0"
        );
    }

    #[test]
    fn submit_error_display() {
        assert_eq!(
            SubmitError::Status(500).to_string(),
            "server responded with HTTP 500"
        );
        assert_eq!(
            SubmitError::Transport("connection refused".into()).to_string(),
            "transport error: connection refused"
        );
        assert_eq!(
            SubmitError::MissingEndpoint.to_string(),
            "no submission endpoint configured"
        );
    }

    #[test]
    fn bridge_error_display() {
        let err = BridgeError::UnknownKind("teleport".into());
        assert_eq!(err.to_string(), "unknown message kind: teleport");
        assert_eq!(BridgeError::NotMounted.to_string(), "no document mounted");
    }

    #[test]
    fn landing_error_from_config() {
        let err: LandingError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, LandingError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn landing_error_from_submit() {
        let err: LandingError = SubmitError::Status(503).into();
        assert!(matches!(err, LandingError::Submit(SubmitError::Status(503))));
    }

    #[test]
    fn landing_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LandingError = io_err.into();
        assert!(matches!(err, LandingError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
