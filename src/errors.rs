use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the register can report.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Input validation ---------------------------------------------------
    /// Blank name entered at `add`.
    #[error("Full name cannot be empty.")]
    EmptyName,

    /// The grades line held no tokens at all.
    #[error("no grades entered")]
    EmptyGradeInput,

    /// A grade token that does not parse as a number.
    #[error("invalid grade: '{0}'")]
    InvalidNumber(String),

    /// A parsed grade outside the closed range [2, 5].
    #[error("grade '{0:.1}' must be between 2 and 5")]
    OutOfRange(f64),

    /// Threshold token that does not parse as a number.
    #[error("Invalid number: '{0}'.")]
    InvalidThreshold(String),

    // ---- Routing ------------------------------------------------------------
    /// No menu command matches the entered token.
    #[error("Unknown command. Available: {valid}")]
    UnknownCommand { command: String, valid: String },

    // ---- Config -------------------------------------------------------------
    /// Any issue reading the config file (unreadable, invalid JSON, bad value).
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (terminal streams, log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Helper for an unknown menu command.
    pub fn unknown<S: Into<String>, V: Into<String>>(cmd: S, valid: V) -> Self {
        Error::UnknownCommand {
            command: cmd.into(),
            valid: valid.into(),
        }
    }

    /// True for errors caused by user input: report them and keep the loop going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::EmptyName
                | Error::EmptyGradeInput
                | Error::InvalidNumber(_)
                | Error::OutOfRange(_)
                | Error::InvalidThreshold(_)
                | Error::UnknownCommand { .. }
        )
    }

    /// True for the failures of a grades line.
    pub fn is_grade_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyGradeInput | Error::InvalidNumber(_) | Error::OutOfRange(_)
        )
    }
}
