use thiserror::Error;

/// Unified error type for the seriesfn workspace.
///
/// This wraps lookup misses, registration-time schema violations, argument
/// validation failures, and per-series data problems raised by the
/// transforms.
#[derive(Debug, Error)]
pub enum SeriesFnError {
    /// No function is registered under the requested name.
    #[error("unknown function: {name}")]
    UnknownFunction {
        /// The name the host's query expression referenced.
        name: String,
    },

    /// A function spec failed registration-time validation.
    #[error("cannot register {function}: {msg}")]
    Registration {
        /// Name of the function whose spec was rejected.
        function: String,
        /// Human-readable description of the schema violation.
        msg: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A node index addressed past the end of a series' extracted tokens.
    #[error("node index {index} out of bounds for {tokens} token(s) in series '{series}'")]
    IndexOutOfBounds {
        /// The 0-based index that was requested.
        index: usize,
        /// How many tokens the extracted metric path actually has.
        tokens: usize,
        /// Display name of the offending series.
        series: String,
    },

    /// Issues with the data being transformed (unextractable names, etc.).
    #[error("data issue: {0}")]
    Data(String),
}

impl SeriesFnError {
    /// Helper: build an `UnknownFunction` error for a requested name.
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    /// Helper: build a `Registration` error with the function name and message.
    pub fn registration(function: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Registration {
            function: function.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Data` error from a message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
