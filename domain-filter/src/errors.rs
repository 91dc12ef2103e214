/// Errors raised while building filters or decoding field metadata
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A mandatory leaf parameter was empty; carries the parameter name
    InvalidArgument { parameter: &'static str },
    IndexOutOfBounds { index: usize, len: usize },
    /// Only produced by the opt-in arity validation
    MalformedDomain { position: usize, reason: String },
    /// Decoding failure, also returned by `FieldCollection::from_fields_get`
    /// for malformed field metadata
    SerializationError(String),
}

impl From<serde_json::Error> for FilterError {
    fn from(error: serde_json::Error) -> Self {
        FilterError::SerializationError(error.to_string())
    }
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::InvalidArgument { parameter } => {
                write!(f, "Invalid argument: filter {} is mandatory", parameter)
            }
            FilterError::IndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "Filter index {} is out of bounds for a filter of size {}",
                    index, len
                )
            }
            FilterError::MalformedDomain { position, reason } => {
                write!(f, "Malformed domain at position {}: {}", position, reason)
            }
            FilterError::SerializationError(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for FilterError {}
