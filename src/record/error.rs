use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("expected a JSON object for {record}, found {found}")]
    NotAnObject { record: &'static str, found: &'static str },
    #[error("invalid value for {record}.{property}: {source}")]
    InvalidDeclaredField {
        record: &'static str,
        property: String,
        source: serde_json::Error,
    },
    #[error("custom fragment {record}.{property} is not a valid {target}: {source}")]
    InvalidFragment {
        record: &'static str,
        property: String,
        target: &'static str,
        source: serde_json::Error,
    },
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// The property the error belongs to, if it concerns a single property.
    pub fn property(&self) -> Option<&str> {
        match self {
            DecodeError::InvalidDeclaredField { property, .. } | DecodeError::InvalidFragment { property, .. } => Some(property),
            DecodeError::NotAnObject { .. } | DecodeError::Json(_) => None,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum FragmentError {
    #[error("'{property}' is a declared field of {record} and cannot be stored as a custom fragment")]
    DeclaredField { record: &'static str, property: String },
}
