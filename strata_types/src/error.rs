use crate::FormatVersion;
use std::io;
use thiserror::Error;

pub type StrataResult<T> = Result<T, StrataError>;

/// Why one field could not be processed.
#[derive(Error, Debug)]
pub enum FieldFailure {
    /// The adapter could not be constructed from its declared binding.
    #[error("adapter binding failed: {0}")]
    Binding(#[source] anyhow::Error),

    /// The field's value could not be read off, or assigned into, the object.
    #[error("field access failed: {0}")]
    Access(#[source] anyhow::Error),

    /// The adapter failed while encoding or decoding the value.
    #[error("adapter codec failed: {0}")]
    Codec(#[source] anyhow::Error),

    /// The underlying sink or source failed.
    #[error("transport failed: {0}")]
    Transport(#[from] io::Error),
}

impl FieldFailure {
    /// Classifies an adapter error.
    /// An I/O error surfaced by the adapter is the transport's, and is kept as is.
    pub fn from_codec(e: anyhow::Error) -> Self {
        match e.downcast::<io::Error>() {
            Ok(io_err) => Self::Transport(io_err),
            Err(e) => Self::Codec(e),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[derive(Error, Debug)]
pub enum StrataError {
    #[error("Invalid schema for type '{owner}': {reason}")]
    InvalidSchema { owner: &'static str, reason: String },

    #[error("Error binding field '{field}' of type '{owner}' with adapter '{adapter}', in version = {current_version}")]
    Resolve {
        field: &'static str,
        owner: &'static str,
        adapter: &'static str,
        current_version: FormatVersion,
        #[source]
        cause: FieldFailure,
    },

    #[error("Error accessing version tag of type '{owner}'")]
    Header {
        owner: &'static str,
        #[source]
        cause: io::Error,
    },

    #[error("Error serializing field '{field}' of type '{owner}' with adapter '{adapter}', in version = {current_version}")]
    Serialize {
        field: &'static str,
        owner: &'static str,
        adapter: &'static str,
        current_version: FormatVersion,
        #[source]
        cause: FieldFailure,
    },

    #[error("Error deserializing field '{field}' of type '{owner}' with adapter '{adapter}', in version = {current_version}, serialized in version = {serialized_version}")]
    Deserialize {
        field: &'static str,
        owner: &'static str,
        adapter: &'static str,
        current_version: FormatVersion,
        serialized_version: FormatVersion,
        #[source]
        cause: FieldFailure,
    },
}

impl StrataError {
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Resolve { field, .. }
            | Self::Serialize { field, .. }
            | Self::Deserialize { field, .. } => Some(field),
            Self::InvalidSchema { .. } | Self::Header { .. } => None,
        }
    }

    pub fn field_failure(&self) -> Option<&FieldFailure> {
        match self {
            Self::Resolve { cause, .. }
            | Self::Serialize { cause, .. }
            | Self::Deserialize { cause, .. } => Some(cause),
            Self::InvalidSchema { .. } | Self::Header { .. } => None,
        }
    }
}
