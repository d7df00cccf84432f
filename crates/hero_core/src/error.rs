use crate::models::Role;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that prevent the hero document from being read at all.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Hero data unavailable at {path}: {source}")]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Hero data corrupt: {reason}")]
    DataCorrupt {
        reason: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl CatalogError {
    /// Load failures never stop the program; the session falls back to an
    /// empty catalog.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CatalogError::DataUnavailable { .. } => true,
            CatalogError::DataCorrupt { .. } => true,
        }
    }

    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        CatalogError::DataCorrupt {
            reason: reason.into(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::DataCorrupt {
            reason: err.to_string(),
            source: Some(err),
        }
    }
}

/// A single hero entry that was skipped while loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordFault {
    #[error("hero #{index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("hero #{index} ({name}): unknown role `{role}`")]
    UnknownRole {
        index: usize,
        name: String,
        role: String,
    },

    #[error("hero #{index} ({name}): duplicate name, keeping the first entry")]
    DuplicateName { index: usize, name: String },

    #[error("hero #{index}: {reason}")]
    Malformed {
        index: usize,
        name: Option<String>,
        reason: String,
    },
}

impl RecordFault {
    /// Position of the offending entry in the source `heroes` array.
    pub fn index(&self) -> usize {
        match self {
            RecordFault::MissingField { index, .. }
            | RecordFault::UnknownRole { index, .. }
            | RecordFault::DuplicateName { index, .. }
            | RecordFault::Malformed { index, .. } => *index,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Roster has no {role} slots")]
    UnknownRole { role: Role },

    #[error("{role} slot {index} out of range (roster has {capacity})")]
    SlotOutOfRange {
        role: Role,
        index: usize,
        capacity: usize,
    },

    #[error("All {role} slots are taken")]
    RoleFull { role: Role },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct ParseRoleError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid roster shape `{input}`: {reason}")]
    InvalidShape { input: String, reason: String },
}
