use crate::params::ValidationReport;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown danger level: {0}")]
    UnknownDangerLevel(String),

    #[error("unknown parameter type: {0}")]
    UnknownParamType(String),

    #[error("unknown parameter '{field}' for action '{action}'")]
    UnknownField { action: String, field: String },

    #[error("clearance {role} is not sufficient for action '{action}'")]
    AuthorizationDenied { action: String, role: String },

    #[error("session busy: a directive is already executing")]
    SessionBusy,

    #[error("no active alert to acknowledge")]
    NoActiveAlert,

    #[error("parameter validation failed: {0}")]
    InvalidParams(ValidationReport),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("dispatch failed: {0}")]
    DispatchFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
