use serde::{Deserialize, Serialize};

use crate::FieldErrors;

/// Outcome of a sign-in or sign-up action.
///
/// Every variant carries a human readable `message`. Failures carry either
/// per-field errors or a short error code, never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionResult {
    Success { message: String },
    ValidationFailure { message: String, errors: FieldErrors },
    BusinessFailure { message: String, code: String },
    UnexpectedFailure { message: String, code: String },
}

impl ActionResult {
    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    /// A single message attributed to a single form field.
    pub(crate) fn field(message: &str, field: &str) -> Self {
        Self::ValidationFailure {
            message: message.to_owned(),
            errors: FieldErrors::from([(field.to_owned(), vec![message.to_owned()])]),
        }
    }

    pub(crate) fn business(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::BusinessFailure {
            message: message.into(),
            code: code.into(),
        }
    }

    pub(crate) fn unexpected(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::UnexpectedFailure {
            message: message.into(),
            code: code.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message }
            | Self::ValidationFailure { message, .. }
            | Self::BusinessFailure { message, .. }
            | Self::UnexpectedFailure { message, .. } => message,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::ValidationFailure { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::BusinessFailure { code, .. } | Self::UnexpectedFailure { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// JSON shape returned to form callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ActionResult> for ActionResponse {
    fn from(value: ActionResult) -> Self {
        match value {
            ActionResult::Success { message } => Self {
                success: true,
                message,
                errors: None,
                error: None,
            },
            ActionResult::ValidationFailure { message, errors } => Self {
                success: false,
                message,
                errors: Some(errors),
                error: None,
            },
            ActionResult::BusinessFailure { message, code }
            | ActionResult::UnexpectedFailure { message, code } => Self {
                success: false,
                message,
                errors: None,
                error: Some(code),
            },
        }
    }
}
