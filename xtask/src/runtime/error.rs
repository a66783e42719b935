//! Structured xtask error types.

use std::fmt::{self, Display, Formatter};

use bpk_svgs::{CatalogError, DescriptorError};

/// Stable error categories for xtask workflows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum XtaskErrorCategory {
    /// Icon lookup failed or catalog data is invalid.
    Catalog,
    /// Missing or mismatched local environment prerequisites.
    Environment,
    /// Failure to spawn a child process.
    ProcessLaunch,
    /// Child process exited unsuccessfully.
    ProcessExit,
    /// Invalid user input.
    Validation,
    /// Serialization or general I/O failure.
    Io,
}

/// Structured xtask error with contextual metadata.
///
/// The formatted display output is CLI-friendly. Optional `operation` and `hint` fields can be
/// attached as the error propagates so failures remain actionable where they are shown.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XtaskError {
    /// High-level error category.
    pub category: XtaskErrorCategory,
    /// Human-readable message.
    pub message: String,
    /// Optional operation name.
    pub operation: Option<String>,
    /// Optional remediation hint.
    pub hint: Option<String>,
}

/// Convenience result type for xtask internals.
pub type XtaskResult<T> = Result<T, XtaskError>;

impl XtaskError {
    /// Create an error with the given category and message.
    pub fn new(category: XtaskErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            operation: None,
            hint: None,
        }
    }

    /// Create a catalog error.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Catalog, message)
    }

    /// Create an environment error.
    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Environment, message)
    }

    /// Create a process launch error.
    pub fn process_launch(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::ProcessLaunch, message)
    }

    /// Create a process exit error.
    pub fn process_exit(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::ProcessExit, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Validation, message)
    }

    /// Create an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Io, message)
    }

    /// Attach an operation label.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for XtaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(operation) = &self.operation {
            write!(f, " [operation: {operation}]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " [hint: {hint}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for XtaskError {}

impl From<std::io::Error> for XtaskError {
    fn from(value: std::io::Error) -> Self {
        XtaskError::io(value.to_string())
    }
}

impl From<serde_json::Error> for XtaskError {
    fn from(value: serde_json::Error) -> Self {
        XtaskError::io(value.to_string())
    }
}

impl From<CatalogError> for XtaskError {
    fn from(value: CatalogError) -> Self {
        XtaskError::catalog(value.to_string())
    }
}

impl From<DescriptorError> for XtaskError {
    fn from(value: DescriptorError) -> Self {
        XtaskError::catalog(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_appends_context_fields() {
        let err = XtaskError::process_exit("`cargo` exited with status 101")
            .with_operation("verify")
            .with_hint("rerun with `cargo xtask verify fast`");
        assert_eq!(
            err.to_string(),
            "`cargo` exited with status 101 [operation: verify] [hint: rerun with `cargo xtask verify fast`]"
        );
    }

    #[test]
    fn catalog_errors_keep_their_message() {
        let err = XtaskError::from(CatalogError::UnknownSet("xl".to_string()));
        assert_eq!(err.category, XtaskErrorCategory::Catalog);
        assert_eq!(err.message, "unknown icon set `xl` (expected `sm` or `lg`)");
    }
}
