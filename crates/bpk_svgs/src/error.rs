//! Catalog lookup and descriptor validation errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned when resolving icons from the generated catalog.
pub enum CatalogError {
    /// The set exists but has no icon with this name.
    #[error("unknown icon `{name}` in set `{set}`")]
    UnknownIcon {
        /// Set token (`sm` or `lg`).
        set: &'static str,
        /// Requested icon name.
        name: String,
    },
    /// No icon set uses this token.
    #[error("unknown icon set `{0}` (expected `sm` or `lg`)")]
    UnknownSet(String),
    /// The key is not of the form `<set>/<name>`.
    #[error("invalid icon key `{0}` (expected `<set>/<name>`)")]
    InvalidKey(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Generation-time faults in an [`IconDescriptor`](crate::IconDescriptor).
pub enum DescriptorError {
    /// The icon name is blank.
    #[error("icon name is empty")]
    EmptyName,
    /// Intrinsic width or height is zero.
    #[error("icon `{name}` has a zero intrinsic size")]
    ZeroSize {
        /// Offending icon.
        name: String,
    },
    /// Default display size is blank.
    #[error("icon `{name}` has an empty default size")]
    EmptyDefaultSize {
        /// Offending icon.
        name: String,
    },
    /// View box has a non-positive extent.
    #[error("icon `{name}` has an invalid view box `{view_box}`")]
    InvalidViewBox {
        /// Offending icon.
        name: String,
        /// Formatted view box.
        view_box: String,
    },
    /// A draw instruction carries blank path data.
    #[error("icon `{name}` has empty path data at shape {index}")]
    EmptyPathData {
        /// Offending icon.
        name: String,
        /// Index of the blank instruction.
        index: usize,
    },
}
