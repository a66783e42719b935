//! Backpack SVG icon catalog and the generic icon rendering contract.
//!
//! Every icon is plain data: an [`IconDescriptor`] holding intrinsic size, an optional view box,
//! a default display size, and ordered path geometry. A single [`render`] function turns a
//! descriptor plus a caller [`RenderRequest`] into a [`RenderableNode`]: the default size style
//! merged with caller overrides, caller attributes forwarded onto the `<svg>` root, and one
//! `<path>` child per draw instruction.
//!
//! Catalog icons are generated at build time from `icons/<set>.toml` and looked up through
//! [`lookup`] or [`IconKey`]. [`BpkIcon`] renders either a catalog entry or an ad hoc descriptor
//! as a Leptos view.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod catalog;
mod component;
mod descriptor;
mod error;
mod node;
mod props;
mod render;
mod request;

pub use catalog::{icons, lookup, IconKey, IconSet};
pub use component::{BpkIcon, IconSource};
pub use descriptor::{DrawInstruction, FillRule, IconDescriptor, ViewBox};
pub use error::{CatalogError, DescriptorError};
pub use node::RenderableNode;
pub use props::PropertyMap;
pub use render::{default_style, merge_style, render, SVG_NAMESPACE};
pub use request::{AttributeMap, RenderRequest, StyleMap};

/// Convenience imports for crates rendering catalog icons.
pub mod prelude {
    pub use crate::{
        lookup, render, AttributeMap, BpkIcon, IconDescriptor, IconKey, IconSet, IconSource,
        RenderRequest, RenderableNode, StyleMap,
    };
}
