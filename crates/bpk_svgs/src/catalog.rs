//! Build-time generated icon catalog and lookup helpers.
//!
//! Geometry lives in `icons/sm.toml` and `icons/lg.toml`; `build.rs` validates the manifests and
//! compiles each set into a name-sorted `static` table.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::descriptor::IconDescriptor;
use crate::error::CatalogError;

include!(concat!(env!("OUT_DIR"), "/icon_catalog_generated.rs"));

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Icon families sharing an intrinsic size and default display size.
pub enum IconSet {
    /// 18px icons drawn on a 24-unit grid (`1.125rem`).
    Sm,
    /// 24px icons (`1.5rem`).
    #[default]
    Lg,
}

impl IconSet {
    /// All sets in catalog order.
    pub const ALL: [IconSet; 2] = [IconSet::Sm, IconSet::Lg];

    /// Stable set token used in icon keys.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

impl Display for IconSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for IconSet {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "sm" => Ok(Self::Sm),
            "lg" => Ok(Self::Lg),
            other => Err(CatalogError::UnknownSet(other.to_string())),
        }
    }
}

/// Every icon of a set, sorted by name.
pub fn icons(set: IconSet) -> &'static [IconDescriptor] {
    match set {
        IconSet::Sm => &SM_ICONS,
        IconSet::Lg => &LG_ICONS,
    }
}

/// Finds one icon by name.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownIcon`] when the set has no icon with this name.
pub fn lookup(set: IconSet, name: &str) -> Result<&'static IconDescriptor, CatalogError> {
    let table = icons(set);
    match table.binary_search_by(|icon| icon.name().cmp(name)) {
        Ok(index) => Ok(&table[index]),
        Err(_) => {
            tracing::debug!(set = set.token(), name, "icon not found in catalog");
            Err(CatalogError::UnknownIcon {
                set: set.token(),
                name: name.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// `<set>/<name>` reference to a catalog icon, such as `lg/search`.
pub struct IconKey {
    /// Icon family.
    pub set: IconSet,
    /// Icon name within the family.
    pub name: String,
}

impl IconKey {
    /// Creates a key without checking that the icon exists.
    pub fn new(set: IconSet, name: impl Into<String>) -> Self {
        Self {
            set,
            name: name.into(),
        }
    }

    /// Resolves the key against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownIcon`] when no icon matches.
    pub fn resolve(&self) -> Result<&'static IconDescriptor, CatalogError> {
        lookup(self.set, &self.name)
    }

    /// Keys for every catalog icon, grouped by set.
    pub fn all() -> impl Iterator<Item = IconKey> {
        IconSet::ALL.into_iter().flat_map(|set| {
            icons(set)
                .iter()
                .map(move |icon| IconKey::new(set, icon.name()))
        })
    }
}

impl Display for IconKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.set, self.name)
    }
}

impl FromStr for IconKey {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let Some((set, name)) = raw.split_once('/') else {
            tracing::debug!(key = raw, "icon key without set separator");
            return Err(CatalogError::InvalidKey(raw.to_string()));
        };
        if name.is_empty() || name.contains('/') {
            tracing::debug!(key = raw, "icon key with malformed name");
            return Err(CatalogError::InvalidKey(raw.to_string()));
        }
        Ok(Self::new(set.parse()?, name))
    }
}
