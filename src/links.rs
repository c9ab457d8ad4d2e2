//! Relationship descriptors used to build the `Link` header map.
//!
//! SQLAlchemy-style relationship inspection has no runtime counterpart
//! here: a resource declares its relationships as an explicit list of
//! [`RelatedLink`] values, each carrying the relationship key, a
//! cardinality indicator, and the URI of the currently loaded related
//! resource (if any).

/// Cardinality of a declared relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// Single-valued (belongs-to / has-one); eligible for a hyperlink.
    Single,
    /// Collection-valued (one-to-many / many-to-many); never linked.
    Collection,
}

/// One declared relationship on a resource.
#[derive(Debug, Clone)]
pub struct RelatedLink {
    /// Relationship key, as it should appear in the link map.
    pub key: &'static str,
    /// Cardinality of the relationship.
    pub kind: RelationKind,
    /// `resource_uri()` of the loaded related resource, if one is
    /// loaded and non-null. Always `None` for collections.
    pub target: Option<String>,
}

impl RelatedLink {
    /// A single-valued relationship, linked when `target` is present.
    #[must_use]
    pub fn single(key: &'static str, target: Option<String>) -> Self {
        Self {
            key,
            kind: RelationKind::Single,
            target,
        }
    }

    /// A collection-valued relationship. Declared for completeness;
    /// collections never contribute a hyperlink.
    #[must_use]
    pub fn collection(key: &'static str) -> Self {
        Self {
            key,
            kind: RelationKind::Collection,
            target: None,
        }
    }
}
