//! Traits and functions to expose Sea-ORM entities as RESTful
//! resources: column classification, JSON serialization, hyperlink
//! metadata, resource URIs, and bulk attribute updates. Routing,
//! validation policy, and persistence stay with the consuming
//! application.

pub mod errors;
pub mod links;
pub mod schema;
pub mod traits;
pub mod values;

pub use errors::ApiError;
pub use links::{RelatedLink, RelationKind};
pub use traits::ResourceModel;
