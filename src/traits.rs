use std::collections::{BTreeMap, HashSet};

use axum::http::Method;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IdenStatic, Iterable, ModelTrait};
use serde_json::{Map, Value as JsonValue};

use crate::errors::ApiError;
use crate::links::{RelatedLink, RelationKind};
use crate::{schema, values};

/// The base contract for exposing a Sea-ORM entity as a RESTful
/// resource. There is a one-to-one mapping between a mapped table and a
/// `ResourceModel` implementation.
///
/// Every operation is a stateless transformation over the model's
/// current values and the entity's statically derived schema metadata;
/// persistence, transactions, and routing stay with the caller.
pub trait ResourceModel: Sized {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>;

    /// The relative URL this resource lives at, fixed at impl time.
    const URL: &'static str;

    /// The API version of this resource (not yet used).
    const VERSION: &'static str = "1";

    /// The underlying model, for column access.
    fn model(&self) -> &<Self::Entity as EntityTrait>::Model;

    /// The HTTP methods this resource supports (default: all seven).
    /// The routing layer is responsible for enforcing this set.
    #[must_use]
    fn allowed_methods() -> HashSet<Method> {
        [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ]
        .into_iter()
        .collect()
    }

    /// Names of all columns required by the database to create the
    /// resource: non-nullable and not part of the primary key.
    #[must_use]
    fn required() -> Vec<String> {
        schema::required_columns::<Self::Entity>()
    }

    /// Names of all nullable columns; these may be set but are not
    /// required.
    #[must_use]
    fn optional() -> Vec<String> {
        schema::optional_columns::<Self::Entity>()
    }

    /// Name of the resource's primary-key column.
    ///
    /// Composite keys report only their first declared column; see
    /// [`schema::primary_key_column`].
    #[must_use]
    fn primary_key() -> String {
        schema::primary_key_name::<Self::Entity>()
    }

    /// The resource as a JSON dictionary: every column name mapped to
    /// its current value, with decimals widened to floats.
    ///
    /// Idempotent: repeated calls without mutation yield identical
    /// maps.
    #[must_use]
    fn to_dict(&self) -> Map<String, JsonValue> {
        let mut dict = Map::new();
        for column in <Self::Entity as EntityTrait>::Column::iter() {
            let value = self.model().get(column);
            dict.insert(column.as_str().to_owned(), values::json_value(value));
        }
        dict
    }

    /// The resource's declared relationships, with the URIs of any
    /// currently loaded related resources. Default: none.
    #[must_use]
    fn relationships(&self) -> Vec<RelatedLink> {
        Vec::new()
    }

    /// Link header values for this resource: always a `self` entry,
    /// plus one entry per single-valued relationship whose related
    /// resource is loaded. Collection-valued relationships never
    /// contribute.
    #[must_use]
    fn links(&self) -> BTreeMap<String, String> {
        let mut links = BTreeMap::new();
        links.insert("self".to_owned(), self.resource_uri());
        for related in self.relationships() {
            if related.kind == RelationKind::Collection {
                continue;
            }
            if let Some(uri) = related.target {
                links.insert(related.key.to_owned(), uri);
            }
        }
        links
    }

    /// The relative URI of this specific resource:
    /// `URL + "/" + <primary key value>`.
    #[must_use]
    fn resource_uri(&self) -> String {
        let key = self.model().get(schema::primary_key_column::<Self::Entity>());
        format!("{}/{}", Self::URL, values::uri_segment(key))
    }

    /// Apply attribute → value pairs to the given active model.
    ///
    /// Each name is resolved against the entity's columns and each
    /// value converted to the column's declared type before being set.
    /// Persistence stays with the caller's session.
    ///
    /// # Errors
    ///
    /// `ApiError::UnknownAttribute` for names matching no column,
    /// `ApiError::InvalidValue` for values the column type cannot
    /// hold. Not atomic: assignments made before a failure remain
    /// applied to the active model.
    fn update(
        model: &mut Self::ActiveModel,
        attributes: &Map<String, JsonValue>,
    ) -> Result<(), ApiError> {
        for (attribute, value) in attributes {
            let column = <Self::Entity as EntityTrait>::Column::iter()
                .find(|column| column.as_str() == attribute)
                .ok_or_else(|| ApiError::unknown_attribute(attribute.as_str()))?;
            model.set(
                column,
                values::column_value(attribute, &column.def(), value)?,
            );
        }
        Ok(())
    }
}
