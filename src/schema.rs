//! Column classification over Sea-ORM entity metadata.
//!
//! The schema descriptors Sea-ORM derives for each entity
//! (`Column::iter()`, `ColumnDef`, `PrimaryKey::iter()`) are the
//! registration-time metadata these functions read; nothing here is
//! discovered at runtime. The [`ResourceModel`](crate::ResourceModel)
//! defaults delegate to these so the classification is also usable
//! standalone, e.g. for request validation in a handler layer.

use sea_orm::{ColumnTrait, EntityTrait, IdenStatic, Iterable, PrimaryKeyToColumn};

/// Names of the columns the database requires to create a row:
/// non-nullable and not part of the primary key, in declaration order.
#[must_use]
pub fn required_columns<E: EntityTrait>() -> Vec<String> {
    let key = primary_key_names::<E>();
    E::Column::iter()
        .filter(|column| !column.def().is_null() && !key.iter().any(|k| k == column.as_str()))
        .map(|column| column.as_str().to_owned())
        .collect()
}

/// Names of the nullable columns, in declaration order.
#[must_use]
pub fn optional_columns<E: EntityTrait>() -> Vec<String> {
    E::Column::iter()
        .filter(|column| column.def().is_null())
        .map(|column| column.as_str().to_owned())
        .collect()
}

/// Names of all primary-key columns, in declaration order.
#[must_use]
pub fn primary_key_names<E: EntityTrait>() -> Vec<String> {
    E::PrimaryKey::iter()
        .map(|key| key.into_column().as_str().to_owned())
        .collect()
}

/// The first declared primary-key column.
///
/// Composite keys are truncated to their first column; a warning is
/// emitted when that happens. Derived entities always declare at least
/// one primary-key column, so the lookup cannot fail for mapped types.
#[must_use]
pub fn primary_key_column<E: EntityTrait>() -> E::Column {
    let mut keys = E::PrimaryKey::iter().map(PrimaryKeyToColumn::into_column);
    let first = keys
        .next()
        .expect("mapped entities declare at least one primary-key column");
    if keys.next().is_some() {
        tracing::warn!(
            primary_key = first.as_str(),
            "composite primary key reported as its first declared column only"
        );
    }
    first
}

/// Name of the first declared primary-key column.
#[must_use]
pub fn primary_key_name<E: EntityTrait>() -> String {
    primary_key_column::<E>().as_str().to_owned()
}
