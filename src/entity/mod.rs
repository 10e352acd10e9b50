//! Database entity models for the workout client.
//!
//! This module contains the Sea-ORM entity definitions for every table the
//! client manages. Each entity module also declares a `Unique` enum listing
//! the ways a single row can be addressed (its primary key plus any compound
//! unique keys); delegates accept these wherever exactly one row is expected.
//!
//! Ids and timestamps are owned by the entities' `ActiveModelBehavior`: an
//! unset `id` receives a fresh UUID on insert, `created_at` is stamped on
//! insert and `updated_at` on every save.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::IntoCondition;
use sea_orm::{ActiveValue, Set};

pub mod personal_record;
pub mod user_summary;
pub mod workout_exercise;
pub mod workout_goal;
pub mod workout_record;
pub mod workout_session;
pub mod workout_template;

/// Metadata the generic [`Delegate`](crate::Delegate) needs about an entity.
pub trait ClientEntity: EntityTrait {
    /// Input addressing exactly one row.
    type Unique: IntoCondition + Send;

    /// Name used in errors and logs.
    const MODEL: &'static str;

    /// Column stamped once on insert and never rewritten.
    fn created_at_column() -> Self::Column;

    /// Column stamped on every write.
    fn updated_at_column() -> Self::Column;

    /// Checks a model about to be written. Fields left `NotSet` are skipped.
    fn validate(_model: &Self::ActiveModel) -> Result<(), String> {
        Ok(())
    }
}

pub(crate) fn now() -> DateTimeWithTimeZone {
    chrono::Utc::now().fixed_offset()
}

/// Assigns the id and timestamps owned by the client.
pub(crate) fn stamp(
    id: &mut ActiveValue<String>,
    created_at: &mut ActiveValue<DateTimeWithTimeZone>,
    updated_at: &mut ActiveValue<DateTimeWithTimeZone>,
    insert: bool,
) {
    let now = now();
    if insert {
        if id.is_not_set() {
            *id = Set(Uuid::new_v4().to_string());
        }
        if created_at.is_not_set() {
            *created_at = Set(now);
        }
    }
    *updated_at = Set(now);
}

/// The value an active model will hold after saving, if known.
pub(crate) fn value<T>(field: &ActiveValue<T>) -> Option<&T>
where
    T: Into<Value>,
{
    match field {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

pub(crate) fn check_rating(name: &str, rating: Option<i32>) -> Result<(), String> {
    match rating {
        Some(r) if !(1..=10).contains(&r) => {
            Err(format!("{name} must be between 1 and 10, got {r}"))
        }
        _ => Ok(()),
    }
}

pub(crate) fn check_not_blank(name: &str, text: Option<&String>) -> Result<(), String> {
    match text {
        Some(t) if t.trim().is_empty() => Err(format!("{name} must not be empty")),
        _ => Ok(()),
    }
}

/// Implements `From<String>`/`From<&str>` for a `Unique` enum via its `Id` variant.
macro_rules! unique_from_id {
    ($unique:ty) => {
        impl From<String> for $unique {
            fn from(id: String) -> Self {
                Self::Id(id)
            }
        }

        impl From<&str> for $unique {
            fn from(id: &str) -> Self {
                Self::Id(id.to_owned())
            }
        }
    };
}
pub(crate) use unique_from_id;
