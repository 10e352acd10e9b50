//! Reusable session plans.

use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::IntoCondition;
use sea_orm::{Condition, FromJsonQueryResult};
use serde::{Deserialize, Serialize};

use super::{check_not_blank, value, ClientEntity};

/// One planned exercise inside a template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateExercise {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// JSON column holding the ordered exercise plan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TemplateExercises(pub Vec<TemplateExercise>);

/// JSON column holding free-form labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Tags(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "workout_template")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub exercises: TemplateExercises,
    #[sea_orm(column_type = "Json")]
    pub tags: Tags,
    pub is_public: bool,
    pub use_count: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        super::stamp(&mut self.id, &mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

/// Ways to address a single template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unique {
    Id(String),
}

super::unique_from_id!(Unique);

impl IntoCondition for Unique {
    fn into_condition(self) -> Condition {
        match self {
            Unique::Id(id) => Condition::all().add(Column::Id.eq(id)),
        }
    }
}

impl ClientEntity for Entity {
    type Unique = Unique;

    const MODEL: &'static str = "WorkoutTemplate";

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn validate(model: &ActiveModel) -> Result<(), String> {
        check_not_blank("name", value(&model.name))?;
        if let Some(n) = value(&model.use_count).filter(|n| **n < 0) {
            return Err(format!("use_count must not be negative, got {n}"));
        }
        if let Some(TemplateExercises(exercises)) = value(&model.exercises) {
            for (i, exercise) in exercises.iter().enumerate() {
                if exercise.exercise_name.trim().is_empty() {
                    return Err(format!("exercise #{i} has no name"));
                }
                if exercise.sets < 1 || exercise.reps < 1 {
                    return Err(format!(
                        "exercise '{}' needs at least one set and one rep",
                        exercise.exercise_name
                    ));
                }
            }
        }
        Ok(())
    }
}
