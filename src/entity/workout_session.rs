//! A single training session performed (or planned) by a user.

use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{IntoCondition, StringLen};
use sea_orm::Condition;

use super::{check_rating, value, ClientEntity};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum SessionStatus {
    #[sea_orm(string_value = "planned")]
    Planned,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Sea-ORM entity model for the `workout_session` table.
///
/// | Column             | Type        | Notes                              |
/// |--------------------|-------------|------------------------------------|
/// | id                 | TEXT (PK)   | UUID assigned on insert            |
/// | user_id            | TEXT        | indexed                            |
/// | status             | VARCHAR(32) | see [`SessionStatus`]              |
/// | perceived_exertion | INTEGER     | optional, 1 to 10                  |
/// | energy_rating      | INTEGER     | optional, 1 to 10                  |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "workout_session")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub user_id: String,
    pub name: Option<String>,
    pub status: SessionStatus,
    pub started_at: Option<DateTimeWithTimeZone>,
    pub completed_at: Option<DateTimeWithTimeZone>,
    pub duration_minutes: Option<i32>,
    pub perceived_exertion: Option<i32>,
    pub energy_rating: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::workout_exercise::Entity")]
    WorkoutExercise,
    #[sea_orm(has_many = "super::workout_record::Entity")]
    WorkoutRecord,
}

impl Related<super::workout_exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutExercise.def()
    }
}

impl Related<super::workout_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutRecord.def()
    }
}

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

/// Ways to address a single session.
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

    const MODEL: &'static str = "WorkoutSession";

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn validate(model: &ActiveModel) -> Result<(), String> {
        check_rating("perceived_exertion", value(&model.perceived_exertion).copied().flatten())?;
        check_rating("energy_rating", value(&model.energy_rating).copied().flatten())?;
        if let Some(Some(minutes)) = value(&model.duration_minutes) {
            if *minutes < 0 {
                return Err(format!("duration_minutes must not be negative, got {minutes}"));
            }
        }
        if let (Some(Some(started)), Some(Some(completed))) =
            (value(&model.started_at), value(&model.completed_at))
        {
            if completed < started {
                return Err("completed_at must not precede started_at".to_owned());
            }
        }
        Ok(())
    }
}
