//! Best results per user, exercise and record type.

use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{IntoCondition, StringLen};
use sea_orm::Condition;

use super::{check_not_blank, value, ClientEntity};

/// What a personal record measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum RecordType {
    #[sea_orm(string_value = "max_weight")]
    MaxWeight,
    #[sea_orm(string_value = "max_reps")]
    MaxReps,
    #[sea_orm(string_value = "max_volume")]
    MaxVolume,
    #[sea_orm(string_value = "estimated_one_rep_max")]
    EstimatedOneRepMax,
    #[sea_orm(string_value = "best_time")]
    BestTime,
}

/// Sea-ORM entity model for the `personal_record` table.
///
/// At most one row exists per `(user_id, exercise_id, record_type)`; the
/// database enforces this with a unique index.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "personal_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub user_id: String,
    pub exercise_id: String,
    pub record_type: RecordType,
    pub value: f64,
    pub unit: String,
    pub previous_value: Option<f64>,
    pub achieved_at: DateTimeWithTimeZone,
    pub session_id: Option<String>,
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

/// Ways to address a single personal record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unique {
    Id(String),
    UserExerciseType {
        user_id: String,
        exercise_id: String,
        record_type: RecordType,
    },
}

super::unique_from_id!(Unique);

impl IntoCondition for Unique {
    fn into_condition(self) -> Condition {
        match self {
            Unique::Id(id) => Condition::all().add(Column::Id.eq(id)),
            Unique::UserExerciseType {
                user_id,
                exercise_id,
                record_type,
            } => Condition::all()
                .add(Column::UserId.eq(user_id))
                .add(Column::ExerciseId.eq(exercise_id))
                .add(Column::RecordType.eq(record_type)),
        }
    }
}

impl ClientEntity for Entity {
    type Unique = Unique;

    const MODEL: &'static str = "PersonalRecord";

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn validate(model: &ActiveModel) -> Result<(), String> {
        check_not_blank("unit", value(&model.unit))?;
        check_not_blank("exercise_id", value(&model.exercise_id))?;
        if let Some(v) = value(&model.value).filter(|v| **v < 0.0 || !v.is_finite()) {
            return Err(format!("value must be a non-negative number, got {v}"));
        }
        Ok(())
    }
}
