//! An exercise slot within a session, with planned and achieved volume.

use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::IntoCondition;
use sea_orm::Condition;

use super::{check_not_blank, value, ClientEntity};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "workout_exercise")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub session_id: String,
    pub exercise_name: String,
    pub order_index: i32,
    pub target_sets: Option<i32>,
    pub target_reps: Option<i32>,
    pub target_weight: Option<f64>,
    pub actual_sets: Option<i32>,
    pub actual_reps: Option<i32>,
    pub actual_weight: Option<f64>,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workout_session::Entity",
        from = "Column::SessionId",
        to = "super::workout_session::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WorkoutSession,
    #[sea_orm(has_many = "super::workout_record::Entity")]
    WorkoutRecord,
}

impl Related<super::workout_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutSession.def()
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

/// Ways to address a single exercise slot.
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

    const MODEL: &'static str = "WorkoutExercise";

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn validate(model: &ActiveModel) -> Result<(), String> {
        check_not_blank("exercise_name", value(&model.exercise_name))?;
        let counts = [
            ("target_sets", value(&model.target_sets)),
            ("target_reps", value(&model.target_reps)),
            ("actual_sets", value(&model.actual_sets)),
            ("actual_reps", value(&model.actual_reps)),
            ("rest_seconds", value(&model.rest_seconds)),
        ];
        for (name, count) in counts {
            if let Some(Some(n)) = count {
                if *n < 0 {
                    return Err(format!("{name} must not be negative, got {n}"));
                }
            }
        }
        Ok(())
    }
}
