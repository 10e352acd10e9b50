//! One performed (or prescribed) set of an exercise within a session.

use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::IntoCondition;
use sea_orm::Condition;

use super::{value, ClientEntity};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "workout_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub session_id: String,
    pub exercise_id: String,
    pub set_number: i32,
    pub target_reps: Option<i32>,
    pub target_weight: Option<f64>,
    pub actual_reps: Option<i32>,
    pub actual_weight: Option<f64>,
    pub rpe: Option<f64>,
    pub completed: bool,
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
    #[sea_orm(
        belongs_to = "super::workout_exercise::Entity",
        from = "Column::ExerciseId",
        to = "super::workout_exercise::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WorkoutExercise,
}

impl Related<super::workout_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutSession.def()
    }
}

impl Related<super::workout_exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutExercise.def()
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

/// Ways to address a single set record.
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

    const MODEL: &'static str = "WorkoutRecord";

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn validate(model: &ActiveModel) -> Result<(), String> {
        if let Some(n) = value(&model.set_number).filter(|n| **n < 1) {
            return Err(format!("set_number starts at 1, got {n}"));
        }
        if let Some(Some(rpe)) = value(&model.rpe) {
            if !(0.0..=10.0).contains(rpe) {
                return Err(format!("rpe must be between 0 and 10, got {rpe}"));
            }
        }
        for (name, weight) in [
            ("target_weight", value(&model.target_weight)),
            ("actual_weight", value(&model.actual_weight)),
        ] {
            if let Some(Some(w)) = weight {
                if *w < 0.0 {
                    return Err(format!("{name} must not be negative, got {w}"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Set;

    #[test]
    fn set_number_must_be_positive() {
        let model = ActiveModel {
            set_number: Set(0),
            ..Default::default()
        };
        assert!(Entity::validate(&model).is_err());
    }

    #[test]
    fn rpe_is_bounded() {
        let model = ActiveModel {
            set_number: Set(1),
            rpe: Set(Some(10.5)),
            ..Default::default()
        };
        assert!(Entity::validate(&model).unwrap_err().contains("rpe"));

        let model = ActiveModel {
            set_number: Set(1),
            rpe: Set(Some(8.5)),
            ..Default::default()
        };
        assert!(Entity::validate(&model).is_ok());
    }
}
