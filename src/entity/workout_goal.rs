//! User goals with tracked progress and milestones.

use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{IntoCondition, StringLen};
use sea_orm::{Condition, FromJsonQueryResult};
use serde::{Deserialize, Serialize};

use super::{check_not_blank, value, ClientEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum GoalType {
    #[sea_orm(string_value = "strength")]
    Strength,
    #[sea_orm(string_value = "endurance")]
    Endurance,
    #[sea_orm(string_value = "volume")]
    Volume,
    #[sea_orm(string_value = "frequency")]
    Frequency,
    #[sea_orm(string_value = "body_weight")]
    BodyWeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum GoalStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "abandoned")]
    Abandoned,
}

/// A checkpoint on the way to the target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieved_at: Option<DateTimeWithTimeZone>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Milestones(pub Vec<Milestone>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "workout_goal")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub user_id: String,
    pub exercise_id: Option<String>,
    pub goal_type: GoalType,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub status: GoalStatus,
    pub deadline: Option<Date>,
    #[sea_orm(column_type = "Json")]
    pub milestones: Milestones,
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

/// Ways to address a single goal.
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

    const MODEL: &'static str = "WorkoutGoal";

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn validate(model: &ActiveModel) -> Result<(), String> {
        check_not_blank("unit", value(&model.unit))?;
        let target = value(&model.target_value);
        if let Some(target) = target.filter(|t| !t.is_finite() || **t <= 0.0) {
            return Err(format!("target_value must be positive, got {target}"));
        }
        if let Some(current) = value(&model.current_value).filter(|c| **c < 0.0) {
            return Err(format!("current_value must not be negative, got {current}"));
        }
        Ok(())
    }
}
