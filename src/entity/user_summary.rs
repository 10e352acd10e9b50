//! Weekly per-user training rollup.
//!
//! Rows are denormalized aggregates written by application code; the client
//! stores them but never recomputes them. A user has at most one summary per
//! week, keyed by `(user_id, week_start)`.

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::IntoCondition;
use sea_orm::Condition;

use super::{value, ClientEntity};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_summary")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    pub user_id: String,
    pub week_start: Date,
    pub week_end: Date,
    pub total_workouts: i32,
    pub total_duration_minutes: i32,
    pub total_sets: i32,
    pub total_reps: i32,
    pub total_volume: f64,
    pub average_exertion: Option<f64>,
    pub personal_records_set: i32,
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

/// Ways to address a single summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unique {
    Id(String),
    UserWeek { user_id: String, week_start: Date },
}

super::unique_from_id!(Unique);

impl IntoCondition for Unique {
    fn into_condition(self) -> Condition {
        match self {
            Unique::Id(id) => Condition::all().add(Column::Id.eq(id)),
            Unique::UserWeek {
                user_id,
                week_start,
            } => Condition::all()
                .add(Column::UserId.eq(user_id))
                .add(Column::WeekStart.eq(week_start)),
        }
    }
}

impl ClientEntity for Entity {
    type Unique = Unique;

    const MODEL: &'static str = "UserSummary";

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn validate(model: &ActiveModel) -> Result<(), String> {
        if let (Some(start), Some(end)) = (value(&model.week_start), value(&model.week_end)) {
            if end < start {
                return Err(format!("week_end {end} precedes week_start {start}"));
            }
        }
        let counters = [
            ("total_workouts", value(&model.total_workouts)),
            ("total_duration_minutes", value(&model.total_duration_minutes)),
            ("total_sets", value(&model.total_sets)),
            ("total_reps", value(&model.total_reps)),
            ("personal_records_set", value(&model.personal_records_set)),
        ];
        for (name, count) in counters {
            if let Some(count) = count.filter(|c| **c < 0) {
                return Err(format!("{name} must not be negative, got {count}"));
            }
        }
        if let Some(volume) = value(&model.total_volume).filter(|v| **v < 0.0) {
            return Err(format!("total_volume must not be negative, got {volume}"));
        }
        Ok(())
    }
}

/// Returns the Monday and Sunday of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    (start, start + Duration::days(6))
}
