//! Shared setup for the integration tests.
//!
//! Every test gets its own in-memory SQLite database with the schema applied
//! by the crate's migrator. The pool is capped at one connection so the
//! in-memory database lives as long as the client does.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{ConnectOptions, Database, Set};
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::EnvFilter;
use workout_client::entity::{workout_exercise, workout_record, workout_session};
use workout_client::migration::Migrator;
use workout_client::WorkoutClient;

pub const USER: &str = "user-1";

pub async fn setup() -> WorkoutClient {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(opt)
        .await
        .expect("failed to open in-memory database");
    Migrator::up(&conn, None)
        .await
        .expect("failed to apply migrations");

    WorkoutClient::new(conn)
}

pub fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).expect("valid timestamp")
}

pub fn now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}

pub fn session(
    user_id: &str,
    status: workout_session::SessionStatus,
) -> workout_session::ActiveModel {
    workout_session::ActiveModel {
        user_id: Set(user_id.to_owned()),
        status: Set(status),
        ..Default::default()
    }
}

pub fn exercise(session_id: &str, name: &str, order_index: i32) -> workout_exercise::ActiveModel {
    workout_exercise::ActiveModel {
        session_id: Set(session_id.to_owned()),
        exercise_name: Set(name.to_owned()),
        order_index: Set(order_index),
        ..Default::default()
    }
}

pub fn record(
    session_id: &str,
    exercise_id: &str,
    set_number: i32,
    reps: i32,
    weight: f64,
) -> workout_record::ActiveModel {
    workout_record::ActiveModel {
        session_id: Set(session_id.to_owned()),
        exercise_id: Set(exercise_id.to_owned()),
        set_number: Set(set_number),
        actual_reps: Set(Some(reps)),
        actual_weight: Set(Some(weight)),
        completed: Set(true),
        ..Default::default()
    }
}
