mod common;

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, Condition, Set, TransactionTrait, Value};
use workout_client::entity::workout_goal::{self, GoalStatus, GoalType, Milestone, Milestones};
use workout_client::entity::workout_session::{self, SessionStatus};
use workout_client::entity::workout_template::{self, Tags, TemplateExercise, TemplateExercises};
use workout_client::{ClientConfig, Delegates, Error, WorkoutClient};

use common::{at, session, setup, USER};

fn deadlift_goal(current: f64) -> workout_goal::ActiveModel {
    workout_goal::ActiveModel {
        user_id: Set(USER.to_owned()),
        exercise_id: Set(Some("deadlift".to_owned())),
        goal_type: Set(GoalType::Strength),
        target_value: Set(200.0),
        current_value: Set(current),
        unit: Set("kg".to_owned()),
        status: Set(GoalStatus::Active),
        deadline: Set(NaiveDate::from_ymd_opt(2024, 12, 31)),
        milestones: Set(Milestones(vec![
            Milestone {
                label: "First plate".to_owned(),
                value: 140.0,
                achieved_at: Some(at("2024-02-01T09:30:00+01:00")),
            },
            Milestone {
                label: "Bodyweight x2".to_owned(),
                value: 180.0,
                achieved_at: None,
            },
        ])),
        ..Default::default()
    }
}

#[tokio::test]
async fn connects_from_config() {
    let config = ClientConfig::new("sqlite::memory:").with_max_connections(1);
    let client = WorkoutClient::connect(&config).await.unwrap();

    client.ping().await.unwrap();
    client.disconnect().await.unwrap();
}

#[tokio::test]
async fn unreachable_database_is_a_config_error() {
    let config = ClientConfig::new("not-a-database-url");
    let err = WorkoutClient::connect(&config).await.unwrap_err();
    assert!(matches!(err, Error::Config(_)), "{err:?}");
}

#[tokio::test]
async fn transaction_commits_on_ok() {
    let client = setup().await;

    let id = client
        .transaction(|txn| {
            Box::pin(async move {
                let s = txn
                    .workout_session()
                    .create(session(USER, SessionStatus::InProgress))
                    .await?;
                txn.workout_goal().create(deadlift_goal(150.0)).await?;
                Ok(s.id)
            })
        })
        .await
        .unwrap();

    assert!(client.workout_session().find_unique(id).await.unwrap().is_some());
    assert_eq!(client.workout_goal().count(Condition::all()).await.unwrap(), 1);
}

#[tokio::test]
async fn transaction_rolls_back_on_err() {
    let client = setup().await;

    let err = client
        .transaction(|txn| {
            Box::pin(async move {
                txn.workout_session()
                    .create(session(USER, SessionStatus::Planned))
                    .await?;
                txn.workout_session()
                    .create(workout_session::ActiveModel {
                        energy_rating: Set(Some(42)),
                        ..session(USER, SessionStatus::Planned)
                    })
                    .await?;
                Ok(())
            })
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { .. }), "{err:?}");
    assert_eq!(
        client
            .workout_session()
            .count(Condition::all())
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn manual_transaction_can_be_rolled_back() {
    let client = setup().await;

    let txn = client.begin().await.unwrap();
    txn.workout_goal().create(deadlift_goal(150.0)).await.unwrap();
    assert_eq!(txn.workout_goal().count(Condition::all()).await.unwrap(), 1);
    txn.rollback().await.unwrap();

    assert_eq!(client.workout_goal().count(Condition::all()).await.unwrap(), 0);

    let txn = client.connection().begin().await.unwrap();
    txn.workout_goal().create(deadlift_goal(150.0)).await.unwrap();
    txn.commit().await.unwrap();

    assert_eq!(client.workout_goal().count(Condition::all()).await.unwrap(), 1);
}

#[tokio::test]
async fn raw_statements_run_against_the_same_tables() {
    let client = setup().await;
    let goal = client
        .workout_goal()
        .create(deadlift_goal(150.0))
        .await
        .unwrap();

    let affected = client
        .execute_raw(
            "UPDATE workout_goal SET current_value = ? WHERE user_id = ?",
            [Value::from(172.5), Value::from(USER)],
        )
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let rows = client
        .query_raw(
            "SELECT id, current_value FROM workout_goal WHERE user_id = ?",
            [Value::from(USER)],
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    let id: String = rows[0].try_get("", "id").unwrap();
    let current: f64 = rows[0].try_get("", "current_value").unwrap();
    assert_eq!(id, goal.id);
    assert_eq!(current, 172.5);

    let err = client.execute_raw("UPDATE no_such_table SET x = 1", []).await;
    assert!(matches!(err, Err(Error::Database(_))));
}

#[tokio::test]
async fn json_columns_round_trip() {
    let client = setup().await;

    let goal = client
        .workout_goal()
        .create(deadlift_goal(150.0))
        .await
        .unwrap();
    let stored = client
        .workout_goal()
        .find_unique_or_throw(goal.id.clone())
        .await
        .unwrap();
    assert_eq!(stored.milestones, goal.milestones);
    assert_eq!(stored.milestones.0.len(), 2);
    assert_eq!(stored.deadline, NaiveDate::from_ymd_opt(2024, 12, 31));

    let template = client
        .workout_template()
        .create(workout_template::ActiveModel {
            user_id: Set(USER.to_owned()),
            name: Set("5x5 A".to_owned()),
            description: Set(None),
            exercises: Set(TemplateExercises(vec![TemplateExercise {
                exercise_name: "Back Squat".to_owned(),
                sets: 5,
                reps: 5,
                weight: Some(100.0),
                rest_seconds: Some(180),
                notes: None,
            }])),
            tags: Set(Tags(vec!["strength".to_owned(), "legs".to_owned()])),
            is_public: Set(true),
            use_count: Set(0),
            ..Default::default()
        })
        .await
        .unwrap();

    let used = client
        .workout_template()
        .update(
            template.id.clone(),
            workout_template::ActiveModel {
                use_count: Set(template.use_count + 1),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(used.use_count, 1);
    assert_eq!(used.exercises, template.exercises);
    assert_eq!(used.tags.0, ["strength", "legs"]);

    let public = client
        .workout_template()
        .count(workout_template::Column::IsPublic.eq(true))
        .await
        .unwrap();
    assert_eq!(public, 1);
}

#[tokio::test]
async fn goal_progress_is_validated() {
    let client = setup().await;

    let err = client
        .workout_goal()
        .create(workout_goal::ActiveModel {
            target_value: Set(0.0),
            ..deadlift_goal(10.0)
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { model: "WorkoutGoal", .. }));

    let goal = client
        .workout_goal()
        .create(deadlift_goal(150.0))
        .await
        .unwrap();
    let completed = client
        .workout_goal()
        .update(
            goal.id,
            workout_goal::ActiveModel {
                current_value: Set(200.0),
                status: Set(GoalStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(completed.status, GoalStatus::Completed);
    assert_eq!(
        client
            .workout_goal()
            .count(workout_goal::Column::Status.eq(GoalStatus::Active))
            .await
            .unwrap(),
        0
    );
}
