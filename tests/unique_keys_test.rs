mod common;

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, Set};
use workout_client::entity::personal_record::{self, RecordType};
use workout_client::entity::user_summary::{self, week_bounds};
use workout_client::Error;

use common::{now, setup, USER};

fn summary(user_id: &str, week_start: NaiveDate) -> user_summary::ActiveModel {
    let (week_start, week_end) = week_bounds(week_start);
    user_summary::ActiveModel {
        user_id: Set(user_id.to_owned()),
        week_start: Set(week_start),
        week_end: Set(week_end),
        total_workouts: Set(3),
        total_duration_minutes: Set(150),
        total_sets: Set(45),
        total_reps: Set(360),
        total_volume: Set(12_500.0),
        average_exertion: Set(Some(7.5)),
        personal_records_set: Set(1),
        ..Default::default()
    }
}

fn bench_max(value: f64) -> personal_record::ActiveModel {
    personal_record::ActiveModel {
        user_id: Set(USER.to_owned()),
        exercise_id: Set("bench-press".to_owned()),
        record_type: Set(RecordType::MaxWeight),
        value: Set(value),
        unit: Set("kg".to_owned()),
        achieved_at: Set(now()),
        ..Default::default()
    }
}

fn bench_max_key() -> personal_record::Unique {
    personal_record::Unique::UserExerciseType {
        user_id: USER.to_owned(),
        exercise_id: "bench-press".to_owned(),
        record_type: RecordType::MaxWeight,
    }
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

#[tokio::test]
async fn second_summary_for_the_same_week_is_rejected() {
    let client = setup().await;
    let delegate = client.user_summary();

    delegate.create(summary(USER, monday())).await.unwrap();

    // Any day of the week normalizes to the same Monday.
    let wednesday = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
    let err = delegate.create(summary(USER, wednesday)).await.unwrap_err();
    assert!(err.is_unique_violation(), "{err:?}");
    assert!(matches!(
        err,
        Error::UniqueConstraint {
            model: "UserSummary",
            ..
        }
    ));

    delegate.create(summary("user-2", monday())).await.unwrap();
    delegate
        .create(summary(USER, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()))
        .await
        .unwrap();
    assert_eq!(
        delegate
            .count(user_summary::Column::UserId.eq(USER))
            .await
            .unwrap(),
        2
    );
}

#[tokio::test]
async fn summary_is_addressable_by_user_and_week() {
    let client = setup().await;
    let delegate = client.user_summary();

    let created = delegate.create(summary(USER, monday())).await.unwrap();
    assert_eq!(created.week_end, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());

    let key = user_summary::Unique::UserWeek {
        user_id: USER.to_owned(),
        week_start: monday(),
    };
    let found = delegate.find_unique(key.clone()).await.unwrap();
    assert_eq!(found.as_ref().map(|s| s.id.as_str()), Some(created.id.as_str()));

    let updated = delegate
        .update(
            key,
            user_summary::ActiveModel {
                total_workouts: Set(4),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.total_workouts, 4);
    assert_eq!(updated.total_volume, 12_500.0);
}

#[tokio::test]
async fn duplicate_personal_record_is_a_unique_violation() {
    let client = setup().await;
    let delegate = client.personal_record();

    delegate.create(bench_max(100.0)).await.unwrap();
    let err = delegate.create(bench_max(105.0)).await.unwrap_err();
    assert!(err.is_unique_violation(), "{err:?}");

    // A different record type for the same exercise is a separate key.
    delegate
        .create(personal_record::ActiveModel {
            record_type: Set(RecordType::MaxReps),
            value: Set(12.0),
            unit: Set("reps".to_owned()),
            ..bench_max(0.0)
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn upsert_creates_then_updates_in_place() {
    let client = setup().await;
    let delegate = client.personal_record();

    let first = delegate
        .upsert(
            bench_max_key(),
            bench_max(100.0),
            personal_record::ActiveModel {
                value: Set(100.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(first.value, 100.0);
    assert_eq!(first.previous_value, None);

    let second = delegate
        .upsert(
            bench_max_key(),
            bench_max(105.0),
            personal_record::ActiveModel {
                value: Set(105.0),
                previous_value: Set(Some(first.value)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.value, 105.0);
    assert_eq!(second.previous_value, Some(100.0));
    assert_eq!(second.created_at, first.created_at);

    let stored = delegate
        .find_unique_or_throw(bench_max_key())
        .await
        .unwrap();
    assert_eq!(stored, second);
}

#[tokio::test]
async fn update_ignores_primary_key_changes() {
    let client = setup().await;
    let delegate = client.personal_record();

    let created = delegate.create(bench_max(100.0)).await.unwrap();
    let updated = delegate
        .update(
            created.id.clone(),
            personal_record::ActiveModel {
                id: Set("hijacked".to_owned()),
                value: Set(101.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(delegate.find_unique("hijacked").await.unwrap(), None);
}

#[tokio::test]
async fn negative_record_value_is_a_validation_error() {
    let client = setup().await;

    let err = client
        .personal_record()
        .create(bench_max(-1.0))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation {
            model: "PersonalRecord",
            ..
        }
    ));
}

#[tokio::test]
async fn bulk_update_cannot_invert_a_week() {
    let client = setup().await;
    let delegate = client.user_summary();
    let created = delegate.create(summary(USER, monday())).await.unwrap();

    let err = delegate
        .update_many(
            user_summary::Column::UserId.eq(USER),
            user_summary::ActiveModel {
                week_end: Set(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { model: "UserSummary", .. }), "{err:?}");

    let stored = delegate.find_unique_or_throw(created.id).await.unwrap();
    assert_eq!(stored.week_start, created.week_start);
    assert_eq!(stored.week_end, created.week_end);
}
