mod common;

use sea_orm::{ColumnTrait, Condition, Order};
use workout_client::entity::workout_session::{self, SessionStatus};
use workout_client::entity::{workout_exercise, workout_record};
use workout_client::{Error, FindManyArgs, WorkoutClient};

use common::{exercise, record, session, setup, USER};

struct Seeded {
    session: workout_session::Model,
    squat: workout_exercise::Model,
    press: workout_exercise::Model,
}

/// Exercises and sets are inserted out of order on purpose.
async fn seed(client: &WorkoutClient) -> Seeded {
    let session = client
        .workout_session()
        .create(session(USER, SessionStatus::Completed))
        .await
        .unwrap();
    let press = client
        .workout_exercise()
        .create(exercise(&session.id, "Overhead Press", 1))
        .await
        .unwrap();
    let squat = client
        .workout_exercise()
        .create(exercise(&session.id, "Back Squat", 0))
        .await
        .unwrap();

    for (exercise_id, set_number, weight) in [
        (&squat.id, 2, 110.0),
        (&press.id, 1, 50.0),
        (&squat.id, 1, 100.0),
        (&squat.id, 3, 115.0),
    ] {
        client
            .workout_record()
            .create(record(&session.id, exercise_id, set_number, 5, weight))
            .await
            .unwrap();
    }

    Seeded {
        session,
        squat,
        press,
    }
}

#[tokio::test]
async fn session_details_are_loaded_in_order() {
    let client = setup().await;
    let seeded = seed(&client).await;

    let details = client
        .workout_session()
        .find_unique_with_details(seeded.session.id.clone())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(details.session, seeded.session);
    let names: Vec<_> = details
        .exercises
        .iter()
        .map(|e| e.exercise.exercise_name.as_str())
        .collect();
    assert_eq!(names, ["Back Squat", "Overhead Press"]);

    let squat_sets: Vec<_> = details.exercises[0]
        .records
        .iter()
        .map(|r| (r.set_number, r.actual_weight))
        .collect();
    assert_eq!(squat_sets, [(1, Some(100.0)), (2, Some(110.0)), (3, Some(115.0))]);
    assert_eq!(details.exercises[1].records.len(), 1);

    assert!(client
        .workout_session()
        .find_unique_with_details("missing")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn sessions_list_with_their_exercises() {
    let client = setup().await;
    let seeded = seed(&client).await;
    let empty = client
        .workout_session()
        .create(session(USER, SessionStatus::Planned))
        .await
        .unwrap();

    let listed = client
        .workout_session()
        .find_many_with_exercises(
            FindManyArgs::new()
                .filter(workout_session::Column::UserId.eq(USER))
                .order_by(workout_session::Column::Status, Order::Asc),
        )
        .await
        .unwrap();

    assert_eq!(listed.len(), 2);
    let (completed, exercises) = &listed[0];
    assert_eq!(completed.id, seeded.session.id);
    assert_eq!(exercises, &vec![seeded.squat.clone(), seeded.press.clone()]);

    let (planned, exercises) = &listed[1];
    assert_eq!(planned.id, empty.id);
    assert!(exercises.is_empty());
}

#[tokio::test]
async fn exercises_list_with_their_records() {
    let client = setup().await;
    let seeded = seed(&client).await;

    let listed = client
        .workout_exercise()
        .find_many_with_records(
            FindManyArgs::new().filter(workout_exercise::Column::Id.eq(seeded.squat.id.clone())),
        )
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    let sets: Vec<_> = listed[0].1.iter().map(|r| r.set_number).collect();
    assert_eq!(sets, [1, 2, 3]);
}

#[tokio::test]
async fn dangling_references_are_rejected() {
    let client = setup().await;

    let err = client
        .workout_exercise()
        .create(exercise("no-such-session", "Deadlift", 0))
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            Error::ForeignKeyConstraint {
                model: "WorkoutExercise",
                ..
            }
        ),
        "{err:?}"
    );
}

#[tokio::test]
async fn deleting_a_session_removes_its_children() {
    let client = setup().await;
    let seeded = seed(&client).await;

    client
        .workout_session()
        .delete(seeded.session.id.clone())
        .await
        .unwrap();

    assert_eq!(
        client
            .workout_exercise()
            .count(Condition::all())
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        client
            .workout_record()
            .count(workout_record::Column::SessionId.eq(seeded.session.id))
            .await
            .unwrap(),
        0
    );
}
