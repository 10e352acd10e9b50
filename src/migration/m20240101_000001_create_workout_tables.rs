use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkoutSession::Table)
                    .if_not_exists()
                    .col(id(WorkoutSession::Id))
                    .col(ColumnDef::new(WorkoutSession::UserId).text().not_null())
                    .col(ColumnDef::new(WorkoutSession::Name).text())
                    .col(ColumnDef::new(WorkoutSession::Status).string_len(32).not_null())
                    .col(ColumnDef::new(WorkoutSession::StartedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(WorkoutSession::CompletedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(WorkoutSession::DurationMinutes).integer())
                    .col(ColumnDef::new(WorkoutSession::PerceivedExertion).integer())
                    .col(ColumnDef::new(WorkoutSession::EnergyRating).integer())
                    .col(ColumnDef::new(WorkoutSession::Notes).text())
                    .col(timestamp(WorkoutSession::CreatedAt))
                    .col(timestamp(WorkoutSession::UpdatedAt))
                    .to_owned(),
            )
            .await?;
        create_user_index(
            manager,
            "idx_workout_session_user_id",
            WorkoutSession::Table,
            WorkoutSession::UserId,
        )
        .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkoutExercise::Table)
                    .if_not_exists()
                    .col(id(WorkoutExercise::Id))
                    .col(ColumnDef::new(WorkoutExercise::SessionId).text().not_null())
                    .col(ColumnDef::new(WorkoutExercise::ExerciseName).text().not_null())
                    .col(counter(WorkoutExercise::OrderIndex))
                    .col(ColumnDef::new(WorkoutExercise::TargetSets).integer())
                    .col(ColumnDef::new(WorkoutExercise::TargetReps).integer())
                    .col(ColumnDef::new(WorkoutExercise::TargetWeight).double())
                    .col(ColumnDef::new(WorkoutExercise::ActualSets).integer())
                    .col(ColumnDef::new(WorkoutExercise::ActualReps).integer())
                    .col(ColumnDef::new(WorkoutExercise::ActualWeight).double())
                    .col(ColumnDef::new(WorkoutExercise::RestSeconds).integer())
                    .col(ColumnDef::new(WorkoutExercise::Notes).text())
                    .col(timestamp(WorkoutExercise::CreatedAt))
                    .col(timestamp(WorkoutExercise::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workout_exercise_session")
                            .from(WorkoutExercise::Table, WorkoutExercise::SessionId)
                            .to(WorkoutSession::Table, WorkoutSession::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_workout_exercise_session_id")
                    .table(WorkoutExercise::Table)
                    .col(WorkoutExercise::SessionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkoutRecord::Table)
                    .if_not_exists()
                    .col(id(WorkoutRecord::Id))
                    .col(ColumnDef::new(WorkoutRecord::SessionId).text().not_null())
                    .col(ColumnDef::new(WorkoutRecord::ExerciseId).text().not_null())
                    .col(ColumnDef::new(WorkoutRecord::SetNumber).integer().not_null())
                    .col(ColumnDef::new(WorkoutRecord::TargetReps).integer())
                    .col(ColumnDef::new(WorkoutRecord::TargetWeight).double())
                    .col(ColumnDef::new(WorkoutRecord::ActualReps).integer())
                    .col(ColumnDef::new(WorkoutRecord::ActualWeight).double())
                    .col(ColumnDef::new(WorkoutRecord::Rpe).double())
                    .col(flag(WorkoutRecord::Completed))
                    .col(ColumnDef::new(WorkoutRecord::Notes).text())
                    .col(timestamp(WorkoutRecord::CreatedAt))
                    .col(timestamp(WorkoutRecord::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workout_record_session")
                            .from(WorkoutRecord::Table, WorkoutRecord::SessionId)
                            .to(WorkoutSession::Table, WorkoutSession::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workout_record_exercise")
                            .from(WorkoutRecord::Table, WorkoutRecord::ExerciseId)
                            .to(WorkoutExercise::Table, WorkoutExercise::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_workout_record_exercise_id")
                    .table(WorkoutRecord::Table)
                    .col(WorkoutRecord::ExerciseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserSummary::Table)
                    .if_not_exists()
                    .col(id(UserSummary::Id))
                    .col(ColumnDef::new(UserSummary::UserId).text().not_null())
                    .col(ColumnDef::new(UserSummary::WeekStart).date().not_null())
                    .col(ColumnDef::new(UserSummary::WeekEnd).date().not_null())
                    .col(counter(UserSummary::TotalWorkouts))
                    .col(counter(UserSummary::TotalDurationMinutes))
                    .col(counter(UserSummary::TotalSets))
                    .col(counter(UserSummary::TotalReps))
                    .col(amount(UserSummary::TotalVolume))
                    .col(ColumnDef::new(UserSummary::AverageExertion).double())
                    .col(counter(UserSummary::PersonalRecordsSet))
                    .col(timestamp(UserSummary::CreatedAt))
                    .col(timestamp(UserSummary::UpdatedAt))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("uq_user_summary_user_week")
                    .table(UserSummary::Table)
                    .col(UserSummary::UserId)
                    .col(UserSummary::WeekStart)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PersonalRecord::Table)
                    .if_not_exists()
                    .col(id(PersonalRecord::Id))
                    .col(ColumnDef::new(PersonalRecord::UserId).text().not_null())
                    .col(ColumnDef::new(PersonalRecord::ExerciseId).text().not_null())
                    .col(ColumnDef::new(PersonalRecord::RecordType).string_len(32).not_null())
                    .col(ColumnDef::new(PersonalRecord::Value).double().not_null())
                    .col(ColumnDef::new(PersonalRecord::Unit).text().not_null())
                    .col(ColumnDef::new(PersonalRecord::PreviousValue).double())
                    .col(timestamp(PersonalRecord::AchievedAt))
                    .col(ColumnDef::new(PersonalRecord::SessionId).text())
                    .col(timestamp(PersonalRecord::CreatedAt))
                    .col(timestamp(PersonalRecord::UpdatedAt))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("uq_personal_record_user_exercise_type")
                    .table(PersonalRecord::Table)
                    .col(PersonalRecord::UserId)
                    .col(PersonalRecord::ExerciseId)
                    .col(PersonalRecord::RecordType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkoutTemplate::Table)
                    .if_not_exists()
                    .col(id(WorkoutTemplate::Id))
                    .col(ColumnDef::new(WorkoutTemplate::UserId).text().not_null())
                    .col(ColumnDef::new(WorkoutTemplate::Name).text().not_null())
                    .col(ColumnDef::new(WorkoutTemplate::Description).text())
                    .col(ColumnDef::new(WorkoutTemplate::Exercises).json().not_null())
                    .col(ColumnDef::new(WorkoutTemplate::Tags).json().not_null())
                    .col(flag(WorkoutTemplate::IsPublic))
                    .col(counter(WorkoutTemplate::UseCount))
                    .col(timestamp(WorkoutTemplate::CreatedAt))
                    .col(timestamp(WorkoutTemplate::UpdatedAt))
                    .to_owned(),
            )
            .await?;
        create_user_index(
            manager,
            "idx_workout_template_user_id",
            WorkoutTemplate::Table,
            WorkoutTemplate::UserId,
        )
        .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkoutGoal::Table)
                    .if_not_exists()
                    .col(id(WorkoutGoal::Id))
                    .col(ColumnDef::new(WorkoutGoal::UserId).text().not_null())
                    .col(ColumnDef::new(WorkoutGoal::ExerciseId).text())
                    .col(ColumnDef::new(WorkoutGoal::GoalType).string_len(32).not_null())
                    .col(ColumnDef::new(WorkoutGoal::TargetValue).double().not_null())
                    .col(amount(WorkoutGoal::CurrentValue))
                    .col(ColumnDef::new(WorkoutGoal::Unit).text().not_null())
                    .col(ColumnDef::new(WorkoutGoal::Status).string_len(32).not_null())
                    .col(ColumnDef::new(WorkoutGoal::Deadline).date())
                    .col(ColumnDef::new(WorkoutGoal::Milestones).json().not_null())
                    .col(timestamp(WorkoutGoal::CreatedAt))
                    .col(timestamp(WorkoutGoal::UpdatedAt))
                    .to_owned(),
            )
            .await?;
        create_user_index(
            manager,
            "idx_workout_goal_user_id",
            WorkoutGoal::Table,
            WorkoutGoal::UserId,
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkoutGoal::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkoutTemplate::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PersonalRecord::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserSummary::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkoutRecord::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkoutExercise::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkoutSession::Table).to_owned())
            .await
    }
}

fn id<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).text().not_null().primary_key().to_owned()
}

fn timestamp<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

fn counter<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).integer().not_null().default(0).to_owned()
}

fn amount<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).double().not_null().default(0.0).to_owned()
}

fn flag<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).boolean().not_null().default(false).to_owned()
}

async fn create_user_index<T, C>(
    manager: &SchemaManager<'_>,
    name: &str,
    table: T,
    col: C,
) -> Result<(), DbErr>
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    manager
        .create_index(Index::create().name(name).table(table).col(col).to_owned())
        .await
}

#[derive(DeriveIden)]
enum WorkoutSession {
    Table,
    Id,
    UserId,
    Name,
    Status,
    StartedAt,
    CompletedAt,
    DurationMinutes,
    PerceivedExertion,
    EnergyRating,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum WorkoutExercise {
    Table,
    Id,
    SessionId,
    ExerciseName,
    OrderIndex,
    TargetSets,
    TargetReps,
    TargetWeight,
    ActualSets,
    ActualReps,
    ActualWeight,
    RestSeconds,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum WorkoutRecord {
    Table,
    Id,
    SessionId,
    ExerciseId,
    SetNumber,
    TargetReps,
    TargetWeight,
    ActualReps,
    ActualWeight,
    Rpe,
    Completed,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserSummary {
    Table,
    Id,
    UserId,
    WeekStart,
    WeekEnd,
    TotalWorkouts,
    TotalDurationMinutes,
    TotalSets,
    TotalReps,
    TotalVolume,
    AverageExertion,
    PersonalRecordsSet,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PersonalRecord {
    Table,
    Id,
    UserId,
    ExerciseId,
    RecordType,
    Value,
    Unit,
    PreviousValue,
    AchievedAt,
    SessionId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum WorkoutTemplate {
    Table,
    Id,
    UserId,
    Name,
    Description,
    Exercises,
    Tags,
    IsPublic,
    UseCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum WorkoutGoal {
    Table,
    Id,
    UserId,
    ExerciseId,
    GoalType,
    TargetValue,
    CurrentValue,
    Unit,
    Status,
    Deadline,
    Milestones,
    CreatedAt,
    UpdatedAt,
}
