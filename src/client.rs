use std::future::Future;
use std::pin::Pin;

use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction, QueryResult, Statement,
    TransactionError, TransactionTrait, Value,
};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::delegate::{Delegate, Delegates};
use crate::entity::{
    personal_record, user_summary, workout_exercise, workout_goal, workout_record,
    workout_session, workout_template,
};
use crate::error::{Error, Result};

/// Entry point to the workout database.
///
/// `WorkoutClient` owns a Sea-ORM connection pool and hands out one
/// [`Delegate`] per model. It also exposes the client-wide operations:
/// transactions and raw SQL.
///
/// # Usage
///
/// ```no_run
/// use sea_orm::Set;
/// use workout_client::entity::workout_goal::{self, GoalStatus, GoalType, Milestones};
/// use workout_client::{ClientConfig, WorkoutClient};
///
/// # async fn example() -> workout_client::Result<()> {
/// let client = WorkoutClient::connect(&ClientConfig::from_env()?).await?;
///
/// let goal = client
///     .workout_goal()
///     .create(workout_goal::ActiveModel {
///         user_id: Set("user-1".to_owned()),
///         exercise_id: Set(Some("deadlift".to_owned())),
///         goal_type: Set(GoalType::Strength),
///         target_value: Set(200.0),
///         current_value: Set(160.0),
///         unit: Set("kg".to_owned()),
///         status: Set(GoalStatus::Active),
///         deadline: Set(None),
///         milestones: Set(Milestones::default()),
///         ..Default::default()
///     })
///     .await?;
///
/// client.disconnect().await?;
/// # let _ = goal;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WorkoutClient {
    /// The Sea-ORM database connection used for database operations.
    conn: DatabaseConnection,
}

impl WorkoutClient {
    /// Wraps an existing Sea-ORM connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Opens a connection pool using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the database cannot be reached or the URL
    /// is not understood.
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        info!("Connecting to database");
        let conn = Database::connect(config.connect_options())
            .await
            .map_err(|e| Error::Config(format!("failed to connect: {e}")))?;
        info!(backend = ?conn.get_database_backend(), "Connected to database");
        Ok(Self::new(conn))
    }

    /// Closes the connection pool.
    pub async fn disconnect(self) -> Result<()> {
        self.conn.close().await?;
        info!("Disconnected from database");
        Ok(())
    }

    /// Checks that the database is reachable.
    pub async fn ping(&self) -> Result<()> {
        self.conn.ping().await.map_err(Error::from)
    }

    /// The underlying Sea-ORM connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Runs `callback` inside a transaction.
    ///
    /// The transaction commits when the callback returns `Ok` and rolls back
    /// when it returns `Err`; the callback's error is returned unchanged.
    ///
    /// ```no_run
    /// use sea_orm::Set;
    /// use workout_client::entity::workout_session::{self, SessionStatus};
    /// use workout_client::{Delegates, WorkoutClient};
    ///
    /// # async fn example(client: WorkoutClient) -> workout_client::Result<()> {
    /// let session = client
    ///     .transaction(|txn| {
    ///         Box::pin(async move {
    ///             txn.workout_session()
    ///                 .create(workout_session::ActiveModel {
    ///                     user_id: Set("user-1".to_owned()),
    ///                     status: Set(SessionStatus::InProgress),
    ///                     ..Default::default()
    ///                 })
    ///                 .await
    ///         })
    ///     })
    ///     .await?;
    /// # let _ = session;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn transaction<F, T>(&self, callback: F) -> Result<T>
    where
        F: for<'c> FnOnce(
                &'c DatabaseTransaction,
            ) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>
            + Send,
        T: Send,
    {
        debug!("Starting transaction");
        self.conn
            .transaction::<F, T, Error>(callback)
            .await
            .map_err(|e| match e {
                TransactionError::Connection(db) => Error::from(db),
                TransactionError::Transaction(err) => err,
            })
    }

    /// Starts a transaction that the caller commits or rolls back.
    pub async fn begin(&self) -> Result<DatabaseTransaction> {
        self.conn.begin().await.map_err(Error::from)
    }

    /// Executes a raw statement and returns the number of affected rows.
    ///
    /// Placeholders follow the backend's syntax (`$1` on PostgreSQL, `?` on SQLite).
    pub async fn execute_raw(
        &self,
        sql: &str,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<u64> {
        let statement =
            Statement::from_sql_and_values(self.conn.get_database_backend(), sql, values);
        let result = self.conn.execute(statement).await?;
        Ok(result.rows_affected())
    }

    /// Runs a raw query and returns its rows.
    pub async fn query_raw(
        &self,
        sql: &str,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<Vec<QueryResult>> {
        let statement =
            Statement::from_sql_and_values(self.conn.get_database_backend(), sql, values);
        self.conn.query_all(statement).await.map_err(Error::from)
    }

    pub fn workout_session(&self) -> Delegate<'_, workout_session::Entity, DatabaseConnection> {
        self.conn.workout_session()
    }

    pub fn user_summary(&self) -> Delegate<'_, user_summary::Entity, DatabaseConnection> {
        self.conn.user_summary()
    }

    pub fn workout_exercise(&self) -> Delegate<'_, workout_exercise::Entity, DatabaseConnection> {
        self.conn.workout_exercise()
    }

    pub fn workout_record(&self) -> Delegate<'_, workout_record::Entity, DatabaseConnection> {
        self.conn.workout_record()
    }

    pub fn personal_record(&self) -> Delegate<'_, personal_record::Entity, DatabaseConnection> {
        self.conn.personal_record()
    }

    pub fn workout_template(&self) -> Delegate<'_, workout_template::Entity, DatabaseConnection> {
        self.conn.workout_template()
    }

    pub fn workout_goal(&self) -> Delegate<'_, workout_goal::Entity, DatabaseConnection> {
        self.conn.workout_goal()
    }
}
