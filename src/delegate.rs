use std::collections::BTreeMap;
use std::marker::PhantomData;

use sea_orm::sea_query::{Alias, Asterisk, Expr, Func, IntoCondition, SimpleExpr};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, ColumnType, Condition,
    ConnectionTrait, DbErr, EntityTrait, IdenStatic, IntoActiveModel, Iterable, LoaderTrait,
    ModelTrait, Order, PaginatorTrait, PrimaryKeyToColumn, QueryFilter, QueryOrder, QueryResult,
    QuerySelect, QueryTrait, Select,
};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::entity::{
    self, personal_record, user_summary, workout_exercise, workout_goal, workout_record,
    workout_session, workout_template, ClientEntity,
};
use crate::error::{Error, Result};

const COUNT_ALIAS: &str = "_count";

/// Typed CRUD access to a single model.
///
/// A `Delegate` borrows a connection, which may be the pooled
/// [`DatabaseConnection`](sea_orm::DatabaseConnection) or an open
/// [`DatabaseTransaction`](sea_orm::DatabaseTransaction); every operation runs
/// on whatever it borrowed. Delegates hold no state and are cheap to create,
/// usually through [`WorkoutClient`](crate::WorkoutClient) or the
/// [`Delegates`] extension trait.
///
/// # Error Mapping
///
/// * missing row for `*_or_throw`, `update` and `delete` → [`Error::NotFound`]
/// * unique key collision → [`Error::UniqueConstraint`]
/// * dangling reference → [`Error::ForeignKeyConstraint`]
/// * input rejected by the model's checks → [`Error::Validation`]
///
/// # Examples
///
/// ```no_run
/// use sea_orm::{ColumnTrait, Order, Set};
/// use workout_client::entity::workout_session::{self, SessionStatus};
/// use workout_client::{FindManyArgs, WorkoutClient};
///
/// # async fn example(client: WorkoutClient) -> workout_client::Result<()> {
/// let session = client
///     .workout_session()
///     .create(workout_session::ActiveModel {
///         user_id: Set("user-1".to_owned()),
///         status: Set(SessionStatus::Planned),
///         ..Default::default()
///     })
///     .await?;
///
/// let recent = client
///     .workout_session()
///     .find_many(
///         FindManyArgs::new()
///             .filter(workout_session::Column::UserId.eq("user-1"))
///             .order_by(workout_session::Column::CreatedAt, Order::Desc)
///             .take(10),
///     )
///     .await?;
/// assert!(recent.iter().any(|s| s.id == session.id));
/// # Ok(())
/// # }
/// ```
pub struct Delegate<'c, E, C> {
    conn: &'c C,
    entity: PhantomData<E>,
}

/// Filter, ordering and pagination for list queries.
#[derive(Clone, Debug)]
pub struct FindManyArgs<E: EntityTrait> {
    filter: Condition,
    order_by: Vec<(E::Column, Order)>,
    skip: Option<u64>,
    take: Option<u64>,
}

impl<E: EntityTrait> Default for FindManyArgs<E> {
    fn default() -> Self {
        Self {
            filter: Condition::all(),
            order_by: Vec::new(),
            skip: None,
            take: None,
        }
    }
}

impl<E: EntityTrait> FindManyArgs<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a condition; all conditions must hold.
    pub fn filter<F: IntoCondition>(mut self, filter: F) -> Self {
        self.filter = self.filter.add(filter.into_condition());
        self
    }

    /// Appends a sort key. Earlier keys take precedence.
    pub fn order_by(mut self, column: E::Column, order: Order) -> Self {
        self.order_by.push((column, order));
        self
    }

    pub fn skip(mut self, n: u64) -> Self {
        self.skip = Some(n);
        self
    }

    pub fn take(mut self, n: u64) -> Self {
        self.take = Some(n);
        self
    }

    fn apply(self, mut select: Select<E>) -> Select<E> {
        select = select.filter(self.filter);
        for (column, order) in self.order_by {
            select = select.order_by(column, order);
        }
        if let Some(n) = self.skip {
            select = select.offset(n);
        }
        if let Some(n) = self.take {
            select = select.limit(n);
        }
        select
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AggregateFn {
    Avg,
    Sum,
    Min,
    Max,
}

impl AggregateFn {
    fn alias(self, column: &str) -> String {
        let prefix = match self {
            AggregateFn::Avg => "_avg",
            AggregateFn::Sum => "_sum",
            AggregateFn::Min => "_min",
            AggregateFn::Max => "_max",
        };
        format!("{prefix}_{column}")
    }

    /// Aggregate over `column`, cast so every backend decodes it as `f64`.
    fn expr<E: EntityTrait>(self, column: E::Column) -> SimpleExpr {
        let col = Expr::col((E::default(), column));
        let aggregated: SimpleExpr = match self {
            AggregateFn::Avg => Func::avg(col).into(),
            AggregateFn::Sum => col.sum(),
            AggregateFn::Min => col.min(),
            AggregateFn::Max => col.max(),
        };
        Func::cast_as(aggregated, Alias::new("DOUBLE PRECISION")).into()
    }
}

/// Aggregates requested by [`Delegate::aggregate`] and [`Delegate::group_by`].
#[derive(Clone, Debug)]
struct Aggregates<E: EntityTrait> {
    count: bool,
    columns: Vec<(AggregateFn, E::Column)>,
}

impl<E: EntityTrait> Default for Aggregates<E> {
    fn default() -> Self {
        Self {
            count: false,
            columns: Vec::new(),
        }
    }
}

impl<E: EntityTrait> Aggregates<E> {
    fn is_empty(&self) -> bool {
        !self.count && self.columns.is_empty()
    }

    fn check_numeric(&self, model: &'static str) -> Result<()> {
        for (_, column) in &self.columns {
            if !is_numeric(column.def().get_column_type()) {
                return Err(Error::validation(
                    model,
                    format!("cannot aggregate non-numeric column `{}`", column.as_str()),
                ));
            }
        }
        Ok(())
    }

    fn project(&self, mut select: Select<E>) -> Select<E> {
        if self.count {
            select = select.column_as(Expr::col(Asterisk).count(), COUNT_ALIAS);
        }
        for (func, column) in &self.columns {
            select = select.column_as(func.expr::<E>(*column), func.alias(column.as_str()));
        }
        select
    }

    fn read(&self, row: &QueryResult) -> Result<AggregateValues, DbErr> {
        let mut values = AggregateValues::default();
        if self.count {
            let count: i64 = row.try_get("", COUNT_ALIAS)?;
            values.count = Some(row_count(count)?);
        }
        for (func, column) in &self.columns {
            let name = column.as_str();
            let value: Option<f64> = row.try_get("", &func.alias(name))?;
            let target = match func {
                AggregateFn::Avg => &mut values.avg,
                AggregateFn::Sum => &mut values.sum,
                AggregateFn::Min => &mut values.min,
                AggregateFn::Max => &mut values.max,
            };
            target.insert(name.to_owned(), value);
        }
        Ok(values)
    }
}

fn row_count(count: i64) -> Result<u64, DbErr> {
    u64::try_from(count).map_err(|_| DbErr::Type(format!("invalid row count {count}")))
}

/// Arguments for [`Delegate::aggregate`].
#[derive(Clone, Debug)]
pub struct AggregateArgs<E: EntityTrait> {
    filter: Condition,
    aggregates: Aggregates<E>,
}

impl<E: EntityTrait> Default for AggregateArgs<E> {
    fn default() -> Self {
        Self {
            filter: Condition::all(),
            aggregates: Aggregates::default(),
        }
    }
}

impl<E: EntityTrait> AggregateArgs<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter<F: IntoCondition>(mut self, filter: F) -> Self {
        self.filter = self.filter.add(filter.into_condition());
        self
    }

    /// Counts matching rows.
    pub fn count(mut self) -> Self {
        self.aggregates.count = true;
        self
    }

    pub fn avg(mut self, column: E::Column) -> Self {
        self.aggregates.columns.push((AggregateFn::Avg, column));
        self
    }

    pub fn sum(mut self, column: E::Column) -> Self {
        self.aggregates.columns.push((AggregateFn::Sum, column));
        self
    }

    pub fn min(mut self, column: E::Column) -> Self {
        self.aggregates.columns.push((AggregateFn::Min, column));
        self
    }

    pub fn max(mut self, column: E::Column) -> Self {
        self.aggregates.columns.push((AggregateFn::Max, column));
        self
    }
}

/// Arguments for [`Delegate::group_by`].
#[derive(Clone, Debug)]
pub struct GroupByArgs<E: EntityTrait> {
    by: Vec<E::Column>,
    filter: Condition,
    having: Option<Condition>,
    aggregates: Aggregates<E>,
    order_by: Vec<(E::Column, Order)>,
    skip: Option<u64>,
    take: Option<u64>,
}

impl<E: EntityTrait> GroupByArgs<E> {
    /// Groups by the given columns, in order.
    pub fn new(by: impl IntoIterator<Item = E::Column>) -> Self {
        Self {
            by: by.into_iter().collect(),
            filter: Condition::all(),
            having: None,
            aggregates: Aggregates::default(),
            order_by: Vec::new(),
            skip: None,
            take: None,
        }
    }

    pub fn filter<F: IntoCondition>(mut self, filter: F) -> Self {
        self.filter = self.filter.add(filter.into_condition());
        self
    }

    /// Filters groups after aggregation.
    pub fn having<F: IntoCondition>(mut self, having: F) -> Self {
        let having = having.into_condition();
        self.having = Some(match self.having {
            Some(existing) => existing.add(having),
            None => having,
        });
        self
    }

    pub fn count(mut self) -> Self {
        self.aggregates.count = true;
        self
    }

    pub fn avg(mut self, column: E::Column) -> Self {
        self.aggregates.columns.push((AggregateFn::Avg, column));
        self
    }

    pub fn sum(mut self, column: E::Column) -> Self {
        self.aggregates.columns.push((AggregateFn::Sum, column));
        self
    }

    pub fn min(mut self, column: E::Column) -> Self {
        self.aggregates.columns.push((AggregateFn::Min, column));
        self
    }

    pub fn max(mut self, column: E::Column) -> Self {
        self.aggregates.columns.push((AggregateFn::Max, column));
        self
    }

    /// Sorts groups. The column must be one of the grouping columns.
    pub fn order_by(mut self, column: E::Column, order: Order) -> Self {
        self.order_by.push((column, order));
        self
    }

    pub fn skip(mut self, n: u64) -> Self {
        self.skip = Some(n);
        self
    }

    pub fn take(mut self, n: u64) -> Self {
        self.take = Some(n);
        self
    }
}

/// Aggregate figures, keyed by column name.
///
/// `avg`, `sum`, `min` and `max` hold `None` when no non-null value was
/// aggregated (e.g. an empty selection).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateValues {
    pub count: Option<u64>,
    pub avg: BTreeMap<String, Option<f64>>,
    pub sum: BTreeMap<String, Option<f64>>,
    pub min: BTreeMap<String, Option<f64>>,
    pub max: BTreeMap<String, Option<f64>>,
}

/// One group returned by [`Delegate::group_by`].
#[derive(Clone, Debug, PartialEq)]
pub struct GroupByRow {
    /// Grouping column values, keyed by column name.
    pub key: BTreeMap<String, JsonValue>,
    pub aggregates: AggregateValues,
}

fn fail<E: ClientEntity>(err: DbErr) -> Error {
    Error::from_db(E::MODEL, err)
}

fn is_numeric(column_type: &ColumnType) -> bool {
    matches!(
        column_type,
        ColumnType::TinyInteger
            | ColumnType::SmallInteger
            | ColumnType::Integer
            | ColumnType::BigInteger
            | ColumnType::Float
            | ColumnType::Double
            | ColumnType::Decimal(_)
    )
}

fn is_primary_key<E: EntityTrait>(column: &E::Column) -> bool {
    E::PrimaryKey::iter().any(|pk| pk.into_column().as_str() == column.as_str())
}

/// Copies every `Set` field of `patch` onto `target`. Primary keys are left alone.
/// Columns a caller may not rewrite: the primary key and the client-owned timestamps.
fn is_managed<E: ClientEntity>(column: &E::Column) -> bool {
    is_primary_key::<E>(column)
        || column.as_str() == E::created_at_column().as_str()
        || column.as_str() == E::updated_at_column().as_str()
}

fn overlay<E: ClientEntity>(target: &mut E::ActiveModel, patch: &E::ActiveModel) {
    for column in E::Column::iter() {
        if is_managed::<E>(&column) {
            continue;
        }
        if let ActiveValue::Set(value) = patch.get(column) {
            target.set(column, value);
        }
    }
}

/// Decodes a grouping column according to its declared type.
fn read_key(row: &QueryResult, column: &str, column_type: &ColumnType) -> Result<JsonValue, DbErr> {
    let value = match column_type {
        ColumnType::TinyInteger | ColumnType::SmallInteger | ColumnType::Integer => {
            row.try_get::<Option<i32>>("", column)?.map(JsonValue::from)
        }
        ColumnType::BigInteger => row.try_get::<Option<i64>>("", column)?.map(JsonValue::from),
        ColumnType::Float | ColumnType::Double => {
            row.try_get::<Option<f64>>("", column)?.map(JsonValue::from)
        }
        ColumnType::Boolean => row.try_get::<Option<bool>>("", column)?.map(JsonValue::from),
        ColumnType::Date => row
            .try_get::<Option<chrono::NaiveDate>>("", column)?
            .map(|d| JsonValue::String(d.to_string())),
        ColumnType::TimestampWithTimeZone => row
            .try_get::<Option<sea_orm::prelude::DateTimeWithTimeZone>>("", column)?
            .map(|t| JsonValue::String(t.to_rfc3339())),
        ColumnType::Json | ColumnType::JsonBinary => row.try_get::<Option<JsonValue>>("", column)?,
        _ => row.try_get::<Option<String>>("", column)?.map(JsonValue::String),
    };
    Ok(value.unwrap_or(JsonValue::Null))
}

impl<'c, E, C> Delegate<'c, E, C> {
    pub fn new(conn: &'c C) -> Self {
        Self {
            conn,
            entity: PhantomData,
        }
    }
}

impl<'c, E, C> Delegate<'c, E, C>
where
    E: ClientEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: Send + Sync + 'static,
    C: ConnectionTrait,
{
    /// Returns the row matching `unique`, if any.
    pub async fn find_unique(&self, unique: impl Into<E::Unique>) -> Result<Option<E::Model>> {
        let unique: E::Unique = unique.into();
        E::find()
            .filter(unique)
            .one(self.conn)
            .await
            .map_err(fail::<E>)
    }

    /// Like [`find_unique`](Self::find_unique) but fails with [`Error::NotFound`] when absent.
    pub async fn find_unique_or_throw(&self, unique: impl Into<E::Unique>) -> Result<E::Model> {
        self.find_unique(unique)
            .await?
            .ok_or(Error::NotFound { model: E::MODEL })
    }

    /// Returns the first row of [`find_many`](Self::find_many).
    pub async fn find_first(&self, args: FindManyArgs<E>) -> Result<Option<E::Model>> {
        args.apply(E::find())
            .one(self.conn)
            .await
            .map_err(fail::<E>)
    }

    pub async fn find_first_or_throw(&self, args: FindManyArgs<E>) -> Result<E::Model> {
        self.find_first(args)
            .await?
            .ok_or(Error::NotFound { model: E::MODEL })
    }

    pub async fn find_many(&self, args: FindManyArgs<E>) -> Result<Vec<E::Model>> {
        debug!(model = E::MODEL, "find_many");
        args.apply(E::find())
            .all(self.conn)
            .await
            .map_err(fail::<E>)
    }

    /// Inserts a row and returns it as stored.
    ///
    /// An unset `id` is generated; `created_at` and `updated_at` are stamped.
    pub async fn create(&self, data: E::ActiveModel) -> Result<E::Model> {
        E::validate(&data).map_err(|message| Error::validation(E::MODEL, message))?;
        debug!(model = E::MODEL, "create");
        data.insert(self.conn).await.map_err(fail::<E>)
    }

    /// Inserts many rows in one statement and returns how many were written.
    pub async fn create_many(
        &self,
        data: impl IntoIterator<Item = E::ActiveModel>,
    ) -> Result<u64> {
        let mut rows = Vec::new();
        for model in data {
            E::validate(&model).map_err(|message| Error::validation(E::MODEL, message))?;
            // insert_many bypasses ActiveModelBehavior, so stamp here.
            rows.push(model.before_save(self.conn, true).await.map_err(fail::<E>)?);
        }
        if rows.is_empty() {
            return Ok(0);
        }

        debug!(model = E::MODEL, rows = rows.len(), "create_many");
        E::insert_many(rows)
            .exec_without_returning(self.conn)
            .await
            .map_err(fail::<E>)
    }

    /// Applies the `Set` fields of `data` to the row matching `unique`.
    pub async fn update(
        &self,
        unique: impl Into<E::Unique>,
        data: E::ActiveModel,
    ) -> Result<E::Model> {
        let existing = self.find_unique_or_throw(unique).await?;
        self.apply_update(existing, &data).await
    }

    async fn apply_update(&self, existing: E::Model, data: &E::ActiveModel) -> Result<E::Model> {
        let mut active = existing.into_active_model();
        overlay::<E>(&mut active, data);
        E::validate(&active).map_err(|message| Error::validation(E::MODEL, message))?;
        debug!(model = E::MODEL, "update");
        active.update(self.conn).await.map_err(fail::<E>)
    }

    /// Applies the `Set` fields of `data` to every matching row.
    ///
    /// Primary keys and `created_at` in `data` are ignored and `updated_at` is
    /// always refreshed. Every matching row is checked with the patch applied
    /// before anything is written, so a patch that would break a row's
    /// cross-field rules fails with [`Error::Validation`] and changes nothing.
    /// Run it inside a transaction when concurrent writers may touch the rows.
    /// Returns the number of rows affected.
    pub async fn update_many<F: IntoCondition>(
        &self,
        filter: F,
        mut data: E::ActiveModel,
    ) -> Result<u64> {
        E::validate(&data).map_err(|message| Error::validation(E::MODEL, message))?;
        for column in E::Column::iter() {
            if is_managed::<E>(&column) {
                data.not_set(column);
            }
        }

        let filter = filter.into_condition();
        let affected = E::find()
            .filter(filter.clone())
            .all(self.conn)
            .await
            .map_err(fail::<E>)?;
        for existing in affected {
            let mut active = existing.into_active_model();
            overlay::<E>(&mut active, &data);
            E::validate(&active).map_err(|message| Error::validation(E::MODEL, message))?;
        }

        let result = E::update_many()
            .set(data)
            .col_expr(E::updated_at_column(), Expr::value(entity::now()))
            .filter(filter)
            .exec(self.conn)
            .await
            .map_err(fail::<E>)?;
        debug!(model = E::MODEL, rows = result.rows_affected, "update_many");
        Ok(result.rows_affected)
    }

    /// Updates the row matching `unique`, or inserts `create` when there is none.
    pub async fn upsert(
        &self,
        unique: impl Into<E::Unique>,
        create: E::ActiveModel,
        update: E::ActiveModel,
    ) -> Result<E::Model> {
        match self.find_unique(unique).await? {
            Some(existing) => self.apply_update(existing, &update).await,
            None => self.create(create).await,
        }
    }

    /// Deletes the row matching `unique` and returns it.
    pub async fn delete(&self, unique: impl Into<E::Unique>) -> Result<E::Model> {
        let existing = self.find_unique_or_throw(unique).await?;
        let active: E::ActiveModel = existing.clone().into_active_model();
        let result = active.delete(self.conn).await.map_err(fail::<E>)?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound { model: E::MODEL });
        }
        debug!(model = E::MODEL, "delete");
        Ok(existing)
    }

    /// Deletes every matching row and returns how many were removed.
    pub async fn delete_many<F: IntoCondition>(&self, filter: F) -> Result<u64> {
        let result = E::delete_many()
            .filter(filter)
            .exec(self.conn)
            .await
            .map_err(fail::<E>)?;
        debug!(model = E::MODEL, rows = result.rows_affected, "delete_many");
        Ok(result.rows_affected)
    }

    pub async fn count<F: IntoCondition>(&self, filter: F) -> Result<u64> {
        E::find()
            .filter(filter)
            .count(self.conn)
            .await
            .map_err(fail::<E>)
    }

    /// Computes count/avg/sum/min/max over the matching rows.
    ///
    /// Only numeric columns can be averaged, summed or compared; other columns
    /// are rejected with [`Error::Validation`] before any query runs.
    pub async fn aggregate(&self, args: AggregateArgs<E>) -> Result<AggregateValues> {
        if args.aggregates.is_empty() {
            return Err(Error::validation(E::MODEL, "no aggregate selected"));
        }
        args.aggregates.check_numeric(E::MODEL)?;

        let select = args
            .aggregates
            .project(E::find().select_only().filter(args.filter));
        let statement = select.build(self.conn.get_database_backend());
        let row = self.conn.query_one(statement).await.map_err(fail::<E>)?;

        match row {
            Some(row) => args.aggregates.read(&row).map_err(fail::<E>),
            None => Ok(AggregateValues::default()),
        }
    }

    /// Groups the matching rows by `args.by` and aggregates each group.
    pub async fn group_by(&self, args: GroupByArgs<E>) -> Result<Vec<GroupByRow>> {
        if args.by.is_empty() {
            return Err(Error::validation(E::MODEL, "group_by needs at least one column"));
        }
        for (column, _) in &args.order_by {
            if !args.by.iter().any(|c| c.as_str() == column.as_str()) {
                return Err(Error::validation(
                    E::MODEL,
                    format!("cannot order groups by `{}`: not a grouping column", column.as_str()),
                ));
            }
        }
        args.aggregates.check_numeric(E::MODEL)?;

        let mut select = E::find().select_only().filter(args.filter);
        for column in &args.by {
            select = select.column(*column).group_by(*column);
        }
        select = args.aggregates.project(select);
        if let Some(having) = args.having {
            select = select.having(having);
        }
        for (column, order) in args.order_by {
            select = select.order_by(column, order);
        }
        if let Some(n) = args.skip {
            select = select.offset(n);
        }
        if let Some(n) = args.take {
            select = select.limit(n);
        }

        let statement = select.build(self.conn.get_database_backend());
        let rows = self.conn.query_all(statement).await.map_err(fail::<E>)?;
        debug!(model = E::MODEL, groups = rows.len(), "group_by");

        rows.iter()
            .map(|row| {
                let mut key = BTreeMap::new();
                for column in &args.by {
                    let name = column.as_str();
                    let value = read_key(row, name, column.def().get_column_type())?;
                    key.insert(name.to_owned(), value);
                }
                Ok(GroupByRow {
                    key,
                    aggregates: args.aggregates.read(row)?,
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(fail::<E>)
    }
}

/// A session with its exercises, each carrying its set records.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionDetails {
    pub session: workout_session::Model,
    pub exercises: Vec<ExerciseDetails>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseDetails {
    pub exercise: workout_exercise::Model,
    pub records: Vec<workout_record::Model>,
}

impl<'c, C: ConnectionTrait> Delegate<'c, workout_session::Entity, C> {
    /// Loads a session together with its exercises (by `order_index`) and
    /// their records (by `set_number`).
    pub async fn find_unique_with_details(
        &self,
        unique: impl Into<workout_session::Unique>,
    ) -> Result<Option<SessionDetails>> {
        let Some(session) = self.find_unique(unique).await? else {
            return Ok(None);
        };

        let exercises = session
            .find_related(workout_exercise::Entity)
            .order_by_asc(workout_exercise::Column::OrderIndex)
            .all(self.conn)
            .await
            .map_err(fail::<workout_exercise::Entity>)?;
        let records = exercises
            .load_many(workout_record::Entity, self.conn)
            .await
            .map_err(fail::<workout_record::Entity>)?;

        let exercises = exercises
            .into_iter()
            .zip(records)
            .map(|(exercise, mut records)| {
                records.sort_by_key(|r| r.set_number);
                ExerciseDetails { exercise, records }
            })
            .collect();

        Ok(Some(SessionDetails { session, exercises }))
    }

    /// Lists sessions, each with its exercises ordered by `order_index`.
    pub async fn find_many_with_exercises(
        &self,
        args: FindManyArgs<workout_session::Entity>,
    ) -> Result<Vec<(workout_session::Model, Vec<workout_exercise::Model>)>> {
        let sessions = self.find_many(args).await?;
        let exercises = sessions
            .load_many(workout_exercise::Entity, self.conn)
            .await
            .map_err(fail::<workout_exercise::Entity>)?;

        Ok(sessions
            .into_iter()
            .zip(exercises)
            .map(|(session, mut exercises)| {
                exercises.sort_by_key(|e| e.order_index);
                (session, exercises)
            })
            .collect())
    }
}

impl<'c, C: ConnectionTrait> Delegate<'c, workout_exercise::Entity, C> {
    /// Lists exercises, each with its records ordered by `set_number`.
    pub async fn find_many_with_records(
        &self,
        args: FindManyArgs<workout_exercise::Entity>,
    ) -> Result<Vec<(workout_exercise::Model, Vec<workout_record::Model>)>> {
        let exercises = self.find_many(args).await?;
        let records = exercises
            .load_many(workout_record::Entity, self.conn)
            .await
            .map_err(fail::<workout_record::Entity>)?;

        Ok(exercises
            .into_iter()
            .zip(records)
            .map(|(exercise, mut records)| {
                records.sort_by_key(|r| r.set_number);
                (exercise, records)
            })
            .collect())
    }
}

/// Per-model delegates for any connection, including open transactions.
///
/// ```no_run
/// use sea_orm::TransactionTrait;
/// use workout_client::Delegates;
///
/// # async fn example(conn: sea_orm::DatabaseConnection) -> workout_client::Result<()> {
/// let txn = conn.begin().await?;
/// let goals = txn.workout_goal().count(sea_orm::Condition::all()).await?;
/// txn.commit().await?;
/// # let _ = goals;
/// # Ok(())
/// # }
/// ```
pub trait Delegates: ConnectionTrait + Sized {
    fn workout_session(&self) -> Delegate<'_, workout_session::Entity, Self> {
        Delegate::new(self)
    }

    fn user_summary(&self) -> Delegate<'_, user_summary::Entity, Self> {
        Delegate::new(self)
    }

    fn workout_exercise(&self) -> Delegate<'_, workout_exercise::Entity, Self> {
        Delegate::new(self)
    }

    fn workout_record(&self) -> Delegate<'_, workout_record::Entity, Self> {
        Delegate::new(self)
    }

    fn personal_record(&self) -> Delegate<'_, personal_record::Entity, Self> {
        Delegate::new(self)
    }

    fn workout_template(&self) -> Delegate<'_, workout_template::Entity, Self> {
        Delegate::new(self)
    }

    fn workout_goal(&self) -> Delegate<'_, workout_goal::Entity, Self> {
        Delegate::new(self)
    }
}

impl<C: ConnectionTrait> Delegates for C {}
