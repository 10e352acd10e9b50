pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_workout_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Keep our history apart from the host application's own migrations.
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("workout_client_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_workout_tables::Migration)]
    }
}
