//! Migrator registering the registry tables in dependency order.
//! `companies` must exist before `obligations` references it.
pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_companies;
mod m20241001_000002_create_obligations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_companies::Migration),
            Box::new(m20241001_000002_create_obligations::Migration),
        ]
    }
}
