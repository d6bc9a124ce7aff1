//! Migrator registering the `cliente` schema.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_cliente;
mod m20250101_000002_add_indexes;
mod m20250101_000003_unbounded_text_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_cliente::Migration),
            Box::new(m20250101_000002_add_indexes::Migration),
            Box::new(m20250101_000003_unbounded_text_columns::Migration),
        ]
    }
}
