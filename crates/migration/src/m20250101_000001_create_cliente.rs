//! Create `cliente` table.
//!
//! `email` carries a unique constraint so concurrent writers cannot both
//! claim the same address.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cliente::Table)
                    .if_not_exists()
                    .col(big_integer(Cliente::Id).auto_increment().primary_key())
                    .col(string_len(Cliente::Nombre, 128).not_null())
                    .col(string_len(Cliente::Apellido, 128).not_null())
                    .col(string_len(Cliente::Email, 255).unique_key().not_null())
                    .col(string_len(Cliente::Telefono, 32).not_null())
                    .col(string_len(Cliente::Ciudad, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cliente::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cliente { Table, Id, Nombre, Apellido, Email, Telefono, Ciudad }
