//! Widen the `cliente` text columns to `text`.
//!
//! Validation only requires non-blank values, so the table must not cap
//! lengths the API accepts.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Cliente::Table)
                    .modify_column(ColumnDef::new(Cliente::Nombre).text().not_null())
                    .modify_column(ColumnDef::new(Cliente::Apellido).text().not_null())
                    .modify_column(ColumnDef::new(Cliente::Email).text().not_null())
                    .modify_column(ColumnDef::new(Cliente::Telefono).text().not_null())
                    .modify_column(ColumnDef::new(Cliente::Ciudad).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Cliente::Table)
                    .modify_column(ColumnDef::new(Cliente::Nombre).string_len(128).not_null())
                    .modify_column(ColumnDef::new(Cliente::Apellido).string_len(128).not_null())
                    .modify_column(ColumnDef::new(Cliente::Email).string_len(255).not_null())
                    .modify_column(ColumnDef::new(Cliente::Telefono).string_len(32).not_null())
                    .modify_column(ColumnDef::new(Cliente::Ciudad).string_len(128).not_null())
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Cliente { Table, Nombre, Apellido, Email, Telefono, Ciudad }
