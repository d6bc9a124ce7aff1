use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Cliente: lookup by city
        manager
            .create_index(
                Index::create()
                    .name("idx_cliente_ciudad")
                    .table(Cliente::Table)
                    .col(Cliente::Ciudad)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_cliente_ciudad").table(Cliente::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cliente { Table, Ciudad }
