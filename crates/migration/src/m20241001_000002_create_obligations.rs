//! Create `obligations` table with FK to `companies`.
//!
//! Rows are removed together with their company (ON DELETE CASCADE).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Obligations::Table)
                    .if_not_exists()
                    .col(pk_auto(Obligations::Id))
                    .col(string(Obligations::Name))
                    .col(string_null(Obligations::Periodicity))
                    .col(integer(Obligations::CompanyRef))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_obligations_company")
                            .from(Obligations::Table, Obligations::CompanyRef)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_obligations_company_ref")
                    .table(Obligations::Table)
                    .col(Obligations::CompanyRef)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Obligations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Obligations { Table, Id, Name, Periodicity, CompanyRef }

#[derive(DeriveIden)]
enum Companies { Table, Id }
