//! Lookup indexes: account email (login / duplicate check) and student first
//! name (directory search). Neither is unique.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_account_email")
                    .table(Account::Table)
                    .col(Account::Email)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_first_name")
                    .table(Student::Table)
                    .col(Student::FirstName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_student_first_name").table(Student::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_account_email").table(Account::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Account { Table, Email }

#[derive(DeriveIden)]
enum Student { Table, FirstName }
