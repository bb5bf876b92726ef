use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum PullRequest {
    Table,
    PullRequestId,
    Title,
    AuthorId,
    Status,
    CreatedAt,
    MergedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(PullRequest::Table)
                .col(
                    ColumnDef::new(PullRequest::PullRequestId)
                        .string()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(PullRequest::Title).string().not_null())
                .col(ColumnDef::new(PullRequest::AuthorId).string().not_null())
                .col(
                    ColumnDef::new(PullRequest::Status)
                        .string_len(16)
                        .not_null(),
                )
                .col(
                    ColumnDef::new(PullRequest::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(PullRequest::MergedAt)
                        .timestamp_with_time_zone()
                        .null(),
                )
                .to_owned(),
        )
        .await?;

        m.alter_table(
            Table::alter()
                .table(PullRequest::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_pull_request_author")
                        .from_tbl(PullRequest::Table)
                        .from_col(PullRequest::AuthorId)
                        .to_tbl(User::Table)
                        .to_col(User::UserId)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_pull_request_author")
                .table(PullRequest::Table)
                .col(PullRequest::AuthorId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(PullRequest::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
