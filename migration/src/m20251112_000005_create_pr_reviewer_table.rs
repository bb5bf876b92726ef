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
}

#[derive(DeriveIden)]
enum PrReviewer {
    Table,
    PullRequestId,
    UserId,
    Position,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(PrReviewer::Table)
                .col(ColumnDef::new(PrReviewer::PullRequestId).string().not_null())
                .col(ColumnDef::new(PrReviewer::UserId).string().not_null())
                // reviewer slot; reassignment keeps the slot and swaps the user
                .col(ColumnDef::new(PrReviewer::Position).integer().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_pr_reviewer")
                        .col(PrReviewer::PullRequestId)
                        .col(PrReviewer::UserId),
                )
                .to_owned(),
        )
        .await?;

        m.alter_table(
            Table::alter()
                .table(PrReviewer::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_pr_reviewer_pull_request")
                        .from_tbl(PrReviewer::Table)
                        .from_col(PrReviewer::PullRequestId)
                        .to_tbl(PullRequest::Table)
                        .to_col(PullRequest::PullRequestId)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_pr_reviewer_user")
                        .from_tbl(PrReviewer::Table)
                        .from_col(PrReviewer::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::UserId)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_pr_reviewer_user")
                .table(PrReviewer::Table)
                .col(PrReviewer::UserId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(PrReviewer::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
