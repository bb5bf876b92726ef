use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Team {
    Table,
    Name,
}

#[derive(DeriveIden)]
enum User {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum TeamMember {
    Table,
    TeamName,
    UserId,
    Position,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(TeamMember::Table)
                .col(ColumnDef::new(TeamMember::TeamName).string().not_null())
                .col(ColumnDef::new(TeamMember::UserId).string().not_null())
                // roster index at insertion time; candidate queries order by this
                .col(ColumnDef::new(TeamMember::Position).integer().not_null())
                .col(
                    ColumnDef::new(TeamMember::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .primary_key(
                    Index::create()
                        .name("pk_team_member")
                        .col(TeamMember::TeamName)
                        .col(TeamMember::UserId),
                )
                .to_owned(),
        )
        .await?;

        m.alter_table(
            Table::alter()
                .table(TeamMember::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_team_member_team")
                        .from_tbl(TeamMember::Table)
                        .from_col(TeamMember::TeamName)
                        .to_tbl(Team::Table)
                        .to_col(Team::Name)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_team_member_user")
                        .from_tbl(TeamMember::Table)
                        .from_col(TeamMember::UserId)
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
                .name("idx_team_member_user")
                .table(TeamMember::Table)
                .col(TeamMember::UserId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(TeamMember::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
