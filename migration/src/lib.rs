pub use sea_orm_migration::prelude::*;

mod m20251112_000001_create_team_table;
mod m20251112_000002_create_user_table;
mod m20251112_000003_create_team_member_table;
mod m20251112_000004_create_pull_request_table;
mod m20251112_000005_create_pr_reviewer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251112_000001_create_team_table::Migration),
            Box::new(m20251112_000002_create_user_table::Migration),
            Box::new(m20251112_000003_create_team_member_table::Migration),
            Box::new(m20251112_000004_create_pull_request_table::Migration),
            Box::new(m20251112_000005_create_pr_reviewer_table::Migration),
        ]
    }
}
