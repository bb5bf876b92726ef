use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::stats::{PrStatistics, StatsView, TeamStat, UserAssignmentStat};
use entity::user::Entity as User;
use sea_orm::{DbBackend, EntityTrait, FromQueryResult, PaginatorTrait, Statement};

impl PostgresService {
    /// Assignment and PR counters for the whole system. Aggregates are plain
    /// SQL; sea-orm maps the rows through `FromQueryResult`.
    pub async fn get_stats(&self) -> Result<StatsView, AppError> {
        let user_assignments = UserAssignmentStat::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT u.user_id, u.username, COUNT(r.user_id)::bigint AS assignment_count
            FROM "user" u
            LEFT JOIN pr_reviewer r ON r.user_id = u.user_id
            GROUP BY u.user_id, u.username
            ORDER BY assignment_count DESC, u.user_id
            "#,
        ))
        .all(&self.db)
        .await?;

        let pr_statistics = PrStatistics::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT COUNT(*)::bigint AS total_prs,
                   COUNT(*) FILTER (WHERE status = 'OPEN')::bigint AS open_prs,
                   COUNT(*) FILTER (WHERE status = 'MERGED')::bigint AS merged_prs,
                   COALESCE(AVG(reviewer_count), 0)::float8 AS avg_reviewers
            FROM (
                SELECT p.pull_request_id, p.status, COUNT(r.user_id) AS reviewer_count
                FROM pull_request p
                LEFT JOIN pr_reviewer r ON r.pull_request_id = p.pull_request_id
                GROUP BY p.pull_request_id, p.status
            ) per_pr
            "#,
        ))
        .one(&self.db)
        .await?
        .ok_or_else(|| AppError::Internal("pr statistics query returned no row".into()))?;

        let team_statistics = TeamStat::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT t.name AS team_name,
                   COUNT(DISTINCT tm.user_id)::bigint AS user_count,
                   COUNT(DISTINCT p.pull_request_id)::bigint AS pr_count
            FROM team t
            LEFT JOIN team_member tm ON tm.team_name = t.name
            LEFT JOIN pull_request p ON p.author_id = tm.user_id
            GROUP BY t.name
            ORDER BY t.name
            "#,
        ))
        .all(&self.db)
        .await?;

        let total_users = User::find().count(&self.db).await?;

        Ok(StatsView {
            user_assignments,
            pr_statistics,
            team_statistics,
            total_users,
        })
    }
}
