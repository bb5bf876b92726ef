use sea_orm::FromQueryResult;
use serde::Serialize;

#[derive(Debug, FromQueryResult, Serialize)]
pub struct UserAssignmentStat {
    pub user_id: String,
    pub username: String,
    pub assignment_count: i64,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct PrStatistics {
    pub total_prs: i64,
    pub open_prs: i64,
    pub merged_prs: i64,
    pub avg_reviewers: f64,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct TeamStat {
    pub team_name: String,
    pub user_count: i64,
    pub pr_count: i64,
}

#[derive(Debug, Serialize)]
pub struct StatsView {
    pub user_assignments: Vec<UserAssignmentStat>,
    pub pr_statistics: PrStatistics,
    pub team_statistics: Vec<TeamStat>,
    pub total_users: u64,
}
