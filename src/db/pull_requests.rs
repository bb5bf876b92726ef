use crate::assignment;
use crate::db::postgres_service::PostgresService;
use crate::db::teams::{roster, team_of_user};
use crate::types::error::AppError;
use crate::types::pull_request::PrDetail;
use crate::types::team::MassDeactivateOutcome;
use chrono::Utc;
use entity::pr_reviewer::{self, ActiveModel as PrReviewerActive, Entity as PrReviewer};
use entity::pull_request::{self, ActiveModel as PrActive, Entity as PullRequest, PrStatus};
use entity::team_member::{self, Entity as TeamMember};
use entity::user::{self, Entity as User};
use log::info;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::HashMap;

/// Reviewer links of a PR in slot order.
async fn reviewer_links<C: ConnectionTrait>(
    conn: &C,
    pr_id: &str,
) -> Result<Vec<pr_reviewer::Model>, AppError> {
    Ok(PrReviewer::find()
        .filter(pr_reviewer::Column::PullRequestId.eq(pr_id))
        .order_by_asc(pr_reviewer::Column::Position)
        .all(conn)
        .await?)
}

/// Reviewer users of a PR in slot order.
async fn reviewers_of<C: ConnectionTrait>(
    conn: &C,
    pr_id: &str,
) -> Result<Vec<user::Model>, AppError> {
    let links = reviewer_links(conn, pr_id).await?;
    let ids: Vec<String> = links.iter().map(|l| l.user_id.clone()).collect();
    let users = User::find()
        .filter(user::Column::UserId.is_in(ids))
        .all(conn)
        .await?;
    let mut by_id: HashMap<String, user::Model> =
        users.into_iter().map(|u| (u.user_id.clone(), u)).collect();
    Ok(links
        .iter()
        .filter_map(|l| by_id.remove(&l.user_id))
        .collect())
}

/// Swaps the user on one reviewer link, keeping its slot.
async fn swap_reviewer<C: ConnectionTrait>(
    conn: &C,
    pr_id: &str,
    old_id: &str,
    new_id: &str,
) -> Result<(), AppError> {
    PrReviewer::update_many()
        .col_expr(pr_reviewer::Column::UserId, Expr::value(new_id))
        .filter(pr_reviewer::Column::PullRequestId.eq(pr_id))
        .filter(pr_reviewer::Column::UserId.eq(old_id))
        .exec(conn)
        .await?;
    Ok(())
}

impl PostgresService {
    /// Creates a PR and auto-assigns up to two active reviewers from the
    /// author's team, all in one transaction. An author without a team aborts
    /// the whole operation; no PR row survives.
    pub async fn create_pr(
        &self,
        pr_id: &str,
        title: &str,
        author_id: &str,
    ) -> Result<PrDetail, AppError> {
        let txn = self.db.begin().await?;

        if PullRequest::find_by_id(pr_id).one(&txn).await?.is_some() {
            return Err(AppError::PrExists);
        }

        let team_name = team_of_user(&txn, author_id)
            .await?
            .ok_or(AppError::AuthorTeamNotFound)?;
        let team_roster = roster(&txn, &team_name).await?;
        let picked = assignment::select_reviewers(author_id, &team_roster);

        let now = Utc::now();
        PullRequest::insert(PrActive {
            pull_request_id: Set(pr_id.to_owned()),
            title: Set(title.to_owned()),
            author_id: Set(author_id.to_owned()),
            status: Set(PrStatus::Open),
            created_at: Set(now),
            merged_at: Set(None),
        })
        .exec(&txn)
        .await?;

        for (position, reviewer) in picked.iter().enumerate() {
            PrReviewer::insert(PrReviewerActive {
                pull_request_id: Set(pr_id.to_owned()),
                user_id: Set(reviewer.user_id.clone()),
                position: Set(position as i32),
            })
            .exec_without_returning(&txn)
            .await?;
        }

        let reviewers: Vec<user::Model> = picked.into_iter().cloned().collect();
        txn.commit().await?;

        Ok(PrDetail {
            pr: pull_request::Model {
                pull_request_id: pr_id.to_owned(),
                title: title.to_owned(),
                author_id: author_id.to_owned(),
                status: PrStatus::Open,
                created_at: now,
                merged_at: None,
            },
            reviewers,
        })
    }

    pub async fn get_pr(&self, pr_id: &str) -> Result<PrDetail, AppError> {
        let pr = PullRequest::find_by_id(pr_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        let reviewers = reviewers_of(&self.db, pr_id).await?;
        Ok(PrDetail { pr, reviewers })
    }

    /// OPEN -> MERGED, one-way and idempotent: merging an already merged PR
    /// returns current state with `merged_at` untouched.
    pub async fn merge_pr(&self, pr_id: &str) -> Result<PrDetail, AppError> {
        let txn = self.db.begin().await?;

        let pr = PullRequest::find_by_id(pr_id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;

        if pr.status == PrStatus::Open {
            let mut am: PrActive = pr.into();
            am.status = Set(PrStatus::Merged);
            am.merged_at = Set(Some(Utc::now()));
            am.update(&txn).await?;
        }

        txn.commit().await?;
        self.get_pr(pr_id).await
    }

    /// Replaces one reviewer with the first qualifying candidate from their
    /// team. Precondition order is fixed: missing PR, merged PR, reviewer not
    /// assigned, then candidate search. On `NoCandidate` the reviewer set is
    /// left unchanged.
    pub async fn reassign_reviewer(
        &self,
        pr_id: &str,
        old_reviewer_id: &str,
    ) -> Result<(PrDetail, String), AppError> {
        let txn = self.db.begin().await?;

        let pr = PullRequest::find_by_id(pr_id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;
        if pr.status == PrStatus::Merged {
            return Err(AppError::PrMerged);
        }

        let links = reviewer_links(&txn, pr_id).await?;
        if !links.iter().any(|l| l.user_id == old_reviewer_id) {
            return Err(AppError::NotAssigned);
        }

        let team_name = team_of_user(&txn, old_reviewer_id)
            .await?
            .ok_or(AppError::NotFound)?;
        let team_roster = roster(&txn, &team_name).await?;

        // current reviewers plus the author are out of the running
        let mut excluded: Vec<String> = links.iter().map(|l| l.user_id.clone()).collect();
        excluded.push(pr.author_id.clone());

        let new_id = assignment::pick_replacement(old_reviewer_id, &team_roster, &excluded)
            .map(|m| m.user_id.clone())
            .ok_or(AppError::NoCandidate)?;

        swap_reviewer(&txn, pr_id, old_reviewer_id, &new_id).await?;
        txn.commit().await?;

        let detail = self.get_pr(pr_id).await?;
        Ok((detail, new_id))
    }

    /// Every PR (open or merged) on which the user is currently a reviewer.
    pub async fn list_prs_assigned_to(&self, user_id: &str) -> Result<Vec<PrDetail>, AppError> {
        let links = PrReviewer::find()
            .filter(pr_reviewer::Column::UserId.eq(user_id))
            .order_by_asc(pr_reviewer::Column::PullRequestId)
            .all(&self.db)
            .await?;

        let mut details = Vec::with_capacity(links.len());
        for link in links {
            details.push(self.get_pr(&link.pull_request_id).await?);
        }
        Ok(details)
    }

    /// Deactivates every member of a team except the excluded ones, then
    /// tries to reassign each open PR that is now stuck with an inactive
    /// reviewer from that team. PRs without a replacement candidate keep
    /// their inactive reviewer; only successful swaps are reported. One
    /// transaction covers the whole flow.
    pub async fn mass_deactivate(
        &self,
        team_name: &str,
        exclude: &[String],
    ) -> Result<MassDeactivateOutcome, AppError> {
        let txn = self.db.begin().await?;

        let memberships = TeamMember::find()
            .filter(team_member::Column::TeamName.eq(team_name))
            .order_by_asc(team_member::Column::Position)
            .all(&txn)
            .await?;
        let member_ids: Vec<String> = memberships.iter().map(|m| m.user_id.clone()).collect();

        let targets: Vec<String> = member_ids
            .iter()
            .filter(|id| !exclude.contains(id))
            .cloned()
            .collect();

        let mut deactivated: u64 = 0;
        if !targets.is_empty() {
            let res = User::update_many()
                .col_expr(user::Column::IsActive, Expr::value(false))
                .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(user::Column::UserId.is_in(targets))
                .exec(&txn)
                .await?;
            deactivated = res.rows_affected;
        }

        let mut reassigned: Vec<String> = Vec::new();
        if !member_ids.is_empty() {
            let inactive_ids: Vec<String> = User::find()
                .filter(user::Column::UserId.is_in(member_ids))
                .filter(user::Column::IsActive.eq(false))
                .all(&txn)
                .await?
                .into_iter()
                .map(|u| u.user_id)
                .collect();

            // post-deactivation roster; replacements picked from here stay
            // active and remain candidates for further PRs
            let team_roster = roster(&txn, team_name).await?;

            let stuck_links = PrReviewer::find()
                .filter(pr_reviewer::Column::UserId.is_in(inactive_ids))
                .order_by_asc(pr_reviewer::Column::PullRequestId)
                .order_by_asc(pr_reviewer::Column::Position)
                .all(&txn)
                .await?;

            for link in stuck_links {
                let Some(pr) = PullRequest::find_by_id(&link.pull_request_id)
                    .one(&txn)
                    .await?
                else {
                    continue;
                };
                if pr.status == PrStatus::Merged {
                    continue;
                }

                // exclusions refreshed per PR; earlier swaps count
                let current = reviewer_links(&txn, &pr.pull_request_id).await?;
                if !current.iter().any(|c| c.user_id == link.user_id) {
                    continue;
                }
                let mut excluded: Vec<String> =
                    current.iter().map(|c| c.user_id.clone()).collect();
                excluded.push(pr.author_id.clone());

                if let Some(candidate) =
                    assignment::pick_replacement(&link.user_id, &team_roster, &excluded)
                {
                    swap_reviewer(&txn, &pr.pull_request_id, &link.user_id, &candidate.user_id)
                        .await?;
                    reassigned.push(pr.pull_request_id.clone());
                }
                // no candidate: the PR keeps its inactive reviewer, by contract
            }
        }

        txn.commit().await?;

        info!(
            "mass deactivate on team {}: {} users deactivated, {} reviewer links reassigned",
            team_name,
            deactivated,
            reassigned.len()
        );

        Ok(MassDeactivateOutcome {
            team_name: team_name.to_owned(),
            deactivated_users: deactivated,
            reassigned_count: reassigned.len(),
            reassigned_prs: reassigned,
        })
    }
}
