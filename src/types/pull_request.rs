use crate::types::user::UserView;
use chrono::{DateTime, Utc};
use entity::pull_request::{self, PrStatus};
use entity::user;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RPrCreate {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RPrMerge {
    pub pull_request_id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RPrReassign {
    pub pull_request_id: String,
    pub old_user_id: String,
}

/// A pull request with its reviewer list in slot order, as held by the store.
#[derive(Debug)]
pub struct PrDetail {
    pub pr: pull_request::Model,
    pub reviewers: Vec<user::Model>,
}

#[derive(Serialize, Debug)]
pub struct PrView {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
    pub assigned_reviewers: Vec<UserView>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "mergedAt", skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<DateTime<Utc>>,
}

impl From<PrDetail> for PrView {
    fn from(detail: PrDetail) -> Self {
        PrView {
            pull_request_id: detail.pr.pull_request_id,
            pull_request_name: detail.pr.title,
            author_id: detail.pr.author_id,
            status: detail.pr.status,
            assigned_reviewers: detail
                .reviewers
                .into_iter()
                .map(UserView::from_model)
                .collect(),
            created_at: detail.pr.created_at,
            merged_at: detail.pr.merged_at,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct PrShort {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
}

impl From<&PrDetail> for PrShort {
    fn from(detail: &PrDetail) -> Self {
        PrShort {
            pull_request_id: detail.pr.pull_request_id.clone(),
            pull_request_name: detail.pr.title.clone(),
            author_id: detail.pr.author_id.clone(),
            status: detail.pr.status,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct PrEnvelope {
    pub pr: PrView,
}

#[derive(Serialize, Debug)]
pub struct ReassignEnvelope {
    pub pr: PrView,
    pub replaced_by: String,
}

#[derive(Serialize, Debug)]
pub struct AssignedReviews {
    pub user_id: String,
    pub pull_requests: Vec<PrShort>,
}
