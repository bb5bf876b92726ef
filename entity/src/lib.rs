pub mod pr_reviewer;
pub mod pull_request;
pub mod team;
pub mod team_member;
pub mod user;

/*
 Users are created (or upserted) when a team roster references them; nothing
 deletes them. A user effectively belongs to one team, even though team_member
 would tolerate more rows.
 Reviewer links carry a slot position so a reassignment swaps one person
 without reshuffling the rest of the sequence.
 */
