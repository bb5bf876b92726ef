pub mod postgres_service;

mod pull_requests;
mod stats;
mod teams;
mod users;
