pub mod create;
pub mod merge;
pub mod reassign;
