pub mod add;
pub mod deactivate;
pub mod get;
