pub mod reviews;
pub mod set_active;
