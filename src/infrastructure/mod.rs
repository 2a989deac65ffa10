pub mod admin_repo;
pub mod models;
