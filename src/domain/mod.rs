pub mod admin;
pub mod catalog;
pub mod errors;
pub mod filters;
pub mod ports;
