pub mod admin_service;
