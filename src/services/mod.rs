pub mod auth_service;
pub mod http;
pub mod profile_service;
pub mod wizard_service;
