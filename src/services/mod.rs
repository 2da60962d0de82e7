pub mod kpr_service;
pub mod scholarship_service;
pub mod user_service;
