pub mod auth_dto;
pub mod kpr_dto;
pub mod scholarship_dto;
