pub mod scholarship;
pub mod user;
