pub mod blob;
pub mod crypto;
pub mod money;
pub mod time;
pub mod token;
