pub mod debug;
pub mod login;
