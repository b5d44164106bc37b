pub mod current;
pub mod login;
pub mod register;
