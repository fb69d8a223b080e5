pub mod home;
pub mod placeholder;
pub mod repository;
