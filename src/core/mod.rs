pub mod address;
pub mod errors;
pub mod models;
pub mod services;
