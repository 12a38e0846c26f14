pub mod cache;
pub mod upstream;
