pub mod application;
pub mod export;
