pub mod analysis;
pub mod cleaning;
pub mod collectors;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod storage;
