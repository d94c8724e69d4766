pub mod configs;
pub mod error;
pub mod logger;
