pub mod error;
pub mod logger;
pub mod lunar;
pub mod validation;
