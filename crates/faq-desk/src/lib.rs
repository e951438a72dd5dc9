pub mod config;
pub mod error;
pub mod faq;
pub mod telemetry;
