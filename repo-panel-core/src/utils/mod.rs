//! 通用工具

pub mod empty_string;
pub mod log_sanitizer;
pub mod server_url;
