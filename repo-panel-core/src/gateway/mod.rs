//! 网关实现

mod http;
mod memory;

pub use http::{HttpGateway, DEFAULT_TIMEOUT};
pub use memory::InMemoryGateway;
