//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//!     CoreService          持有 repo-panel-core 的服务上下文（网关由配置决定）
//!     Executor             把 Update 层产出的 Command 交给 tokio 运行时执行
//!     ConfigService        加载/保存应用配置
//!
//! 数据流：
//!
//!     update ──▶ app.outbox ──▶ Executor::dispatch ──▶ tokio task
//!                                                        │ execute(command)
//!                                                        ▼
//!     update ◀── AppMessage::Backend { generation, event } ◀── mpsc
//!

mod config_service;
mod core_service;
mod executor;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
pub use executor::Executor;
