//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event ──▶ Update 之间的桥梁。
//! 所有的用户操作、后端结果都通过 Message 来表达：
//!
//!     键盘/鼠标 ──▶ handle_event ──▶ AppMessage ──▶ update
//!                                       ▲
//!     后端任务 ──▶ BackendEvent ─────────┘
//!                 (AppMessage::Backend { generation, event })
//!
//! Update 层需要访问后端时，不直接调用，而是产出 Command，
//! 由 backend::Executor 在运行时上执行。
//!

mod app;
mod command;
mod home;
mod modal;

pub use app::AppMessage;
pub use command::{BackendEvent, Command};
pub use home::{DetailMessage, HomeMessage};
pub use modal::ModalMessage;
