//!
//! src/event/mod.rs
//! Event 层：把终端事件翻译成消息
//!
//!     crossterm::Event ──▶ handle_event(event, &app) ──▶ AppMessage
//!
//! Event 层只读 Model，不修改任何状态。
//! 同一个按键在不同视图、有无弹窗时会翻译成不同的消息：
//!
//!     弹窗打开        ──▶ ModalMessage（只有 Ctrl+c 仍然全局生效）
//!     主页            ──▶ HomeMessage
//!     仓库详情        ──▶ DetailMessage
//!     页面不存在      ──▶ Navigate("home")
//!
//! 鼠标左键落在弹窗区域之外时发出 OutsideClick，
//! 区域由 `view::modal_area` 计算，与绘制使用同一份尺寸。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
