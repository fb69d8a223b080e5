//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!     ┌──────────────────────────────────────────────────────────┐
//!     │ 标题栏                               Jira 会话状态（主页） │
//!     ├──────────────────────────────────────────────────────────┤
//!     │                                                          │
//!     │   Loading / 仓库网格 / 仓库详情 / Not found               │
//!     │                                                          │
//!     ├──────────────────────────────────────────────────────────┤
//!     │ 状态栏：快捷键提示 │ 状态消息                              │
//!     └──────────────────────────────────────────────────────────┘
//!
//!     弹窗在最上层，居中绘制。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use components::modal::modal_area;
pub use layout::{home_tile_at, render};
