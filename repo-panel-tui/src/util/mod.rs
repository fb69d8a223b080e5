//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（按天滚动）
//!         mod terminal;       // 终端初始化和恢复（含鼠标捕获）
//!         pub mod text;       // 按显示宽度截断文本
//!
//!
//!     Raw Mode 关闭行缓冲和回显，每个按键立即送达；
//!     Alternate Screen 让 TUI 在备用屏幕运行，退出后恢复原有内容。
//!     两者都必须在退出时恢复，所以 main 在主循环出错时也会调用 restore_terminal。
//!

mod logging;
mod terminal;
pub mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
