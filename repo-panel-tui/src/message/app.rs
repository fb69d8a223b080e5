//! 应用主消息枚举

use super::{BackendEvent, DetailMessage, HomeMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 跳转到指定路由（`home` 或 `repo:<id>`）
    Navigate(String),

    /// 重新加载当前视图
    Refresh,

    /// 主页（仓库网格）相关消息
    Home(HomeMessage),

    /// 详情页相关消息
    Detail(DetailMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后端任务完成
    ///
    /// `generation` 是发出请求时的视图代数，与当前代数不一致时结果被丢弃。
    Backend {
        generation: u64,
        event: BackendEvent,
    },

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
