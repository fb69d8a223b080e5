//! 主页消息类型

/// 仓库网格相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeMessage {
    /// 选择上一个卡片
    SelectPrevious,
    /// 选择下一个卡片
    SelectNext,
    /// 跳到第一个卡片
    SelectFirst,
    /// 跳到"添加"卡片
    SelectLast,
    /// 激活选中项（打开仓库或添加弹窗）
    Activate,
    /// 选中并激活指定格子（鼠标点击）
    ActivateAt(usize),
    /// 添加仓库
    Add,
    /// 修改选中仓库的 Jira 项目
    Edit,
    /// 删除选中仓库
    Delete,
    /// 登录或退出 Jira（取决于当前状态）
    SessionAction,
}

/// 详情页相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMessage {
    /// 返回主页
    Back,
    /// 在提交表与合并候选表之间切换
    SwitchTable,
    ScrollUp,
    ScrollDown,
}
