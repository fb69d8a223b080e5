//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 在弹窗矩形之外按下鼠标
    OutsideClick,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 选择上一个 Jira 项目
    PrevOption,

    /// 选择下一个 Jira 项目
    NextOption,

    /// 确认/提交
    Confirm,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 切换密码可见性
    ToggleSecrets,
}
