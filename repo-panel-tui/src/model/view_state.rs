//! 当前显示的视图

use super::state::{DetailState, HomeState};

/// 当前视图
///
/// 只有路由会整体替换它；离开一个视图时其全部状态随之丢弃。
#[derive(Debug)]
pub enum View {
    /// 新视图构建中
    Loading,
    /// 仓库网格
    Home(HomeState),
    /// 仓库详情
    Repository(DetailState),
    /// 无法识别的路由
    NotFound,
}

