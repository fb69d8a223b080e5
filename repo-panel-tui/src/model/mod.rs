//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!     App {
//!         view: View,                 // Loading | Home | Repository | NotFound
//!         modal: ModalState,          // 当前弹窗 + 打开代数
//!         outbox: Outbox,             // 视图代数 + 待执行命令
//!         status_message, viewport, ...
//!     }
//!
//! 视图代数在每次导航时递增；弹窗代数在每次打开时递增。
//! 后端结果只有在两者都匹配时才会写回状态。
//!

mod app;
mod outbox;
mod route;
pub mod state;
mod view_state;

pub use app::App;
pub use outbox::{Effect, Outbox};
pub use route::Route;
pub use state::{DetailState, HomeState, Modal, ModalState};
pub use view_state::View;
