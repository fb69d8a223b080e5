pub mod modal;
pub mod session;
pub mod statusbar;
