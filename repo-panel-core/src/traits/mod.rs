//! 后端抽象 trait 定义

mod gateway;

pub use gateway::{Gateway, Operation};
