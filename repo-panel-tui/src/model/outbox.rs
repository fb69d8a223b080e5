//! 待执行的后端命令队列

use crate::message::Command;

/// 带视图代数的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    /// 发出命令时的视图代数
    pub generation: u64,
    pub command: Command,
}

/// 命令发件箱
///
/// 持有当前视图代数。每次导航都会递增代数，
/// 旧视图发出的命令所带的代数随即失效。
#[derive(Debug, Default)]
pub struct Outbox {
    generation: u64,
    effects: Vec<Effect>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前视图代数
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 进入新视图
    pub fn advance(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// 以当前代数排队一条命令
    pub fn issue(&mut self, command: Command) {
        self.effects.push(Effect {
            generation: self.generation,
            command,
        });
    }

    /// 取出全部待执行命令
    pub fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}
