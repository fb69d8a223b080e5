//! 主循环
//!
//!     ┌──────────────────────────────────────────────────────────────┐
//!     │ 1. 绘制            view::render(&app)                        │
//!     │ 2. 后端结果        rx.try_recv() ──▶ update                   │
//!     │ 3. 终端事件        poll_event ──▶ handle_event ──▶ update     │
//!     │ 4. 派发命令        app.outbox.drain() ──▶ Executor            │
//!     └──────────────────────────────────────────────────────────────┘
//!
//! 所有状态修改都发生在这个线程上；后端任务只通过通道把结果送回来。

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Executor;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// 状态消息显示时长
const STATUS_TTL: Duration = Duration::from_secs(5);

pub fn run(
    terminal: &mut Term,
    app: &mut App,
    executor: &Executor,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let mut status_shown: Option<(String, Instant)> = None;

    // 初始路由排队的命令
    dispatch(app, executor);

    loop {
        // 1. 渲染 UI
        let size = terminal.size()?;
        app.viewport = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 后端结果
        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg);
        }

        // 4. 终端事件
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        // 5. 状态消息过期
        expire_status(app, &mut status_shown);

        // 6. 派发新命令
        dispatch(app, executor);
    }

    Ok(())
}

fn dispatch(app: &mut App, executor: &Executor) {
    for effect in app.outbox.drain() {
        log::debug!(
            "Dispatching {} (view generation {})",
            effect.command.name(),
            effect.generation
        );
        executor.dispatch(effect);
    }
}

/// 同一条状态消息显示超过 `STATUS_TTL` 后清除
fn expire_status(app: &mut App, shown: &mut Option<(String, Instant)>) {
    match (&app.status_message, shown.as_ref()) {
        (None, _) => *shown = None,
        (Some(current), Some((text, since))) if current == text => {
            if since.elapsed() >= STATUS_TTL {
                update::update(app, AppMessage::ClearStatus);
                *shown = None;
            }
        }
        (Some(current), _) => *shown = Some((current.clone(), Instant::now())),
    }
}
