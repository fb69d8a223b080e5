//! 命令执行器
//!
//! UI 主循环是同步的；执行器把每条命令作为独立任务交给 tokio 运行时，
//! 完成后把结果通过无界通道送回主循环。

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use super::CoreService;
use crate::message::{AppMessage, BackendEvent, Command};
use crate::model::{Effect, Route};

/// 执行一条命令
pub async fn execute(services: &CoreService, command: Command) -> BackendEvent {
    match command {
        Command::BuildView(Route::Home) => {
            let repositories = services.repositories();
            let session = services.session();
            let (repositories, session) = tokio::join!(repositories.list(), session.refresh());
            BackendEvent::HomeBuilt {
                repositories,
                session,
            }
        }

        Command::BuildView(Route::Repository(id)) => BackendEvent::DetailBuilt {
            id,
            history: services.history().load(id).await,
        },

        Command::ReloadRepositories => {
            BackendEvent::RepositoriesLoaded(services.repositories().list().await)
        }

        Command::ResolveAvatar(repository) => {
            let lookup = services.repositories().resolve_avatar(&repository).await;
            BackendEvent::AvatarResolved {
                id: repository.id,
                key: repository.jira_key.unwrap_or_default(),
                lookup,
            }
        }

        Command::LoadProjects { modal } => BackendEvent::ProjectsLoaded {
            modal,
            result: services.repositories().projects().await,
        },

        Command::AddRepository {
            modal,
            path,
            project_key,
        } => BackendEvent::RepositoryAdded {
            modal,
            result: services.repositories().add(&path, &project_key).await,
        },

        Command::UpdateRepositoryProject {
            modal,
            id,
            project_key,
        } => BackendEvent::RepositoryRelinked {
            modal,
            result: services.repositories().relink(id, &project_key).await,
        },

        Command::DeleteRepository(id) => BackendEvent::RepositoryDeleted {
            id,
            result: services.repositories().delete(id).await,
        },

        Command::LoadCredentials { modal } => BackendEvent::CredentialsLoaded {
            modal,
            credentials: services.session().stored_credentials().await,
        },

        Command::SaveCredentials {
            modal,
            server,
            username,
            password,
        } => BackendEvent::CredentialsSaved {
            modal,
            result: services.session().save(&server, &username, &password).await,
        },

        Command::Logout => BackendEvent::LoggedOut(services.session().logout().await),

        Command::RefreshSession => BackendEvent::SessionRefreshed(services.session().refresh().await),
    }
}

/// 命令执行器
pub struct Executor {
    handle: Handle,
    services: Arc<CoreService>,
    tx: UnboundedSender<AppMessage>,
}

impl Executor {
    pub fn new(handle: Handle, services: Arc<CoreService>, tx: UnboundedSender<AppMessage>) -> Self {
        Self {
            handle,
            services,
            tx,
        }
    }

    /// 在运行时上执行命令，不等待结果
    pub fn dispatch(&self, effect: Effect) {
        let services = Arc::clone(&self.services);
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let Effect {
                generation,
                command,
            } = effect;
            let event = execute(&services, command).await;
            // 主循环已退出时接收端已关闭
            if tx.send(AppMessage::Backend { generation, event }).is_err() {
                log::debug!("UI loop gone, dropping backend result");
            }
        });
    }
}
