//! 测试辅助模块
//!
//! 提供预置数据的网关和便捷的测试工厂方法。

use std::sync::Arc;

use crate::gateway::InMemoryGateway;
use crate::services::ServiceContext;
use crate::traits::Gateway;
use crate::types::{Credentials, Project, Repository, RepositoryId};

pub fn sample_project(key: &str) -> Project {
    Project {
        key: key.to_string(),
        name: format!("{key} project"),
        avatar_url: Some(format!("https://img.example.com/{key}.png")),
    }
}

pub fn sample_repository(id: RepositoryId, key: Option<&str>) -> Repository {
    Repository {
        id,
        name: format!("repo-{id}"),
        path: format!("/src/repo-{id}"),
        jira_key: key.map(str::to_string),
        jira_name: key.map(|k| format!("{k} project")),
        jira_avatar: None,
    }
}

/// 为已有网关创建服务上下文
pub fn context_for(gateway: &Arc<InMemoryGateway>) -> Arc<ServiceContext> {
    let gateway: Arc<dyn Gateway> = gateway.clone();
    Arc::new(ServiceContext::new(gateway))
}

/// 已登录、带两个项目的空网关
pub fn make_gateway() -> (Arc<InMemoryGateway>, Arc<ServiceContext>) {
    let gateway = Arc::new(
        InMemoryGateway::new()
            .with_projects(vec![sample_project("CORE"), sample_project("WEB")])
            .with_credentials(Credentials::new("https://jira.example.com", "alice", "secret")),
    );
    let ctx = context_for(&gateway);
    (gateway, ctx)
}
