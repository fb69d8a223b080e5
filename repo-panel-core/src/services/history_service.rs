//! 仓库提交历史服务

use std::sync::Arc;

use crate::services::{log_failure, RepositoryService, ServiceContext};
use crate::types::{RepositoryHistory, RepositoryId};

/// 提交历史服务
pub struct HistoryService {
    ctx: Arc<ServiceContext>,
}

impl HistoryService {
    /// 创建历史服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 加载详情页数据
    ///
    /// 标题、提交日志与合并候选三路并发获取，互不阻塞；
    /// 任一失败只影响自身对应的部分。
    pub async fn load(&self, id: RepositoryId) -> RepositoryHistory {
        let repositories = RepositoryService::new(Arc::clone(&self.ctx));
        let gateway = &self.ctx.gateway;

        let (title, commits, merge_candidates) = futures::join!(
            repositories.title_for(id),
            gateway.list_commits(id),
            gateway.list_merge_candidates(id),
        );

        if let Err(ref e) = commits {
            log_failure(&format!("Failed to list commits of repository {id}"), e);
        }
        if let Err(ref e) = merge_candidates {
            log_failure(
                &format!("Failed to list merge candidates of repository {id}"),
                e,
            );
        }

        RepositoryHistory {
            title,
            commits,
            merge_candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::gateway::InMemoryGateway;
    use crate::test_utils::context_for;
    use crate::traits::Operation;

    #[tokio::test]
    async fn rows_keep_backend_order() {
        let gateway = Arc::new(InMemoryGateway::demo());
        let service = HistoryService::new(context_for(&gateway));

        let history = service.load(1).await;
        assert_eq!(history.title.as_deref(), Some("Core Platform"));
        let hashes: Vec<_> = history
            .commits
            .unwrap()
            .into_iter()
            .map(|c| c.hash)
            .collect();
        assert_eq!(hashes, ["9f2c1e7a4b", "4d8e0b1c77", "1a0f9c3e52"]);
        assert_eq!(history.merge_candidates.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn one_failing_table_does_not_block_the_other() {
        let gateway = Arc::new(InMemoryGateway::demo());
        gateway
            .fail(
                Operation::ListMergeCandidates,
                CoreError::Backend {
                    operation: "GetMergeCandidates".into(),
                    status: 500,
                    message: "git exploded".into(),
                },
            )
            .await;
        let service = HistoryService::new(context_for(&gateway));

        let history = service.load(1).await;
        assert_eq!(history.commits.unwrap().len(), 3);
        assert!(history.merge_candidates.is_err());
    }

    #[tokio::test]
    async fn missing_repository_keeps_default_title() {
        let gateway = Arc::new(InMemoryGateway::demo());
        let service = HistoryService::new(context_for(&gateway));

        let history = service.load(404).await;
        assert_eq!(history.title, None);
        assert!(history.commits.is_err());
    }
}
