//! 类型定义模块

mod commit;
mod project;
mod repository;
mod session;

pub use commit::{Commit, RepositoryHistory};
pub use project::{AvatarLookup, Project};
pub use repository::{NewRepository, Repository, RepositoryId};
pub use session::{Credentials, Profile, SaveCredentialsOutcome, SessionAction, SessionStatus};
