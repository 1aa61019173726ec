use std::sync::Arc;

use crate::application::ports::task_repository::TaskRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::repositories::task_repository_sqlx::SqlxTaskRepository;
use crate::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    task_repo: Arc<dyn TaskRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AppServices {
    pub fn new(task_repo: Arc<dyn TaskRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            task_repo,
            user_repo,
        }
    }

    pub fn sqlx(pool: DbPool) -> Self {
        Self::new(
            Arc::new(SqlxTaskRepository::new(pool.clone())),
            Arc::new(SqlxUserRepository::new(pool)),
        )
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn task_repo(&self) -> Arc<dyn TaskRepository> {
        self.services.task_repo.clone()
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }
}
