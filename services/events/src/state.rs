use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCityRepository, DbEventRepository, DbUserRepository, DbUserRoleRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    pub fn event_repo(&self) -> DbEventRepository {
        DbEventRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn city_repo(&self) -> DbCityRepository {
        DbCityRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn user_role_repo(&self) -> DbUserRoleRepository {
        DbUserRoleRepository {
            db: Arc::clone(&self.db),
        }
    }
}
