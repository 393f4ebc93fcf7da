use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use events_schema::{cities, events, roles, user_roles, users};

use crate::domain::repository::{
    CityRepository, EventRepository, UserRepository, UserRoleRepository,
};
use crate::domain::types::{City, Event, Role, User};
use crate::error::EventsServiceError;

// ── Event repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEventRepository {
    pub db: Arc<DatabaseConnection>,
}

impl EventRepository for DbEventRepository {
    async fn find_all(&self) -> Result<Vec<Event>, EventsServiceError> {
        let models = events::Entity::find()
            .order_by_asc(events::Column::Id)
            .all(self.db.as_ref())
            .await
            .context("find all events")?;
        Ok(models.into_iter().map(event_from_model).collect())
    }
}

fn event_from_model(model: events::Model) -> Event {
    Event {
        id: model.id,
        name: model.name,
        date: model.date,
        url: model.url,
        city_id: model.city_id,
    }
}

// ── City repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCityRepository {
    pub db: Arc<DatabaseConnection>,
}

impl CityRepository for DbCityRepository {
    async fn find_all_sorted_by_name(&self) -> Result<Vec<City>, EventsServiceError> {
        let models = cities::Entity::find()
            .order_by_asc(cities::Column::Name)
            .all(self.db.as_ref())
            .await
            .context("find all cities")?;
        Ok(models
            .into_iter()
            .map(|model| City {
                id: model.id,
                name: model.name,
            })
            .collect())
    }
}

// ── User repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, EventsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .context("find user by email")?;
        Ok(model.map(|m| User::new(m.id, m.email, m.password)))
    }
}

// ── User/role join table ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRoleRepository {
    pub db: Arc<DatabaseConnection>,
}

impl UserRoleRepository for DbUserRoleRepository {
    async fn find_roles_by_user_id(&self, user_id: i64) -> Result<Vec<Role>, EventsServiceError> {
        let models = roles::Entity::find()
            .join(JoinType::InnerJoin, roles::Relation::UserRoles.def())
            .filter(user_roles::Column::UserId.eq(user_id))
            .order_by_asc(roles::Column::Id)
            .all(self.db.as_ref())
            .await
            .context("find roles by user id")?;
        Ok(models
            .into_iter()
            .map(|model| Role {
                id: model.id,
                authority: model.authority,
            })
            .collect())
    }
}
