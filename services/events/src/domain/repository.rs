#![allow(async_fn_in_trait)]

use crate::domain::types::{City, Event, Role, User};
use crate::error::EventsServiceError;

/// Read access to events.
pub trait EventRepository: Send + Sync {
    /// All events in primary-key order.
    async fn find_all(&self) -> Result<Vec<Event>, EventsServiceError>;
}

/// Read access to cities.
pub trait CityRepository: Send + Sync {
    /// All cities sorted by name.
    async fn find_all_sorted_by_name(&self) -> Result<Vec<City>, EventsServiceError>;
}

/// Account lookup. Returned users carry no roles; see [`UserRoleRepository`].
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, EventsServiceError>;
}

/// The `tb_user_role` join table.
pub trait UserRoleRepository: Send + Sync {
    async fn find_roles_by_user_id(&self, user_id: i64) -> Result<Vec<Role>, EventsServiceError>;
}
