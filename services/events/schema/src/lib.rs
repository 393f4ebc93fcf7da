//! sea-orm entities for the events service tables.

pub mod cities;
pub mod events;
pub mod roles;
pub mod user_roles;
pub mod users;
