use sea_orm_migration::prelude::*;

mod m20261001_000001_create_users;
mod m20261001_000002_create_roles;
mod m20261001_000003_create_user_roles;
mod m20261001_000004_create_cities;
mod m20261001_000005_create_events;
mod m20261001_000006_seed_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_users::Migration),
            Box::new(m20261001_000002_create_roles::Migration),
            Box::new(m20261001_000003_create_user_roles::Migration),
            Box::new(m20261001_000004_create_cities::Migration),
            Box::new(m20261001_000005_create_events::Migration),
            Box::new(m20261001_000006_seed_data::Migration),
        ]
    }
}
