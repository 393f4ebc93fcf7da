use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use events_schema::{cities, events, roles, users};
use events_service::domain::repository::{
    CityRepository, EventRepository, UserRepository, UserRoleRepository,
};
use events_service::infra::db::{
    DbCityRepository, DbEventRepository, DbUserRepository, DbUserRoleRepository,
};

/// Drain the statements the mock connection recorded, with debug escapes stripped.
fn query_log(db: Arc<DatabaseConnection>) -> String {
    let Ok(db) = Arc::try_unwrap(db) else {
        panic!("connection still shared");
    };
    format!("{:?}", db.into_transaction_log()).replace('\\', "")
}

#[tokio::test]
async fn should_map_user_row_without_roles() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![users::Model {
            id: 1,
            email: "bob@gmail.com".to_owned(),
            password: "hash".to_owned(),
        }]])
        .into_connection();
    let repo = DbUserRepository { db: Arc::new(db) };

    let user = repo.find_by_email("bob@gmail.com").await.unwrap().unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.email, "bob@gmail.com");
    assert!(user.roles.is_empty());
}

#[tokio::test]
async fn should_return_none_for_unknown_email() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new()])
        .into_connection();
    let repo = DbUserRepository { db: Arc::new(db) };

    assert!(repo.find_by_email("nobody@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn should_read_roles_through_join_table() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            roles::Model {
                id: 1,
                authority: "ROLE_CLIENT".to_owned(),
            },
            roles::Model {
                id: 2,
                authority: "ROLE_ADMIN".to_owned(),
            },
        ]])
        .into_connection();
    let repo = DbUserRoleRepository { db: Arc::new(db) };

    let found = repo.find_roles_by_user_id(2).await.unwrap();
    let authorities: Vec<&str> = found.iter().map(|r| r.authority.as_str()).collect();
    assert_eq!(authorities, vec!["ROLE_CLIENT", "ROLE_ADMIN"]);

    let log = query_log(repo.db);
    assert!(log.contains("INNER JOIN"), "unexpected query log: {log}");
    assert!(log.contains("tb_user_role"), "unexpected query log: {log}");
}

#[tokio::test]
async fn should_order_cities_by_name_in_query() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![cities::Model {
            id: 4,
            name: "Salvador".to_owned(),
        }]])
        .into_connection();
    let repo = DbCityRepository { db: Arc::new(db) };

    let found = repo.find_all_sorted_by_name().await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Salvador");

    let log = query_log(repo.db);
    assert!(
        log.contains(r#"ORDER BY "tb_city"."name" ASC"#),
        "unexpected query log: {log}"
    );
}

#[tokio::test]
async fn should_order_events_by_id_in_query() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![events::Model {
            id: 1,
            name: "Feira do Software".to_owned(),
            date: NaiveDate::from_ymd_opt(2021, 5, 16).unwrap(),
            url: "https://www.feiradosoftware.com".to_owned(),
            city_id: 1,
        }]])
        .into_connection();
    let repo = DbEventRepository { db: Arc::new(db) };

    let found = repo.find_all().await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].city_id, 1);

    let log = query_log(repo.db);
    assert!(
        log.contains(r#"ORDER BY "tb_event"."id" ASC"#),
        "unexpected query log: {log}"
    );
}
