use std::collections::BTreeSet;

use events_security::user_details::UserDetails;
use events_service::domain::types::User;
use events_service::error::EventsServiceError;
use events_service::usecase::user_details::LoadUserByUsernameUseCase;

use crate::helpers::{MockUserRepo, MockUserRoleRepo, role_admin, role_client};

#[tokio::test]
async fn should_fail_with_username_not_found_for_unknown_email() {
    let user_roles = MockUserRoleRepo::empty();
    let queried = user_roles.queried_handle();
    let usecase = LoadUserByUsernameUseCase {
        users: MockUserRepo::empty(),
        user_roles,
    };

    let result = usecase.execute("nobody@example.com").await;

    assert!(
        matches!(result, Err(EventsServiceError::UsernameNotFound)),
        "expected UsernameNotFound, got {result:?}"
    );
    assert!(queried.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_attach_roles_from_join_table() {
    let usecase = LoadUserByUsernameUseCase {
        users: MockUserRepo::new(vec![
            User::new(1, "bob@gmail.com", "hash-bob"),
            User::new(2, "ana@gmail.com", "hash-ana"),
        ]),
        user_roles: MockUserRoleRepo::new(vec![
            (1, role_client()),
            (2, role_client()),
            (2, role_admin()),
        ]),
    };

    let user = usecase.execute("ana@gmail.com").await.unwrap();

    assert_eq!(user.id, 2);
    assert_eq!(user.username(), "ana@gmail.com");
    assert_eq!(user.password(), "hash-ana");
    let authorities: BTreeSet<String> =
        user.authorities().into_iter().map(|a| a.to_string()).collect();
    assert_eq!(
        authorities,
        BTreeSet::from(["ROLE_ADMIN".to_string(), "ROLE_CLIENT".to_string()])
    );
    assert_eq!(user.authorities().len(), 2);
}

#[tokio::test]
async fn should_load_user_without_roles() {
    let usecase = LoadUserByUsernameUseCase {
        users: MockUserRepo::new(vec![User::new(1, "a@a.com", "x")]),
        user_roles: MockUserRoleRepo::empty(),
    };

    let user = usecase.execute("a@a.com").await.unwrap();

    assert!(user.authorities().is_empty());
    assert!(user.is_enabled());
}

#[tokio::test]
async fn should_query_join_table_with_loaded_user_id() {
    let user_roles = MockUserRoleRepo::new(vec![(7, role_admin())]);
    let queried = user_roles.queried_handle();
    let usecase = LoadUserByUsernameUseCase {
        users: MockUserRepo::new(vec![User::new(7, "root@example.com", "x")]),
        user_roles,
    };

    usecase.execute("root@example.com").await.unwrap();

    assert_eq!(*queried.lock().unwrap(), vec![7]);
}
