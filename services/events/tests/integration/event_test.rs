use events_service::error::EventsServiceError;
use events_service::usecase::city::FindAllCitiesUseCase;
use events_service::usecase::event::FindAllEventsUseCase;

use crate::helpers::{MockCityRepo, MockEventRepo, test_city, test_event};

// ── FindAllEventsUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_empty_list_for_empty_store() {
    let usecase = FindAllEventsUseCase {
        repo: MockEventRepo::empty(),
    };
    let events = usecase.execute().await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn should_project_every_event_in_repository_order() {
    let usecase = FindAllEventsUseCase {
        repo: MockEventRepo::new(vec![
            test_event(2, "Semana Geek", 9),
            test_event(1, "Feira do Software", 1),
        ]),
    };
    let events = usecase.execute().await.unwrap();

    let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(events[0].name, "Semana Geek");
    assert_eq!(events[0].city_id, 9);
    assert_eq!(events[1].url, "https://events.example.com/1");
}

#[tokio::test]
async fn should_propagate_repository_failure_as_internal() {
    let usecase = FindAllEventsUseCase {
        repo: MockEventRepo::failing(),
    };
    let result = usecase.execute().await;
    assert!(
        matches!(result, Err(EventsServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}

// ── FindAllCitiesUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_keep_repository_city_order() {
    let usecase = FindAllCitiesUseCase {
        repo: MockCityRepo {
            cities: vec![
                test_city(2, "Brasília"),
                test_city(3, "Manaus"),
                test_city(1, "São Paulo"),
            ],
        },
    };
    let names: Vec<String> = usecase
        .execute()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Brasília", "Manaus", "São Paulo"]);
}
