use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::repository::EventRepository;
use crate::domain::types::Event;
use crate::error::EventsServiceError;

/// Flat transport projection of an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub url: String,
    pub city_id: i64,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            date: event.date,
            url: event.url,
            city_id: event.city_id,
        }
    }
}

// ── FindAllEvents ────────────────────────────────────────────────────────────

pub struct FindAllEventsUseCase<R: EventRepository> {
    pub repo: R,
}

impl<R: EventRepository> FindAllEventsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<EventDto>, EventsServiceError> {
        let events = self.repo.find_all().await?;
        Ok(events.into_iter().map(EventDto::from).collect())
    }
}
