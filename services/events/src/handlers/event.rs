use axum::{Json, extract::State};

use crate::error::EventsServiceError;
use crate::state::AppState;
use crate::usecase::event::{EventDto, FindAllEventsUseCase};

// ── GET /events ──────────────────────────────────────────────────────────────

pub async fn find_all_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventDto>>, EventsServiceError> {
    let usecase = FindAllEventsUseCase {
        repo: state.event_repo(),
    };
    Ok(Json(usecase.execute().await?))
}
