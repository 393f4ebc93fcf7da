use axum::{Json, extract::State};

use crate::error::EventsServiceError;
use crate::state::AppState;
use crate::usecase::city::{CityDto, FindAllCitiesUseCase};

// ── GET /cities ──────────────────────────────────────────────────────────────

pub async fn find_all_cities(
    State(state): State<AppState>,
) -> Result<Json<Vec<CityDto>>, EventsServiceError> {
    let usecase = FindAllCitiesUseCase {
        repo: state.city_repo(),
    };
    Ok(Json(usecase.execute().await?))
}
