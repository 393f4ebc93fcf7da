use serde::Serialize;

use crate::domain::repository::CityRepository;
use crate::domain::types::City;
use crate::error::EventsServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityDto {
    pub id: i64,
    pub name: String,
}

impl From<City> for CityDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
        }
    }
}

pub struct FindAllCitiesUseCase<R: CityRepository> {
    pub repo: R,
}

impl<R: CityRepository> FindAllCitiesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<CityDto>, EventsServiceError> {
        let cities = self.repo.find_all_sorted_by_name().await?;
        Ok(cities.into_iter().map(CityDto::from).collect())
    }
}
