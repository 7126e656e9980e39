//! City, zone, and district lookups
//!
//! Country identifiers are restricted to the provider's two supported
//! countries and checked before any request is built.

use std::sync::Arc;

use domain::CountryId;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::client::{ApiClient, ApiRequest, encode_segment};
use crate::envelope::decode;
use crate::error::BostaError;
use crate::validate::require_id;

/// A city in the provider's coverage area
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct City {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A delivery zone within a city
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Zone {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A district within a city
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct District {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// City resource operations
#[derive(Clone)]
pub struct Cities {
    api: Arc<dyn ApiClient>,
}

impl std::fmt::Debug for Cities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cities").finish_non_exhaustive()
    }
}

impl Cities {
    /// Create the resource over an injected transport
    #[must_use]
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    fn country_query(country: CountryId) -> Vec<(String, String)> {
        vec![("countryId".to_string(), country.as_str().to_string())]
    }

    /// List the cities of a supported country
    #[instrument(skip(self))]
    pub async fn list(&self, country_id: &str) -> Result<Vec<City>, BostaError> {
        let country = CountryId::parse(country_id)?;

        let data = self
            .api
            .send(ApiRequest::get("cities").with_query(Self::country_query(country)))
            .await?;
        decode("cities", data)
    }

    /// Fetch one city by id
    #[instrument(skip(self))]
    pub async fn get(&self, city_id: &str) -> Result<City, BostaError> {
        let id = require_id("City ID", city_id)?;

        let data = self
            .api
            .send(ApiRequest::get(format!("cities/{}", encode_segment(&id))))
            .await?;
        decode("city", data)
    }

    /// Zones of a city
    #[instrument(skip(self))]
    pub async fn zones(&self, city_id: &str) -> Result<Vec<Zone>, BostaError> {
        let id = require_id("City ID", city_id)?;

        let data = self
            .api
            .send(ApiRequest::get(format!(
                "cities/{}/zones",
                encode_segment(&id)
            )))
            .await?;
        decode("zones", data)
    }

    /// Districts of a city
    #[instrument(skip(self))]
    pub async fn districts(&self, city_id: &str) -> Result<Vec<District>, BostaError> {
        let id = require_id("City ID", city_id)?;

        let data = self
            .api
            .send(ApiRequest::get(format!(
                "cities/{}/districts",
                encode_segment(&id)
            )))
            .await?;
        decode("districts", data)
    }

    /// All districts of a supported country
    ///
    /// The provider serves this through the city listing; district detail
    /// hangs off each returned city.
    #[instrument(skip(self))]
    pub async fn all_districts(&self, country_id: &str) -> Result<Vec<City>, BostaError> {
        let country = CountryId::parse(country_id)?;

        let data = self
            .api
            .send(ApiRequest::get("cities").with_query(Self::country_query(country)))
            .await?;
        decode("districts", data)
    }

    /// Resolve the district covering a coordinate pair
    #[instrument(skip(self))]
    pub async fn district_from_coordinates(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<District, BostaError> {
        if !lat.is_finite() || !lng.is_finite() || lat == 0.0 || lng == 0.0 {
            return Err(BostaError::Validation(
                "Latitude and Longitude are required".to_string(),
            ));
        }

        let data = self
            .api
            .send(ApiRequest::get("cities/districts").with_query(vec![
                ("lat".to_string(), lat.to_string()),
                ("lng".to_string(), lng.to_string()),
            ]))
            .await?;
        decode("district", data)
    }
}

#[cfg(test)]
mod tests {
    use domain::value_objects::EGYPT_COUNTRY_ID;
    use serde_json::json;

    use super::*;
    use crate::client::{MockApiClient, Payload};

    fn cities_with(mock: MockApiClient) -> Cities {
        Cities::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn unrecognized_country_makes_no_call() {
        let mut mock = MockApiClient::new();
        mock.expect_send().times(0);

        let err = cities_with(mock).list("not-a-country").await.unwrap_err();
        assert!(matches!(err, BostaError::Validation(_)));
        assert!(err.to_string().contains("Egypt"));
    }

    #[tokio::test]
    async fn list_forwards_country_id_as_query() {
        let mut mock = MockApiClient::new();
        mock.expect_send()
            .withf(|request| {
                request.method == reqwest::Method::GET
                    && request.path == "cities"
                    && request.payload
                        == Some(Payload::Query(vec![(
                            "countryId".to_string(),
                            EGYPT_COUNTRY_ID.to_string(),
                        )]))
            })
            .times(1)
            .returning(|_| Ok(json!([{"_id": "c-1", "name": "Cairo"}])));

        let cities = cities_with(mock).list(EGYPT_COUNTRY_ID).await.unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name.as_deref(), Some("Cairo"));
    }

    #[tokio::test]
    async fn get_requires_city_id() {
        let mut mock = MockApiClient::new();
        mock.expect_send().times(0);

        let err = cities_with(mock).get("").await.unwrap_err();
        assert!(err.to_string().contains("City ID is required"));
    }

    #[tokio::test]
    async fn get_builds_city_path() {
        let mut mock = MockApiClient::new();
        mock.expect_send()
            .withf(|request| request.path == "cities/c-1")
            .times(1)
            .returning(|_| Ok(json!({"_id": "c-1", "name": "Cairo"})));

        let city = cities_with(mock).get("c-1").await.unwrap();
        assert_eq!(city.id.as_deref(), Some("c-1"));
    }

    #[tokio::test]
    async fn zones_and_districts_paths() {
        let mut mock = MockApiClient::new();
        mock.expect_send()
            .withf(|request| request.path == "cities/c-1/zones")
            .times(1)
            .returning(|_| Ok(json!([{"_id": "z-1", "name": "Zamalek"}])));
        mock.expect_send()
            .withf(|request| request.path == "cities/c-1/districts")
            .times(1)
            .returning(|_| Ok(json!([{"_id": "d-1", "name": "Dokki"}])));

        let cities = cities_with(mock);
        let zones = cities.zones("c-1").await.unwrap();
        assert_eq!(zones[0].name.as_deref(), Some("Zamalek"));
        let districts = cities.districts("c-1").await.unwrap();
        assert_eq!(districts[0].id.as_deref(), Some("d-1"));
    }

    #[tokio::test]
    async fn city_id_is_percent_encoded_in_path() {
        let mut mock = MockApiClient::new();
        mock.expect_send()
            .withf(|request| request.path == "cities/c%2F1")
            .times(1)
            .returning(|_| Ok(json!({"_id": "c/1"})));

        cities_with(mock).get("c/1").await.unwrap();
    }

    #[tokio::test]
    async fn all_districts_reuses_the_city_listing() {
        let mut mock = MockApiClient::new();
        mock.expect_send()
            .withf(|request| request.path == "cities")
            .times(1)
            .returning(|_| Ok(json!([{"_id": "c-1"}])));

        let result = cities_with(mock).all_districts(EGYPT_COUNTRY_ID).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn zero_coordinates_make_no_call() {
        let mut mock = MockApiClient::new();
        mock.expect_send().times(0);

        let err = cities_with(mock)
            .district_from_coordinates(0.0, 31.23)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Latitude and Longitude"));
    }

    #[tokio::test]
    async fn coordinates_are_sent_as_lat_lng_query() {
        let mut mock = MockApiClient::new();
        mock.expect_send()
            .withf(|request| {
                request.path == "cities/districts"
                    && request.payload
                        == Some(Payload::Query(vec![
                            ("lat".to_string(), "30.04".to_string()),
                            ("lng".to_string(), "31.23".to_string()),
                        ]))
            })
            .times(1)
            .returning(|_| Ok(json!({"_id": "d-9", "name": "Maadi"})));

        let district = cities_with(mock)
            .district_from_coordinates(30.04, 31.23)
            .await
            .unwrap();
        assert_eq!(district.name.as_deref(), Some("Maadi"));
    }
}
