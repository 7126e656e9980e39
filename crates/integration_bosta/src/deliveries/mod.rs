//! Delivery operations
//!
//! Every operation follows the same pipeline: validate the input, build the
//! request, dispatch it through the injected [`ApiClient`], and decode the
//! unwrapped payload. Validation failures never reach the network.

mod models;
mod search;

use std::sync::Arc;

use domain::{TrackingNumber, is_updatable_state};
use serde_json::Value;
use tracing::instrument;

pub use models::{
    Address, CityRef, CreateDelivery, CreatedDelivery, Delivery, DeliveryStateInfo, MAX_COD,
    PackageSize, PackageSpecs, PackageType, Receiver, ReceiverUpdate, ReturnAddress,
    UpdateAddress, UpdateDelivery,
};
pub use search::{SearchDeliveryType, SearchQuery, SearchResults};

use crate::client::{ApiClient, ApiRequest, encode_segment};
use crate::envelope::decode;
use crate::error::BostaError;
use crate::validate::check;

/// Delivery resource operations
#[derive(Clone)]
pub struct Deliveries {
    api: Arc<dyn ApiClient>,
}

impl std::fmt::Debug for Deliveries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deliveries").finish_non_exhaustive()
    }
}

impl Deliveries {
    /// Create the resource over an injected transport
    #[must_use]
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    fn delivery_path(tracking_number: &TrackingNumber) -> String {
        format!(
            "deliveries/business/{}",
            encode_segment(tracking_number.as_str())
        )
    }

    /// Create a new delivery
    #[instrument(skip(self, delivery))]
    pub async fn create(&self, delivery: CreateDelivery) -> Result<CreatedDelivery, BostaError> {
        check(&delivery)?;
        let body = serde_json::to_value(&delivery)
            .map_err(|e| BostaError::Validation(format!("Invalid delivery data: {e}")))?;

        let data = self.api.send(ApiRequest::post("deliveries", body)).await?;
        decode("created delivery", data)
    }

    /// Fetch a delivery by its tracking number
    #[instrument(skip(self))]
    pub async fn get(&self, tracking_number: &str) -> Result<Delivery, BostaError> {
        let tn = TrackingNumber::new(tracking_number)?;

        let data = self
            .api
            .send(ApiRequest::get(Self::delivery_path(&tn)))
            .await?;
        decode("delivery", data)
    }

    /// Update a delivery
    ///
    /// The delivery is fetched first; when its current state code is outside
    /// the updatable set the call fails with a state conflict and no update
    /// request is issued.
    #[instrument(skip(self, update))]
    pub async fn update(
        &self,
        tracking_number: &str,
        update: UpdateDelivery,
    ) -> Result<Delivery, BostaError> {
        let tn = TrackingNumber::new(tracking_number)?;
        check(&update)?;

        let current = self.get(tn.as_str()).await?;
        let state_code = current.state.as_ref().and_then(|s| s.code);
        if !state_code.is_some_and(is_updatable_state) {
            return Err(BostaError::StateConflict {
                tracking_number: tn.to_string(),
                state: state_code.map_or_else(|| "unknown".to_string(), |c| c.to_string()),
            });
        }

        let body = serde_json::to_value(&update)
            .map_err(|e| BostaError::Validation(format!("Invalid delivery data: {e}")))?;
        let data = self
            .api
            .send(ApiRequest::put(Self::delivery_path(&tn), body))
            .await?;
        decode("updated delivery", data)
    }

    /// Terminate a delivery
    #[instrument(skip(self))]
    pub async fn terminate(&self, tracking_number: &str) -> Result<Value, BostaError> {
        let tn = TrackingNumber::new(tracking_number)?;

        let path = format!(
            "deliveries/business/{}/terminate",
            encode_segment(tn.as_str())
        );
        self.api.send(ApiRequest::delete(path)).await
    }

    /// Search deliveries with the provider's filterable fields
    #[instrument(skip(self, query))]
    pub async fn search(&self, query: SearchQuery) -> Result<SearchResults, BostaError> {
        if query.is_empty() {
            return Err(BostaError::Validation(
                "No valid search parameters provided".to_string(),
            ));
        }

        let data = self
            .api
            .send(ApiRequest::get("deliveries/search").with_query(query.to_query_pairs()))
            .await?;
        decode("search results", data)
    }

    /// Total-deliveries analytics
    #[instrument(skip(self))]
    pub async fn analytics(&self) -> Result<Value, BostaError> {
        self.api
            .send(ApiRequest::get("analytics/total-deliveries"))
            .await
    }
}
