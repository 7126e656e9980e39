//! Bosta delivery API integration
//!
//! Client library for the [Bosta](https://bosta.co) logistics HTTP API:
//! deliveries, city/zone/district lookups, pricing calculators, and
//! authentication.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`ApiClient`] is the dispatch
//! contract: one validated request in, the unwrapped `{success, data,
//! message}` payload out. [`BostaClient`] implements it over reqwest, owns
//! the credentials, and injects itself as the transport of each resource
//! ([`Deliveries`], [`Cities`], [`Pricing`]). Every operation validates its
//! input before anything touches the network, and every failure surfaces as
//! a [`BostaError`] after being logged.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_bosta::{BostaClient, BostaConfig, SearchQuery};
//!
//! let client = BostaClient::new(BostaConfig::with_api_key("your-api-key"))?;
//!
//! let delivery = client.deliveries().get("7234258").await?;
//! println!("state: {:?}", delivery.state);
//!
//! let results = client.deliveries().search(SearchQuery {
//!     mobile_phones: Some(vec!["01234567890".into()]),
//!     ..SearchQuery::default()
//! }).await?;
//! ```

mod cities;
mod client;
mod config;
mod deliveries;
mod envelope;
mod error;
mod pricing;
mod validate;

pub use cities::{Cities, City, District, Zone};
pub use client::{ApiClient, ApiRequest, BostaClient, Payload};
pub use config::{BostaConfig, Credentials};
pub use deliveries::{
    Address, CityRef, CreateDelivery, CreatedDelivery, Deliveries, Delivery, DeliveryStateInfo,
    MAX_COD, PackageSize, PackageSpecs, PackageType, Receiver, ReceiverUpdate, ReturnAddress,
    SearchDeliveryType, SearchQuery, SearchResults, UpdateAddress, UpdateDelivery,
};
pub use envelope::ApiEnvelope;
pub use error::{BostaError, status_summary};
pub use pricing::{
    PriceQuery, PriceTier, Pricing, ServiceType, ShipmentServiceType, ShipmentSize,
    ShippingPriceQuery,
};
