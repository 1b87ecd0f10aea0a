//! Core library for the `weather-lookup` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com provider and the mapping of its payload
//! - Query validation and execution
//! - The view state behind the result card
//!
//! It is used by `weather-lookup-cli`, but can also drive other front ends.

pub mod config;
pub mod error;
pub mod executor;
pub mod mapper;
pub mod model;
pub mod provider;
pub mod view;

pub use config::Config;
pub use error::QueryError;
pub use executor::QueryExecutor;
pub use model::{QueryInput, WeatherResult};
pub use provider::{WeatherProvider, provider_from_config};
pub use view::{ErrorState, Phase, StaleResultPolicy, WeatherView};
