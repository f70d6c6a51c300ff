//! Client for the WMATA (Washington Metropolitan Area Transit Authority)
//! REST API.
//!
//! Thin plumbing over `https://api.wmata.com`: each method builds a URL,
//! attaches the API key, performs one GET, and returns the decoded JSON
//! or XML body. No caching, batching, or retries.
//!
//! ```no_run
//! use wmata::{Client, ClientConfig};
//!
//! # async fn run() -> Result<(), wmata::Error> {
//! let client = Client::new(ClientConfig::new("your-api-key"))?;
//! let lines = client.rail().lines().await?;
//! # Ok(())
//! # }
//! ```

pub mod body;
pub mod bus;
pub mod bus_predictions;
pub mod client;
pub mod error;
pub mod incidents;
pub mod rail;
pub mod rail_predictions;
pub mod request;

pub use body::{Body, Element, Mode};
pub use client::{Client, ClientConfig, KeyPlacement};
pub use error::Error;
pub use request::{ParamValue, Params};
