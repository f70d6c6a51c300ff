//! Real-time bus arrival predictions (`BusPrediction.svc`).

use crate::body::Body;
use crate::client::Client;
use crate::error::Error;
use crate::request::{Params, Service, UrlShape};

/// Facade for the bus prediction service.
#[derive(Debug, Clone, Copy)]
pub struct BusPredictions<'a> {
    client: &'a Client,
}

impl<'a> BusPredictions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Next bus arrivals at a stop.
    ///
    /// `stop_id` is the 7-digit regional stop ID.
    pub async fn next_buses(&self, stop_id: &str) -> Result<Body, Error> {
        let params = Params::new().set("StopID", stop_id);
        self.client
            .fetch(
                Service::BusPrediction,
                "Predictions",
                UrlShape::Query,
                params,
            )
            .await?
            .take_field("Predictions")
    }
}
