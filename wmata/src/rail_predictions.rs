//! Real-time train arrival predictions (`StationPrediction.svc`).
//!
//! `GetPrediction` is the one endpoint with a non-standard URL shape:
//! the station codes are appended to the path instead of being sent as a
//! query string. Its name also never takes the JSON `j` prefix.

use crate::body::Body;
use crate::client::Client;
use crate::error::Error;
use crate::request::{Params, Service, UrlShape};

/// Facade for the rail prediction service.
#[derive(Debug, Clone, Copy)]
pub struct RailPredictions<'a> {
    client: &'a Client,
}

impl<'a> RailPredictions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Next train arrivals for one or more stations.
    ///
    /// Codes are joined and appended onto the request path, e.g.
    /// `GetPrediction/B03, A01`.
    pub async fn next_trains(&self, station_codes: &[&str]) -> Result<Body, Error> {
        let params = Params::new().set("StationCodes", station_codes);
        self.client
            .fetch(
                Service::StationPrediction,
                "GetPrediction",
                UrlShape::PathAppended,
                params,
            )
            .await?
            .take_field("Trains")
    }
}
