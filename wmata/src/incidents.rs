//! Rail, bus, and elevator incident reports (`Incidents.svc`).
//!
//! Incidents endpoints keep their bare names even in JSON mode.

use crate::body::Body;
use crate::client::Client;
use crate::error::Error;
use crate::request::{Params, Service, UrlShape};

/// Facade for the incidents service.
#[derive(Debug, Clone, Copy)]
pub struct Incidents<'a> {
    client: &'a Client,
}

impl<'a> Incidents<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    async fn fetch(&self, endpoint: &str, params: Params) -> Result<Body, Error> {
        self.client
            .fetch(Service::Incidents, endpoint, UrlShape::Query, params)
            .await
    }

    /// Reported bus incidents and delays, optionally for a single route.
    pub async fn bus_incidents(&self, route: Option<&str>) -> Result<Body, Error> {
        let params = Params::new().opt("Route", route);
        self.fetch("BusIncidents", params)
            .await?
            .take_field("BusIncidents")
    }

    /// Reported elevator and escalator outages, optionally at one station.
    pub async fn elevator_incidents(&self, station_code: Option<&str>) -> Result<Body, Error> {
        let params = Params::new().opt("StationCode", station_code);
        self.fetch("ElevatorIncidents", params)
            .await?
            .take_field("ElevatorIncidents")
    }

    /// All reported rail incidents.
    pub async fn rail_incidents(&self) -> Result<Body, Error> {
        self.fetch("Incidents", Params::new()).await
    }
}
