//! Bus route and stop information (`Bus.svc`).

use chrono::NaiveDate;

use crate::body::Body;
use crate::client::Client;
use crate::error::Error;
use crate::request::{Params, Service, UrlShape};

/// Facade for the bus route information service.
#[derive(Debug, Clone, Copy)]
pub struct Bus<'a> {
    client: &'a Client,
}

impl<'a> Bus<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    async fn fetch(&self, endpoint: &str, params: Params) -> Result<Body, Error> {
        self.client
            .fetch(Service::Bus, endpoint, UrlShape::Query, params)
            .await
    }

    /// Bus positions for the given route, with an optional search radius
    /// around a latitude/longitude. With no arguments, positions for all
    /// active buses are returned.
    ///
    /// # Arguments
    ///
    /// * `route_id` - Route to filter by (e.g. `"10A"`)
    /// * `lat`, `lon` - Center of the search area
    /// * `radius` - Search radius in meters around the center
    pub async fn positions(
        &self,
        route_id: Option<&str>,
        lat: Option<f64>,
        lon: Option<f64>,
        radius: Option<u32>,
    ) -> Result<Body, Error> {
        let params = Params::new()
            .opt("RouteID", route_id)
            .opt("Lat", lat)
            .opt("Lon", lon)
            .opt("Radius", radius);
        self.fetch("BusPositions", params)
            .await?
            .take_field("BusPositions")
    }

    /// Ordered latitude/longitude points along a route variant, with the
    /// list of stops served, for the given date (today if omitted).
    pub async fn path_details(
        &self,
        route_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Body, Error> {
        let params = Params::new().set("RouteID", route_id).opt("Date", date);
        self.fetch("RouteDetails", params).await
    }

    /// All bus routes and their variants.
    pub async fn routes(&self) -> Result<Body, Error> {
        self.fetch("Routes", Params::new()).await
    }

    /// Scheduled trips for a route on the given date.
    pub async fn route_schedule(
        &self,
        route_id: &str,
        date: Option<NaiveDate>,
        including_variations: Option<bool>,
    ) -> Result<Body, Error> {
        let params = Params::new()
            .set("RouteID", route_id)
            .opt("Date", date)
            .opt("IncludingVariations", including_variations);
        self.fetch("RouteSchedule", params).await
    }

    /// Buses scheduled at a stop for the given date.
    ///
    /// `stop_id` is the 7-digit regional stop ID.
    pub async fn stop_schedule(
        &self,
        stop_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Body, Error> {
        let params = Params::new().set("StopID", stop_id).opt("Date", date);
        self.fetch("StopSchedule", params)
            .await?
            .take_field("ScheduleArrivals")
    }

    /// Bus stops within a search area, or all stops when no area is given.
    pub async fn stops(
        &self,
        lat: Option<f64>,
        lon: Option<f64>,
        radius: Option<u32>,
    ) -> Result<Body, Error> {
        let params = Params::new()
            .opt("Lat", lat)
            .opt("Lon", lon)
            .opt("Radius", radius);
        self.fetch("Stops", params).await?.take_field("Stops")
    }
}
