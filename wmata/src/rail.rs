//! Rail line and station information (`Rail.svc`).

use crate::body::Body;
use crate::client::Client;
use crate::error::Error;
use crate::request::{Params, Service, UrlShape};

/// Facade for the rail station information service.
#[derive(Debug, Clone, Copy)]
pub struct Rail<'a> {
    client: &'a Client,
}

impl<'a> Rail<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    async fn fetch(&self, endpoint: &str, params: Params) -> Result<Body, Error> {
        self.client
            .fetch(Service::Rail, endpoint, UrlShape::Query, params)
            .await
    }

    /// Information about all rail lines.
    pub async fn lines(&self) -> Result<Body, Error> {
        self.fetch("Lines", Params::new()).await?.take_field("Lines")
    }

    /// Parking information for a station, or for all stations when the
    /// code is omitted.
    pub async fn station_parking(&self, station_code: Option<&str>) -> Result<Body, Error> {
        let params = Params::new().opt("StationCode", station_code);
        self.fetch("StationParking", params)
            .await?
            .take_field("StationsParking")
    }

    /// Ordered stations and distances between two stations on the same
    /// line.
    pub async fn path_between(&self, from: &str, to: &str) -> Result<Body, Error> {
        let params = Params::new()
            .set("FromStationCode", from)
            .set("ToStationCode", to);
        self.fetch("Path", params).await?.take_field("Path")
    }

    /// Station entrances within a search area, or all entrances when no
    /// area is given.
    pub async fn station_entrances(
        &self,
        lat: Option<f64>,
        lon: Option<f64>,
        radius: Option<u32>,
    ) -> Result<Body, Error> {
        let params = Params::new()
            .opt("Lat", lat)
            .opt("Lon", lon)
            .opt("Radius", radius);
        self.fetch("StationEntrances", params)
            .await?
            .take_field("Entrances")
    }

    /// Location and address details for a single station.
    pub async fn station_info(&self, station_code: &str) -> Result<Body, Error> {
        let params = Params::new().set("StationCode", station_code);
        self.fetch("StationInfo", params).await
    }

    /// Stations on a line, or all stations when the line code is omitted.
    pub async fn stations(&self, line_code: Option<&str>) -> Result<Body, Error> {
        let params = Params::new().opt("LineCode", line_code);
        self.fetch("Stations", params).await?.take_field("Stations")
    }

    /// Opening times and first/last trains for a station, or for all
    /// stations when the code is omitted.
    pub async fn station_times(&self, station_code: Option<&str>) -> Result<Body, Error> {
        let params = Params::new().opt("StationCode", station_code);
        self.fetch("StationTimes", params)
            .await?
            .take_field("StationTimes")
    }

    /// Distance, fare, and estimated travel time between any two
    /// stations, including stations on different lines.
    ///
    /// Omit both codes to retrieve data for every station pair; the
    /// omission is passed through to the API unchanged.
    pub async fn station_to_station(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Body, Error> {
        let params = Params::new()
            .opt("FromStationCode", from)
            .opt("ToStationCode", to);
        self.fetch("SrcStationToDstStationInfo", params)
            .await?
            .take_field("StationToStationInfos")
    }
}
