//! Request descriptors: services, URL shapes, and query parameters.
//!
//! Every call to the WMATA API is described by a [`Service`], an endpoint
//! name, a [`UrlShape`], and a [`Params`] list. The dispatcher in
//! `client.rs` turns that descriptor into a concrete URL.

use chrono::NaiveDate;

use crate::body::Mode;

/// Backend resource groups exposed by the WMATA API.
///
/// Each service is one path segment of the request URL, with a `.svc`
/// suffix appended on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Bus,
    Incidents,
    Rail,
    StationPrediction,
    BusPrediction,
}

impl Service {
    pub fn as_str(self) -> &'static str {
        match self {
            Service::Bus => "Bus",
            Service::Incidents => "Incidents",
            Service::Rail => "Rail",
            Service::StationPrediction => "StationPrediction",
            Service::BusPrediction => "BusPrediction",
        }
    }

    /// Whether endpoint names keep their bare form in JSON mode.
    ///
    /// Most services prefix endpoints with `j` when JSON is requested;
    /// Incidents and StationPrediction never do.
    fn json_prefix_exempt(self) -> bool {
        matches!(self, Service::Incidents | Service::StationPrediction)
    }
}

/// How an operation's parameters are attached to the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlShape {
    /// Standard `?name=value&...` query string. Used by every endpoint
    /// except one.
    Query,
    /// Parameter values joined onto the path with `/` and no `?`
    /// separator. Only `GetPrediction` uses this shape.
    PathAppended,
}

/// A single parameter value: a scalar, or a list flattened before
/// transmission.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Scalar(String),
    List(Vec<String>),
}

impl ParamValue {
    /// Flatten to the wire form. Lists join with `", "` (comma and
    /// space), matching what the upstream API accepts.
    fn flatten(&self) -> String {
        match self {
            ParamValue::Scalar(s) => s.clone(),
            ParamValue::List(items) => items.join(", "),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Scalar(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Scalar(s)
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Scalar(n.to_string())
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Scalar(n.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Scalar(b.to_string())
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(date: NaiveDate) -> Self {
        ParamValue::Scalar(date.format("%Y-%m-%d").to_string())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(items: &[&str]) -> Self {
        ParamValue::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        ParamValue::List(items)
    }
}

/// Ordered parameter list for one request.
///
/// Insertion order is preserved so that a fixed set of arguments always
/// produces an identical URL. Absent optional arguments are omitted
/// entirely rather than sent as empty strings.
#[derive(Debug, Clone, Default)]
pub struct Params {
    entries: Vec<(&'static str, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter.
    pub fn set(mut self, name: &'static str, value: impl Into<ParamValue>) -> Self {
        self.entries.push((name, value.into()));
        self
    }

    /// Append an optional parameter, omitting it when `None`.
    pub fn opt(self, name: &'static str, value: Option<impl Into<ParamValue>>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattened `(name, value)` pairs for a query string.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.flatten()))
            .collect()
    }

    /// All values flattened and joined for the path-appended URL shape.
    pub(crate) fn path_values(&self) -> String {
        self.entries
            .iter()
            .map(|(_, value)| value.flatten())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Build the request path for a service/endpoint pair.
///
/// JSON mode prefixes the endpoint with `j` unless the service is exempt;
/// XML mode never prefixes. The `PathAppended` shape then tacks the
/// parameter values onto the end.
pub(crate) fn build_path(
    base_url: &str,
    service: Service,
    endpoint: &str,
    mode: Mode,
    shape: UrlShape,
    params: &Params,
) -> String {
    let endpoint = if mode == Mode::Json && !service.json_prefix_exempt() {
        format!("j{endpoint}")
    } else {
        endpoint.to_string()
    };

    let mut url = format!(
        "{}/{}.svc/{}/{}",
        base_url,
        service.as_str(),
        mode.as_str(),
        endpoint
    );

    if shape == UrlShape::PathAppended && !params.is_empty() {
        url.push('/');
        url.push_str(&params.path_values());
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_flattens_with_comma_space() {
        let value = ParamValue::from(["10A", "10B"].as_slice());
        assert_eq!(value.flatten(), "10A, 10B");
    }

    #[test]
    fn date_formats_as_iso() {
        let date = NaiveDate::from_ymd_opt(2015, 9, 8).unwrap();
        assert_eq!(ParamValue::from(date).flatten(), "2015-09-08");
    }

    #[test]
    fn params_preserve_insertion_order() {
        let params = Params::new()
            .set("RouteID", "10A")
            .set("Lat", 38.9)
            .set("Radius", 500u32);
        assert_eq!(
            params.query_pairs(),
            vec![
                ("RouteID", "10A".to_string()),
                ("Lat", "38.9".to_string()),
                ("Radius", "500".to_string()),
            ]
        );
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let params = Params::new()
            .opt("FromStationCode", None::<&str>)
            .opt("ToStationCode", None::<&str>);
        assert!(params.is_empty());
        assert!(params.query_pairs().is_empty());
    }

    #[test]
    fn json_mode_prefixes_endpoint() {
        let url = build_path(
            "https://api.wmata.com",
            Service::Rail,
            "Lines",
            Mode::Json,
            UrlShape::Query,
            &Params::new(),
        );
        assert_eq!(url, "https://api.wmata.com/Rail.svc/json/jLines");
    }

    #[test]
    fn exempt_services_keep_bare_endpoint() {
        let url = build_path(
            "https://api.wmata.com",
            Service::Incidents,
            "BusIncidents",
            Mode::Json,
            UrlShape::Query,
            &Params::new(),
        );
        assert_eq!(url, "https://api.wmata.com/Incidents.svc/json/BusIncidents");

        let url = build_path(
            "https://api.wmata.com",
            Service::StationPrediction,
            "GetPrediction",
            Mode::Json,
            UrlShape::PathAppended,
            &Params::new().set("StationCodes", ["B03"].as_slice()),
        );
        assert_eq!(
            url,
            "https://api.wmata.com/StationPrediction.svc/json/GetPrediction/B03"
        );
    }

    #[test]
    fn xml_mode_never_prefixes() {
        let url = build_path(
            "https://api.wmata.com",
            Service::Rail,
            "Lines",
            Mode::Xml,
            UrlShape::Query,
            &Params::new(),
        );
        assert_eq!(url, "https://api.wmata.com/Rail.svc/xml/Lines");
    }

    #[test]
    fn path_appended_joins_values() {
        let url = build_path(
            "https://api.wmata.com",
            Service::StationPrediction,
            "GetPrediction",
            Mode::Json,
            UrlShape::PathAppended,
            &Params::new().set("StationCodes", ["B03", "A01"].as_slice()),
        );
        assert_eq!(
            url,
            "https://api.wmata.com/StationPrediction.svc/json/GetPrediction/B03, A01"
        );
        assert!(!url.contains('?'));
    }

    #[test]
    fn same_inputs_same_url() {
        let build = || {
            build_path(
                "https://api.wmata.com",
                Service::Bus,
                "BusPositions",
                Mode::Json,
                UrlShape::Query,
                &Params::new().set("RouteID", "10A").set("Radius", 500u32),
            )
        };
        assert_eq!(build(), build());
    }
}
