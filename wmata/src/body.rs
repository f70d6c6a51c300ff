//! Response body decoding for the two supported encoding modes.

use std::str::FromStr;

use serde_json::Value;

use crate::error::Error;

/// Encoding mode for requests and responses, fixed at client construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// JSON bodies (the default). Endpoint names grow a `j` prefix for
    /// most services.
    #[default]
    Json,
    /// XML bodies with bare endpoint names.
    Xml,
}

impl Mode {
    /// Path segment used in request URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Json => "json",
            Mode::Xml => "xml",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Mode::Json),
            "xml" => Ok(Mode::Xml),
            other => Err(Error::Configuration(format!(
                "invalid encoding mode: {other}"
            ))),
        }
    }
}

/// An owned XML element tree.
///
/// `roxmltree` documents borrow from the response string, so the parsed
/// tree is copied into this owned form before being returned to the
/// caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: Option<String>,
}

impl Element {
    fn from_node(node: roxmltree::Node<'_, '_>) -> Element {
        Element {
            name: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect(),
            children: node
                .children()
                .filter(|n| n.is_element())
                .map(Element::from_node)
                .collect(),
            text: node.text().and_then(|t| {
                let t = t.trim();
                (!t.is_empty()).then(|| t.to_string())
            }),
        }
    }

    /// Depth-first search for the first descendant element with this tag.
    pub fn find(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }
}

/// A decoded response body.
///
/// Transient: exists only for the duration of one call, never cached.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Xml(Element),
}

impl Body {
    /// Decode a response body under the given mode.
    pub(crate) fn decode(mode: Mode, text: &str) -> Result<Body, Error> {
        match mode {
            Mode::Json => {
                let value: Value =
                    serde_json::from_str(text).map_err(|e| Error::decode(e.to_string(), text))?;
                Ok(Body::Json(value))
            }
            Mode::Xml => {
                let doc = roxmltree::Document::parse(text)
                    .map_err(|e| Error::decode(e.to_string(), text))?;
                Ok(Body::Xml(Element::from_node(doc.root_element())))
            }
        }
    }

    /// Unwrap the payload field of an envelope response.
    ///
    /// JSON envelopes are objects with the payload under a documented
    /// field name; XML envelopes nest the payload as a descendant
    /// element of the same name. A missing field means the body did not
    /// match the documented schema.
    pub(crate) fn take_field(self, name: &str) -> Result<Body, Error> {
        match self {
            Body::Json(Value::Object(mut map)) => map.remove(name).map(Body::Json).ok_or_else(|| {
                Error::Decode {
                    message: format!("response missing field {name:?}"),
                    body: None,
                }
            }),
            Body::Json(other) => Err(Error::Decode {
                message: format!("expected object with field {name:?}"),
                body: Some(other.to_string().chars().take(500).collect()),
            }),
            Body::Xml(element) => {
                if element.name == name {
                    return Ok(Body::Xml(element));
                }
                element
                    .find(name)
                    .cloned()
                    .map(Body::Xml)
                    .ok_or_else(|| Error::Decode {
                        message: format!("response missing element {name:?}"),
                        body: None,
                    })
            }
        }
    }

    /// The decoded JSON value, if this body was decoded in JSON mode.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Body::Json(value) => Some(value),
            Body::Xml(_) => None,
        }
    }

    /// The decoded XML tree, if this body was decoded in XML mode.
    pub fn into_xml(self) -> Option<Element> {
        match self {
            Body::Json(_) => None,
            Body::Xml(element) => Some(element),
        }
    }
}
