//! Lookups over the marker vocabulary understood by the generator.
//!
//! All functions are pure and use first-match-in-declaration-order semantics
//! when more than one candidate is present.

use crate::model::{Constructor, Marker};
use std::fmt;

/// Route prefix marker on resource types and methods.
pub const PATH: &str = "Path";
/// Marker selecting the constructor used to build a request body from JSON.
pub const JSON_CREATOR: &str = "JsonCreator";
/// Marker giving a constructor argument its wire name.
pub const JSON_PROPERTY: &str = "JsonProperty";

/// HTTP verbs recognized as endpoint markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    /// HTTP GET method
    Get,
    /// HTTP PUT method
    Put,
    /// HTTP DELETE method
    Delete,
    /// HTTP POST method
    Post,
}

impl HttpVerb {
    /// Parses a marker name. Matching is exact: `get` is not a verb marker.
    pub fn from_marker_name(name: &str) -> Option<Self> {
        match name {
            "GET" => Some(HttpVerb::Get),
            "PUT" => Some(HttpVerb::Put),
            "DELETE" => Some(HttpVerb::Delete),
            "POST" => Some(HttpVerb::Post),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Post => "POST",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if the list is non-empty and carries a route prefix marker.
pub fn has_route_marker(markers: &[Marker]) -> bool {
    !markers.is_empty() && route_marker(markers).is_some()
}

/// First route prefix marker, if any.
pub fn route_marker(markers: &[Marker]) -> Option<&Marker> {
    markers.iter().find(|m| m.name == PATH)
}

/// First HTTP verb marker, together with the verb it denotes.
pub fn http_verb_marker(markers: &[Marker]) -> Option<(HttpVerb, &Marker)> {
    markers
        .iter()
        .find_map(|m| HttpVerb::from_marker_name(&m.name).map(|verb| (verb, m)))
}

/// First constructor, in declaration order, marked as the JSON body creator.
pub fn body_constructor(constructors: &[Constructor]) -> Option<&Constructor> {
    constructors
        .iter()
        .find(|c| c.markers.iter().any(|m| m.name == JSON_CREATOR))
}

/// Value of the first property name marker. A marker without a value counts as absent.
pub fn property_name(markers: &[Marker]) -> Option<&str> {
    markers
        .iter()
        .find(|m| m.name == JSON_PROPERTY)
        .and_then(|m| m.value.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    #[test]
    fn test_has_route_marker() {
        assert!(!has_route_marker(&[]));
        assert!(!has_route_marker(&[Marker::new("Produces")]));
        assert!(has_route_marker(&[
            Marker::new("Produces"),
            Marker::with_value(PATH, "/users"),
        ]));
    }

    #[test]
    fn test_route_marker_first_wins() {
        let markers = vec![
            Marker::with_value(PATH, "/first"),
            Marker::with_value(PATH, "/second"),
        ];
        assert_eq!(
            route_marker(&markers).unwrap().value.as_deref(),
            Some("/first")
        );
    }

    #[test]
    fn test_http_verb_marker() {
        let markers = vec![
            Marker::with_value(PATH, "/{id}"),
            Marker::new("Produces"),
            Marker::new("DELETE"),
        ];
        let (verb, marker) = http_verb_marker(&markers).unwrap();
        assert_eq!(verb, HttpVerb::Delete);
        assert_eq!(marker.name, "DELETE");

        assert!(http_verb_marker(&[Marker::new("HEAD"), Marker::new("get")]).is_none());
    }

    #[test]
    fn test_http_verb_marker_first_in_declaration_order() {
        let markers = vec![Marker::new("PUT"), Marker::new("POST")];
        assert_eq!(http_verb_marker(&markers).unwrap().0, HttpVerb::Put);
    }

    #[test]
    fn test_body_constructor() {
        let plain = Constructor::new().with_argument(Field::new("name", "java.lang.String"));
        let creator = Constructor::new()
            .with_marker(Marker::new("Inject"))
            .with_marker(Marker::new(JSON_CREATOR));
        let second = Constructor::new().with_marker(Marker::new(JSON_CREATOR));

        let ctors = vec![plain.clone(), creator.clone(), second];
        assert_eq!(body_constructor(&ctors), Some(&creator));
        assert!(body_constructor(&[plain]).is_none());
        assert!(body_constructor(&[]).is_none());
    }

    #[test]
    fn test_property_name() {
        assert_eq!(
            property_name(&[
                Marker::new("Nullable"),
                Marker::with_value(JSON_PROPERTY, "email"),
            ]),
            Some("email")
        );
        assert_eq!(property_name(&[Marker::new(JSON_PROPERTY)]), None);
        assert_eq!(property_name(&[]), None);
    }

    #[test]
    fn test_verb_display() {
        assert_eq!(HttpVerb::Post.to_string(), "POST");
        assert_eq!(HttpVerb::from_marker_name("GET"), Some(HttpVerb::Get));
    }
}
