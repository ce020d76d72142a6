//! Rendering of endpoint signatures and JSON request bodies.

use crate::error::{GeneratorError, Result};
use crate::markers::{self, HttpVerb};
use crate::model::{Method, TypeModel};
use log::debug;
use std::io::{self, Write};

/// Header line preceding a JSON body field list.
pub const JSON_BODY_HEADER: &str = "--------  Json Body:  --------";

/// Writes `<VERB> <prefix><method path>` followed by a blank line.
///
/// The method path is the value of the method's own route marker, or nothing
/// if the method has none.
pub fn write_signature<W: Write>(
    w: &mut W,
    method: &Method,
    path_prefix: &str,
    verb: HttpVerb,
) -> io::Result<()> {
    let method_path = markers::route_marker(&method.markers)
        .and_then(|m| m.value.as_deref())
        .unwrap_or("");

    write!(w, "{} {}{}\n\n", verb, path_prefix, method_path)?;
    w.flush()
}

/// Writes the JSON body block for a mutating endpoint, if one applies.
///
/// Nothing is written for GET, for methods without arguments, or when the first
/// argument carries markers of its own (path/query bindings and the like).
/// Otherwise the first argument's type is looked up in `model` and the wire names
/// of its `JsonCreator` constructor arguments are listed in declaration order.
///
/// # Errors
///
/// - [`GeneratorError::TypeNotFound`] if the argument type is not in the model
/// - [`GeneratorError::BodyConstructorNotFound`] if that type has no `JsonCreator` constructor
/// - [`GeneratorError::PropertyNameMissing`] if a constructor argument lacks a `JsonProperty` value
pub fn write_json_body<W: Write>(
    w: &mut W,
    method: &Method,
    model: &TypeModel,
    verb: HttpVerb,
) -> Result<()> {
    let first_argument = match method.arguments.first() {
        Some(arg) if verb != HttpVerb::Get && arg.markers.is_empty() => arg,
        _ => return Ok(()),
    };

    let body_type =
        model
            .find(&first_argument.type_name)
            .ok_or_else(|| GeneratorError::TypeNotFound {
                full_name: first_argument.type_name.clone(),
            })?;

    let ctor = markers::body_constructor(&body_type.constructors).ok_or_else(|| {
        GeneratorError::BodyConstructorNotFound {
            type_name: body_type.name.clone(),
        }
    })?;

    // Resolve every name before writing so a bad field leaves no dangling header.
    let properties = ctor
        .arguments
        .iter()
        .map(|field| {
            markers::property_name(&field.markers).ok_or_else(|| {
                GeneratorError::PropertyNameMissing {
                    type_name: body_type.name.clone(),
                    field: field.name.clone(),
                }
            })
        })
        .collect::<Result<Vec<&str>>>()?;

    debug!(
        "Documenting body of {} with {} properties",
        body_type.full_name,
        properties.len()
    );

    writeln!(w, "{}", JSON_BODY_HEADER)?;
    for property in &properties {
        writeln!(w, "\t{}", property)?;
    }
    w.flush()?;
    Ok(())
}
