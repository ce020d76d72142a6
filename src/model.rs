//! In-memory class model consumed by the documentation generator.
//!
//! The model is produced by an external front-end (see [`crate::parser`] for the
//! serialized form) and is read-only once built. [`TypeModel`] keeps the types in
//! declaration order and indexes them by fully-qualified name.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A declarative marker (annotation) attached to a model element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Marker name, e.g. `Path` or `POST`
    pub name: String,
    /// Optional marker value, e.g. `/users`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// The category of a declared type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// A class
    #[default]
    Class,
    /// An interface
    Interface,
    /// An enum
    Enum,
}

/// A field, or an argument of a method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field or parameter name
    pub name: String,
    /// Declared type, resolvable to a [`TypeEntry::full_name`]
    #[serde(rename = "type")]
    pub type_name: String,
    /// Markers on the field or parameter
    #[serde(default)]
    pub markers: Vec<Marker>,
}

/// A method with its markers and ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub arguments: Vec<Field>,
}

/// A constructor with its markers and ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub arguments: Vec<Field>,
}

/// A class, interface or enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Fully-qualified name, unique within a model
    pub full_name: String,
    /// Simple name used in document headers
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub constructors: Vec<Constructor>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// The complete set of types taking part in one generation run.
#[derive(Debug, Default)]
pub struct TypeModel {
    /// Types in model order
    types: Vec<TypeEntry>,
    /// Index from fully-qualified name to position in `types`
    by_full_name: HashMap<String, usize>,
}

impl Marker {
    /// Creates a marker without a value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Creates a marker carrying a value.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            markers: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
            arguments: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_argument(mut self, argument: Field) -> Self {
        self.arguments.push(argument);
        self
    }
}

impl Constructor {
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            arguments: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_argument(mut self, argument: Field) -> Self {
        self.arguments.push(argument);
        self
    }
}

impl Default for Constructor {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeEntry {
    /// Creates an empty class entry.
    pub fn new(full_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            name: name.into(),
            kind: TypeKind::Class,
            markers: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }
}

impl TypeModel {
    /// Builds a model from types in declaration order.
    ///
    /// If a fully-qualified name is declared more than once, lookups resolve to
    /// the first declaration.
    pub fn new(types: Vec<TypeEntry>) -> Self {
        debug!("Indexing type model with {} types", types.len());

        let mut by_full_name = HashMap::with_capacity(types.len());
        for (idx, entry) in types.iter().enumerate() {
            let first = *by_full_name.entry(entry.full_name.clone()).or_insert(idx);
            if first != idx {
                warn!(
                    "Type {} is declared more than once, keeping the first declaration",
                    entry.full_name
                );
            }
        }

        Self {
            types,
            by_full_name,
        }
    }

    /// Looks up a type by its exact fully-qualified name.
    pub fn find(&self, full_name: &str) -> Option<&TypeEntry> {
        self.by_full_name.get(full_name).map(|&idx| &self.types[idx])
    }

    /// Types in model order.
    pub fn types(&self) -> &[TypeEntry] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
