//! Declarative record schemas and the structural validator
//!
//! Every collection file is a JSON array of objects. The shape of one object
//! is described by a [`RecordSchema`]: an ordered list of required fields and an
//! ordered list of optional fields, each paired with a [`FieldKind`]. A single
//! routine, [`validate_collection`], checks any payload against any schema, so
//! the per-kind schemas below are pure data.
//!
//! ## Rules
//!
//! - The payload must be an array, every element an object.
//! - Schemas are closed: a key that is neither required nor optional is rejected.
//! - Integers are JSON integers only. Booleans and floats are rejected.
//! - Optional strings accept `null`.
//! - Nested objects (`pixelRange`) recurse through the same checks.
//!
//! The first violation wins and is reported with its location, e.g.
//! `item 2 field 'tags'[1] expected string, got integer`.

use crate::error::SchemaError;
use serde_json::Value;

/// Primitive type a field must hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string
    String,
    /// JSON integer
    Integer,
    /// JSON string or `null`
    OptionalString,
    /// JSON array of strings
    StringList,
    /// Nested object validated against another schema
    Object(&'static RecordSchema),
}

/// One named field of a record schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field
    pub name: &'static str,
    /// Type the value must hold
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declare a field
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        FieldSpec { name, kind }
    }
}

/// Closed shape of one record kind
#[derive(Debug, PartialEq, Eq)]
pub struct RecordSchema {
    /// Schema name, for diagnostics
    pub name: &'static str,
    /// Fields that must be present, checked in this order
    pub required: &'static [FieldSpec],
    /// Fields that may be present
    pub optional: &'static [FieldSpec],
}

impl RecordSchema {
    /// Whether `field` is declared (required or optional)
    pub fn allows(&self, field: &str) -> bool {
        self.field(field).is_some()
    }

    /// Look up a declared field by wire name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.required
            .iter()
            .chain(self.optional.iter())
            .find(|spec| spec.name == name)
    }
}

// ============================================================================
// Record schemas
// ============================================================================

use FieldKind::{Integer, OptionalString, StringList};

const fn string(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, FieldKind::String)
}

const fn integer(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, Integer)
}

/// `pixelRange` nested inside a drawer
pub const PIXEL_RANGE: RecordSchema = RecordSchema {
    name: "pixelRange",
    required: &[integer("start"), integer("count")],
    optional: &[],
};

/// `racks.json`
pub const RACK: RecordSchema = RecordSchema {
    name: "rack",
    required: &[
        string("id"),
        string("name"),
        string("wledInstance"),
        integer("rows"),
        integer("drawersPerRow"),
    ],
    optional: &[],
};

/// `drawers.json`
pub const DRAWER: RecordSchema = RecordSchema {
    name: "drawer",
    required: &[
        string("id"),
        string("rackId"),
        integer("row"),
        integer("col"),
        string("label"),
        FieldSpec::new("pixelRange", FieldKind::Object(&PIXEL_RANGE)),
    ],
    optional: &[],
};

/// `parts.json`
pub const PART: RecordSchema = RecordSchema {
    name: "part",
    required: &[
        string("id"),
        string("name"),
        string("categoryId"),
        string("manufacturerId"),
        string("drawerId"),
        FieldSpec::new("tags", StringList),
        integer("quantity"),
    ],
    optional: &[
        FieldSpec::new("notes", OptionalString),
        FieldSpec::new("images", StringList),
    ],
};

/// `categories.json`
pub const CATEGORY: RecordSchema = RecordSchema {
    name: "category",
    required: &[string("id"), string("name")],
    optional: &[],
};

/// `manufacturers.json`
pub const MANUFACTURER: RecordSchema = RecordSchema {
    name: "manufacturer",
    required: &[string("id"), string("name")],
    optional: &[],
};

/// `tags.json`
pub const TAG: RecordSchema = RecordSchema {
    name: "tag",
    required: &[string("id"), string("name")],
    optional: &[],
};

/// `locations.json`
pub const LOCATION: RecordSchema = RecordSchema {
    name: "location",
    required: &[string("id"), string("name")],
    optional: &[FieldSpec::new("description", OptionalString)],
};

/// `stock_movements_{period}.json`
pub const STOCK_MOVEMENT: RecordSchema = RecordSchema {
    name: "stock movement",
    required: &[
        string("id"),
        string("partId"),
        string("type"),
        integer("qty"),
        string("timestamp"),
    ],
    optional: &[FieldSpec::new("note", OptionalString)],
};

/// `adjustments_{period}.json`
pub const ADJUSTMENT: RecordSchema = RecordSchema {
    name: "adjustment",
    required: &[
        string("id"),
        string("partId"),
        integer("delta"),
        string("timestamp"),
    ],
    optional: &[FieldSpec::new("reason", OptionalString)],
};

/// `reservations.json`
pub const RESERVATION: RecordSchema = RecordSchema {
    name: "reservation",
    required: &[
        string("id"),
        string("partId"),
        integer("qty"),
        string("status"),
        string("timestamp"),
    ],
    optional: &[FieldSpec::new("note", OptionalString)],
};

/// `parts_by_tag.json`
pub const PARTS_BY_TAG: RecordSchema = RecordSchema {
    name: "parts by tag",
    required: &[string("tagId"), FieldSpec::new("partIds", StringList)],
    optional: &[],
};

/// `parts_by_category.json`
pub const PARTS_BY_CATEGORY: RecordSchema = RecordSchema {
    name: "parts by category",
    required: &[string("categoryId"), FieldSpec::new("partIds", StringList)],
    optional: &[],
};

/// `parts_by_drawer.json`
pub const PARTS_BY_DRAWER: RecordSchema = RecordSchema {
    name: "parts by drawer",
    required: &[string("drawerId"), FieldSpec::new("partIds", StringList)],
    optional: &[],
};

// ============================================================================
// Validation
// ============================================================================

/// Validate a whole collection payload: an array of `schema`-shaped objects.
///
/// `source` is the label (normally the file path) carried into the error.
pub fn validate_collection(
    payload: &Value,
    schema: &RecordSchema,
    source: &str,
) -> Result<(), SchemaError> {
    let items = payload.as_array().ok_or_else(|| {
        SchemaError::violation(
            source,
            "payload",
            format!("expected list, got {}", type_name(payload)),
        )
    })?;
    for (index, item) in items.iter().enumerate() {
        validate_record(item, schema, source, &format!("item {}", index))?;
    }
    Ok(())
}

/// Validate one object against `schema`; `location` prefixes every error.
pub fn validate_record(
    value: &Value,
    schema: &RecordSchema,
    source: &str,
    location: &str,
) -> Result<(), SchemaError> {
    let object = value.as_object().ok_or_else(|| {
        SchemaError::violation(
            source,
            location,
            format!("expected object, got {}", type_name(value)),
        )
    })?;

    for field in object.keys() {
        if !schema.allows(field) {
            return Err(SchemaError::violation(
                source,
                location,
                format!("has unexpected field '{}'", field),
            ));
        }
    }

    for spec in schema.required {
        let field = object.get(spec.name).ok_or_else(|| {
            SchemaError::violation(
                source,
                location,
                format!("missing required field '{}'", spec.name),
            )
        })?;
        validate_field(field, spec, source, location)?;
    }

    for spec in schema.optional {
        if let Some(field) = object.get(spec.name) {
            validate_field(field, spec, source, location)?;
        }
    }
    Ok(())
}

fn validate_field(
    value: &Value,
    spec: &FieldSpec,
    source: &str,
    location: &str,
) -> Result<(), SchemaError> {
    let location = format!("{} field '{}'", location, spec.name);
    let mismatch = |expected: &str| {
        SchemaError::violation(
            source,
            location.as_str(),
            format!("expected {}, got {}", expected, type_name(value)),
        )
    };

    match spec.kind {
        FieldKind::String if !value.is_string() => Err(mismatch("string")),
        FieldKind::Integer if !is_integer(value) => Err(mismatch("integer")),
        FieldKind::OptionalString if !(value.is_null() || value.is_string()) => {
            Err(mismatch("string or null"))
        }
        FieldKind::StringList => {
            let items = value
                .as_array()
                .ok_or_else(|| mismatch("list of strings"))?;
            match items.iter().position(|item| !item.is_string()) {
                Some(index) => Err(SchemaError::violation(
                    source,
                    format!("{}[{}]", location, index),
                    format!("expected string, got {}", type_name(&items[index])),
                )),
                None => Ok(()),
            }
        }
        FieldKind::Object(nested) => validate_record(value, nested, source, &location),
        _ => Ok(()),
    }
}

/// A JSON integer. `Value::Bool` never satisfies this, nor does `1.0`.
fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

/// JSON type name used in error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
