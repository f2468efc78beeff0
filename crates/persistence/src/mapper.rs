//! Mapping between coworker records and stored BSON documents.
//!
//! The document store keys every document by an `_id` field holding an
//! [`ObjectId`]. API clients see that identifier as a plain hex string in
//! the `id` field instead:
//!
//! | Wire (`Coworker`) | Stored document |
//! |-------------------|-----------------|
//! | `id: String` | `_id: ObjectId` |
//! | `name` | `name: String` |
//! | `role` | `role: String` |
//! | `department` | `department: String` |
//! | `salary: f64` | `salary: Double` |

use bson::{Bson, Document, doc, oid::ObjectId};

use crate::error::MappingError;
use crate::types::{Coworker, NewCoworker};

/// Name of the store-assigned identifier field.
pub const ID_FIELD: &str = "_id";

/// Returns the document to persist for a new coworker.
///
/// The document never carries an `_id`; the store assigns one on insert.
///
/// # Examples
///
/// ```
/// use roster_persistence::mapper::to_storage;
/// use roster_persistence::types::NewCoworker;
///
/// let document = to_storage(&NewCoworker {
///     name: "Bob".to_string(),
///     role: "Engineer".to_string(),
///     department: "R&D".to_string(),
///     salary: 50000.0,
/// });
///
/// assert!(!document.contains_key("_id"));
/// assert_eq!(document.get_f64("salary").unwrap(), 50000.0);
/// ```
pub fn to_storage(coworker: &NewCoworker) -> Document {
    doc! {
        "name": coworker.name.as_str(),
        "role": coworker.role.as_str(),
        "department": coworker.department.as_str(),
        "salary": coworker.salary,
    }
}

/// Converts a stored document, including its `_id`, to the wire form.
///
/// The `_id` is stripped from the document and re-emitted as the hex string
/// `id`. Integer salaries written by other tools are widened to `f64`.
///
/// # Errors
///
/// Returns a [`MappingError`] when a field is missing or has the wrong type.
pub fn from_storage(mut document: Document) -> Result<Coworker, MappingError> {
    let id = match document.remove(ID_FIELD) {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => return Err(wrong_type(ID_FIELD, "objectId", &other)),
        None => return Err(missing(ID_FIELD)),
    };

    let coworker = NewCoworker {
        name: take_string(&mut document, "name")?,
        role: take_string(&mut document, "role")?,
        department: take_string(&mut document, "department")?,
        salary: take_number(&mut document, "salary")?,
    };
    Ok(coworker.with_id(id))
}

/// Returns a copy of `document` with `_id` set to `id`.
///
/// Backends use this to build the inserted document from the persisted
/// fields and the identifier the store reported back.
pub fn with_id(document: &Document, id: ObjectId) -> Document {
    let mut stored = document.clone();
    stored.insert(ID_FIELD, id);
    stored
}

fn take_string(document: &mut Document, field: &str) -> Result<String, MappingError> {
    match document.remove(field) {
        Some(Bson::String(value)) => Ok(value),
        Some(other) => Err(wrong_type(field, "string", &other)),
        None => Err(missing(field)),
    }
}

fn take_number(document: &mut Document, field: &str) -> Result<f64, MappingError> {
    match document.remove(field) {
        Some(Bson::Double(value)) => Ok(value),
        Some(Bson::Int32(value)) => Ok(f64::from(value)),
        Some(Bson::Int64(value)) => Ok(value as f64),
        Some(other) => Err(wrong_type(field, "double", &other)),
        None => Err(missing(field)),
    }
}

fn missing(field: &str) -> MappingError {
    MappingError::MissingField {
        field: field.to_string(),
    }
}

fn wrong_type(field: &str, expected: &'static str, actual: &Bson) -> MappingError {
    MappingError::WrongType {
        field: field.to_string(),
        expected,
        actual: format!("{:?}", actual.element_type()),
    }
}
