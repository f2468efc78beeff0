//! Coworker record types.
//!
//! This module defines the wire representations of a coworker:
//!
//! - [`CoworkerDraft`] - the raw creation payload, every field optional
//! - [`NewCoworker`] - a validated creation payload, ready to be stored
//! - [`Coworker`] - a stored coworker with its store-assigned identifier

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A coworker as returned to API clients.
///
/// The `id` is the hex form of the identifier the document store assigned
/// when the record was inserted.
///
/// # Examples
///
/// ```
/// use roster_persistence::types::Coworker;
///
/// let coworker = Coworker {
///     id: "65f1c0ffee0000000000beef".to_string(),
///     name: "Bob".to_string(),
///     role: "Engineer".to_string(),
///     department: "R&D".to_string(),
///     salary: 50000.0,
/// };
///
/// let json = serde_json::to_value(&coworker).unwrap();
/// assert_eq!(json["id"], "65f1c0ffee0000000000beef");
/// assert_eq!(json["salary"], 50000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coworker {
    /// Store-assigned identifier, as a string.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Job title.
    pub role: String,

    /// Department the coworker belongs to.
    pub department: String,

    /// Salary; always greater than zero.
    pub salary: f64,
}

/// A validated coworker that has not been stored yet.
///
/// Values of this type only come out of [`CoworkerDraft::validate`] (or are
/// built directly in tests), so `salary > 0` and a non-empty `name` hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCoworker {
    /// Display name.
    pub name: String,

    /// Job title.
    pub role: String,

    /// Department the coworker belongs to.
    pub department: String,

    /// Salary; always greater than zero.
    pub salary: f64,
}

impl NewCoworker {
    /// Attaches a store-assigned identifier, producing the wire form.
    pub fn with_id(self, id: impl Into<String>) -> Coworker {
        Coworker {
            id: id.into(),
            name: self.name,
            role: self.role,
            department: self.department,
            salary: self.salary,
        }
    }
}

/// The creation payload as received from a client.
///
/// Every field is optional so that a missing field is reported as a
/// [`ValidationError::MissingField`] naming the field instead of a generic
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoworkerDraft {
    /// Display name.
    pub name: Option<String>,

    /// Job title.
    pub role: Option<String>,

    /// Department.
    pub department: Option<String>,

    /// Salary.
    pub salary: Option<f64>,
}

impl CoworkerDraft {
    /// Validates the draft, returning a [`NewCoworker`] ready for storage.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::MissingField`] - a field is absent
    /// * [`ValidationError::EmptyField`] - `name` is empty or whitespace
    /// * [`ValidationError::NonPositiveSalary`] - `salary` is not `> 0`
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_persistence::types::CoworkerDraft;
    ///
    /// let draft = CoworkerDraft {
    ///     name: Some("Bob".to_string()),
    ///     role: Some("Engineer".to_string()),
    ///     department: Some("R&D".to_string()),
    ///     salary: Some(-1.0),
    /// };
    /// assert!(draft.validate().is_err());
    /// ```
    pub fn validate(self) -> Result<NewCoworker, ValidationError> {
        let name = required("name", self.name)?;
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "name".to_string(),
            });
        }
        let role = required("role", self.role)?;
        let department = required("department", self.department)?;
        let salary = required("salary", self.salary)?;

        // Also rejects NaN, which compares false against everything.
        if !(salary > 0.0) || !salary.is_finite() {
            return Err(ValidationError::NonPositiveSalary { salary });
        }

        Ok(NewCoworker {
            name,
            role,
            department,
            salary,
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::MissingField {
        field: field.to_string(),
    })
}
