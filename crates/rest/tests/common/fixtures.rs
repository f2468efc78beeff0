//! Coworker payload fixtures.

use serde_json::{Value, json};

/// Builds a create payload.
pub fn coworker(name: &str, role: &str, department: &str, salary: f64) -> Value {
    json!({
        "name": name,
        "role": role,
        "department": department,
        "salary": salary
    })
}

/// A small roster spanning three departments.
pub fn team() -> Vec<Value> {
    vec![
        coworker("Charlie", "Accountant", "Finance", 52000.0),
        coworker("Alice", "Engineer", "R&D", 61000.0),
        coworker("Eve", "Recruiter", "People", 48000.0),
        coworker("Bob", "Analyst", "Finance", 45000.0),
        coworker("Dana", "Engineering Manager", "R&D", 90000.0),
    ]
}
