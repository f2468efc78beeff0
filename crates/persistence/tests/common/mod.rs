//! Shared backend test suite.
//!
//! Each function exercises one behaviour against any [`CoworkerStorage`],
//! so every backend is held to the same semantics.

use bson::{Bson, doc, oid::ObjectId};
use roster_persistence::core::CoworkerStorage;
use roster_persistence::mapper::{from_storage, to_storage};
use roster_persistence::types::{Coworker, CoworkerQuery, NewCoworker};

/// Builds a validated coworker.
pub fn new_coworker(name: &str, role: &str, department: &str, salary: f64) -> NewCoworker {
    NewCoworker {
        name: name.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        salary,
    }
}

/// Stores the standard roster and returns the stored records.
pub async fn seed<S: CoworkerStorage>(storage: &S) -> Vec<Coworker> {
    let roster = [
        new_coworker("Charlie", "Accountant", "Finance", 52000.0),
        new_coworker("Alice", "Engineer", "R&D", 61000.0),
        new_coworker("Eve", "Recruiter", "People", 48000.0),
        new_coworker("Bob", "Analyst", "Finance", 45000.0),
        new_coworker("Dana", "Engineering Manager", "R&D", 90000.0),
    ];

    let mut stored = Vec::with_capacity(roster.len());
    for coworker in &roster {
        let document = storage.insert(to_storage(coworker)).await.unwrap();
        stored.push(from_storage(document).unwrap());
    }
    stored
}

async fn names<S: CoworkerStorage>(storage: &S, query: CoworkerQuery) -> Vec<String> {
    storage
        .find(&query)
        .await
        .unwrap()
        .into_iter()
        .map(|d| from_storage(d).unwrap().name)
        .collect()
}

fn query(
    search: Option<&str>,
    department: Option<&str>,
    sort_by: Option<&str>,
    limit: Option<i64>,
) -> CoworkerQuery {
    CoworkerQuery::new(
        search.map(str::to_string),
        department.map(str::to_string),
        sort_by.map(str::to_string),
        limit,
    )
    .unwrap()
}

/// Inserted documents come back with a fresh identifier and can be read.
pub async fn insert_assigns_id_and_reads_back<S: CoworkerStorage>(storage: &S) {
    let stored = seed(storage).await;
    let bob = stored.iter().find(|c| c.name == "Bob").unwrap();

    let id = ObjectId::parse_str(&bob.id).unwrap();
    let found = storage.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(&from_storage(found).unwrap(), bob);

    let missing = storage.find_by_id(&ObjectId::new()).await.unwrap();
    assert!(missing.is_none());
}

/// Default query sorts by name and applies the default limit.
pub async fn find_default_order<S: CoworkerStorage>(storage: &S) {
    seed(storage).await;

    assert_eq!(
        names(storage, CoworkerQuery::default()).await,
        vec!["Alice", "Bob", "Charlie", "Dana", "Eve"]
    );
}

/// Sorting by a numeric field and limiting.
pub async fn find_sort_and_limit<S: CoworkerStorage>(storage: &S) {
    seed(storage).await;

    assert_eq!(
        names(storage, query(None, None, Some("salary"), Some(3))).await,
        vec!["Bob", "Eve", "Charlie"]
    );
}

/// Search is a case-insensitive literal substring over three fields.
pub async fn find_search<S: CoworkerStorage>(storage: &S) {
    seed(storage).await;
    storage
        .insert(to_storage(&new_coworker("a.c", "Intern", "Ops", 1.0)))
        .await
        .unwrap();

    assert_eq!(names(storage, query(Some("ALI"), None, None, None)).await, vec!["Alice"]);
    assert_eq!(
        names(storage, query(Some("engineer"), None, None, None)).await,
        vec!["Alice", "Dana"]
    );
    assert_eq!(names(storage, query(Some("a.c"), None, None, None)).await, vec!["a.c"]);
}

/// Department is an exact, case-sensitive match and combines with search.
pub async fn find_department<S: CoworkerStorage>(storage: &S) {
    seed(storage).await;

    assert_eq!(
        names(storage, query(None, Some("Finance"), None, None)).await,
        vec!["Bob", "Charlie"]
    );
    assert!(names(storage, query(None, Some("finance"), None, None)).await.is_empty());
    assert_eq!(
        names(storage, query(Some("a"), Some("R&D"), Some("salary"), None)).await,
        vec!["Alice", "Dana"]
    );
}

/// Distinct departments contain each value once.
pub async fn distinct_departments<S: CoworkerStorage>(storage: &S) {
    assert!(storage.distinct("department").await.unwrap().is_empty());

    seed(storage).await;

    let mut departments: Vec<String> = storage
        .distinct("department")
        .await
        .unwrap()
        .into_iter()
        .filter_map(|b| match b {
            Bson::String(s) => Some(s),
            _ => None,
        })
        .collect();
    departments.sort();
    assert_eq!(departments, vec!["Finance", "People", "R&D"]);
}

/// Integer salaries written by other clients read back as numbers.
pub async fn integer_salary_reads_back<S: CoworkerStorage>(storage: &S) {
    let document = doc! {
        "name": "Legacy",
        "role": "Clerk",
        "department": "Archive",
        "salary": 30000_i32,
    };
    let stored = storage.insert(document).await.unwrap();

    assert_eq!(from_storage(stored).unwrap().salary, 30000.0);
}
