//! Coworker list/search query.
//!
//! [`CoworkerQuery`] is the validated form of the optional `search`,
//! `department`, `sort_by` and `limit` parameters accepted by the list
//! operation. It renders to MongoDB filter and sort documents and can also
//! be evaluated in-process through a [`CoworkerMatcher`].
//!
//! # Filter semantics
//!
//! | Parameters | Filter document |
//! |-----------|-----------------|
//! | none | `{}` |
//! | `search` | `{"$or": [{name: /s/i}, {role: /s/i}, {department: /s/i}]}` |
//! | `department` | `{"department": d}` |
//! | both | `{"$and": [<search clause>, <department clause>]}` |
//!
//! The search text is escaped before being embedded in the pattern, so it
//! always matches as a literal substring.

use bson::{Document, doc};
use regex::{Regex, RegexBuilder};

use crate::error::ValidationError;

/// Number of results returned when the client does not ask for a limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// Smallest accepted limit.
pub const MIN_LIMIT: u32 = 1;

/// Largest accepted limit.
pub const MAX_LIMIT: u32 = 100;

/// Field used for ordering when the client does not choose one.
pub const DEFAULT_SORT_FIELD: &str = "name";

/// Fields matched by free-text search.
pub const SEARCH_FIELDS: [&str; 3] = ["name", "role", "department"];

/// A validated list/search query.
///
/// # Examples
///
/// ```
/// use roster_persistence::types::CoworkerQuery;
///
/// let query = CoworkerQuery::new(
///     Some("ali".to_string()),
///     Some("Engineering".to_string()),
///     None,
///     Some(25),
/// )
/// .unwrap();
///
/// assert_eq!(query.sort_by(), "name");
/// assert_eq!(query.limit(), 25);
/// assert!(query.filter_document().contains_key("$and"));
///
/// assert!(CoworkerQuery::new(None, None, None, Some(0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoworkerQuery {
    search: Option<String>,
    department: Option<String>,
    sort_by: String,
    limit: u32,
}

impl Default for CoworkerQuery {
    fn default() -> Self {
        Self {
            search: None,
            department: None,
            sort_by: DEFAULT_SORT_FIELD.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl CoworkerQuery {
    /// Builds a query from optional client parameters.
    ///
    /// Empty `search`, `department` and `sort_by` values are treated as
    /// absent. `sort_by` is not checked against the known fields; an unknown
    /// field is passed to the store as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LimitOutOfRange`] when `limit` is outside
    /// `[MIN_LIMIT, MAX_LIMIT]`. Out-of-range limits are never clamped.
    pub fn new(
        search: Option<String>,
        department: Option<String>,
        sort_by: Option<String>,
        limit: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(value) => u32::try_from(value)
                .ok()
                .filter(|v| (MIN_LIMIT..=MAX_LIMIT).contains(v))
                .ok_or(ValidationError::LimitOutOfRange {
                    limit: value,
                    min: MIN_LIMIT,
                    max: MAX_LIMIT,
                })?,
        };

        Ok(Self {
            search: non_empty(search),
            department: non_empty(department),
            sort_by: non_empty(sort_by).unwrap_or_else(|| DEFAULT_SORT_FIELD.to_string()),
            limit,
        })
    }

    /// Returns the free-text search term, if any.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the exact department filter, if any.
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Returns the field results are sorted by (ascending).
    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    /// Returns the maximum number of results.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the escaped regular expression used for free-text search.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(regex::escape)
    }

    /// Renders the filter predicate as a MongoDB query document.
    pub fn filter_document(&self) -> Document {
        let mut clauses: Vec<Document> = Vec::with_capacity(2);

        if let Some(pattern) = self.search_pattern() {
            let any_field: Vec<Document> = SEARCH_FIELDS
                .iter()
                .map(|field| {
                    let mut clause = Document::new();
                    clause.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                    clause
                })
                .collect();
            clauses.push(doc! { "$or": any_field });
        }

        if let Some(department) = &self.department {
            clauses.push(doc! { "department": department.as_str() });
        }

        match clauses.len() {
            0 => Document::new(),
            1 => clauses.remove(0),
            _ => doc! { "$and": clauses },
        }
    }

    /// Renders the ascending sort key as a MongoDB sort document.
    pub fn sort_document(&self) -> Document {
        let mut sort = Document::new();
        sort.insert(self.sort_by.as_str(), 1);
        sort
    }

    /// Compiles the filter for in-process evaluation.
    pub fn matcher(&self) -> Result<CoworkerMatcher, regex::Error> {
        let search = self
            .search_pattern()
            .map(|pattern| RegexBuilder::new(&pattern).case_insensitive(true).build())
            .transpose()?;

        Ok(CoworkerMatcher {
            search,
            department: self.department.clone(),
        })
    }
}

/// The filter half of a [`CoworkerQuery`], compiled for in-process use.
#[derive(Debug, Clone)]
pub struct CoworkerMatcher {
    search: Option<Regex>,
    department: Option<String>,
}

impl CoworkerMatcher {
    /// Returns true if the stored document satisfies the filter.
    ///
    /// Works on the raw document so that records of an unexpected shape are
    /// still returned to the caller, as the server would return them. A
    /// missing or non-string field never matches a clause.
    pub fn matches(&self, document: &Document) -> bool {
        let search_ok = self.search.as_ref().is_none_or(|re| {
            SEARCH_FIELDS
                .iter()
                .any(|field| document.get_str(field).is_ok_and(|value| re.is_match(value)))
        });
        let department_ok = self.department.as_deref().is_none_or(|department| {
            document
                .get_str("department")
                .is_ok_and(|value| value == department)
        });

        search_ok && department_ok
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::Bson;

    fn coworker(name: &str, role: &str, department: &str) -> Document {
        doc! {
            "name": name,
            "role": role,
            "department": department,
            "salary": 1.0,
        }
    }

    #[test]
    fn test_defaults() {
        let query = CoworkerQuery::new(None, None, None, None).unwrap();
        assert_eq!(query, CoworkerQuery::default());
        assert_eq!(query.limit(), 10);
        assert_eq!(query.sort_by(), "name");
        assert!(query.filter_document().is_empty());
        assert_eq!(query.sort_document(), doc! { "name": 1 });
    }

    #[test]
    fn test_limit_bounds() {
        assert_eq!(CoworkerQuery::new(None, None, None, Some(1)).unwrap().limit(), 1);
        assert_eq!(
            CoworkerQuery::new(None, None, None, Some(100)).unwrap().limit(),
            100
        );

        for limit in [0, 101, -1, i64::MAX] {
            let err = CoworkerQuery::new(None, None, None, Some(limit)).unwrap_err();
            assert_eq!(
                err,
                ValidationError::LimitOutOfRange {
                    limit,
                    min: 1,
                    max: 100
                }
            );
        }
    }

    #[test]
    fn test_empty_values_are_absent() {
        let query = CoworkerQuery::new(
            Some(String::new()),
            Some(String::new()),
            Some(String::new()),
            None,
        )
        .unwrap();
        assert_eq!(query, CoworkerQuery::default());
    }

    #[test]
    fn test_search_filter() {
        let query = CoworkerQuery::new(Some("ali".to_string()), None, None, None).unwrap();
        let filter = query.filter_document();

        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 3);
        assert_eq!(
            clauses[0],
            Bson::Document(doc! { "name": { "$regex": "ali", "$options": "i" } })
        );
        assert_eq!(
            clauses[2],
            Bson::Document(doc! { "department": { "$regex": "ali", "$options": "i" } })
        );
    }

    #[test]
    fn test_department_filter() {
        let query = CoworkerQuery::new(None, Some("R&D".to_string()), None, None).unwrap();
        assert_eq!(query.filter_document(), doc! { "department": "R&D" });
    }

    #[test]
    fn test_combined_filter() {
        let query = CoworkerQuery::new(
            Some("eng".to_string()),
            Some("R&D".to_string()),
            None,
            None,
        )
        .unwrap();
        let filter = query.filter_document();
        let clauses = filter.get_array("$and").unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[1], Bson::Document(doc! { "department": "R&D" }));
    }

    #[test]
    fn test_search_pattern_is_escaped() {
        let query = CoworkerQuery::new(Some("c++ (lead)".to_string()), None, None, None).unwrap();
        assert_eq!(query.search_pattern().unwrap(), r"c\+\+ \(lead\)");
    }

    #[test]
    fn test_sort_passthrough() {
        let query = CoworkerQuery::new(None, None, Some("salary".to_string()), None).unwrap();
        assert_eq!(query.sort_document(), doc! { "salary": 1 });

        let query = CoworkerQuery::new(None, None, Some("nickname".to_string()), None).unwrap();
        assert_eq!(query.sort_by(), "nickname");
    }

    #[test]
    fn test_matcher_case_insensitive_search() {
        let alice = coworker("Alice", "Engineer", "Engineering");
        for term in ["ali", "ALI", "gineer"] {
            let matcher = CoworkerQuery::new(Some(term.to_string()), None, None, None)
                .unwrap()
                .matcher()
                .unwrap();
            assert!(matcher.matches(&alice), "{} should match", term);
        }

        let matcher = CoworkerQuery::new(Some("bob".to_string()), None, None, None)
            .unwrap()
            .matcher()
            .unwrap();
        assert!(!matcher.matches(&alice));
    }

    #[test]
    fn test_matcher_department_is_exact() {
        let alice = coworker("Alice", "Engineer", "Engineering");
        let matcher = CoworkerQuery::new(None, Some("engineer".to_string()), None, None)
            .unwrap()
            .matcher()
            .unwrap();
        assert!(!matcher.matches(&alice));

        let matcher = CoworkerQuery::new(None, Some("Engineering".to_string()), None, None)
            .unwrap()
            .matcher()
            .unwrap();
        assert!(matcher.matches(&alice));
    }

    #[test]
    fn test_matcher_metacharacters_are_literal() {
        let matcher = CoworkerQuery::new(Some("a.c".to_string()), None, None, None)
            .unwrap()
            .matcher()
            .unwrap();
        assert!(matcher.matches(&coworker("a.c", "x", "y")));
        assert!(!matcher.matches(&coworker("abc", "x", "y")));
    }

    #[test]
    fn test_matcher_tolerates_missing_fields() {
        let legacy = doc! { "name": "Legacy", "role": "Clerk", "salary": 1.0 };

        let everything = CoworkerQuery::default().matcher().unwrap();
        assert!(everything.matches(&legacy));

        let by_name = CoworkerQuery::new(Some("leg".to_string()), None, None, None)
            .unwrap()
            .matcher()
            .unwrap();
        assert!(by_name.matches(&legacy));

        let by_department = CoworkerQuery::new(None, Some("Archive".to_string()), None, None)
            .unwrap()
            .matcher()
            .unwrap();
        assert!(!by_department.matches(&legacy));
    }
}
