//! Request body validation for author and book writes.

use crate::error::AppError;
use crate::model::{BookUpdate, NewAuthor, NewBook};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    Text { max_length: usize },
    Integer,
    Timestamp,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn rule(name: &'static str, kind: FieldKind, required: bool) -> FieldRule {
    FieldRule { name, kind, required }
}

pub const AUTHOR_RULES: &[FieldRule] = &[
    rule("first_name", FieldKind::Text { max_length: 128 }, true),
    rule("last_name", FieldKind::Text { max_length: 128 }, true),
];

pub const BOOK_CREATE_RULES: &[FieldRule] = &[
    rule("title", FieldKind::Text { max_length: 256 }, true),
    rule("author_id", FieldKind::Integer, true),
    rule("pub_date", FieldKind::Timestamp, false),
];

pub const BOOK_UPDATE_RULES: &[FieldRule] = &[
    rule("title", FieldKind::Text { max_length: 256 }, true),
    rule("author_id", FieldKind::Integer, true),
];

pub struct RequestValidator;

impl RequestValidator {
    /// Check `body` against `rules`. Required fields must be present and non-null;
    /// fields not named by a rule are ignored.
    pub fn validate(body: &Map<String, Value>, rules: &[FieldRule]) -> Result<(), AppError> {
        for r in rules {
            match body.get(r.name) {
                None | Some(Value::Null) => {
                    if r.required {
                        return Err(AppError::Validation(format!("{} is required", r.name)));
                    }
                }
                Some(v) => validate_field(r.name, v, r.kind)?,
            }
        }
        Ok(())
    }

    pub fn new_author(body: Value) -> Result<NewAuthor, AppError> {
        let map = body_to_map(body)?;
        Self::validate(&map, AUTHOR_RULES)?;
        Ok(NewAuthor {
            first_name: text(&map, "first_name"),
            last_name: text(&map, "last_name"),
        })
    }

    pub fn new_book(body: Value) -> Result<NewBook, AppError> {
        let map = body_to_map(body)?;
        Self::validate(&map, BOOK_CREATE_RULES)?;
        Ok(NewBook {
            title: text(&map, "title"),
            author_id: integer(&map, "author_id"),
            pub_date: map.get("pub_date").and_then(Value::as_str).and_then(parse_timestamp),
        })
    }

    pub fn book_update(body: Value) -> Result<BookUpdate, AppError> {
        let map = body_to_map(body)?;
        Self::validate(&map, BOOK_UPDATE_RULES)?;
        Ok(BookUpdate {
            title: text(&map, "title"),
            author_id: integer(&map, "author_id"),
        })
    }
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

// Only called after validate() has accepted the field.
fn text(map: &Map<String, Value>, key: &str) -> String {
    map.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

fn integer(map: &Map<String, Value>, key: &str) -> i64 {
    map.get(key).and_then(Value::as_i64).unwrap_or_default()
}

fn validate_field(col: &str, v: &Value, kind: FieldKind) -> Result<(), AppError> {
    match kind {
        FieldKind::Text { max_length } => {
            let s = v
                .as_str()
                .ok_or_else(|| AppError::Validation(format!("{} must be a string", col)))?;
            if s.chars().count() > max_length {
                return Err(AppError::Validation(format!(
                    "{} must be at most {} characters",
                    col, max_length
                )));
            }
        }
        FieldKind::Integer => {
            if v.as_i64().is_none() {
                return Err(AppError::Validation(format!("{} must be an integer", col)));
            }
        }
        FieldKind::Timestamp => {
            if v.as_str().and_then(parse_timestamp).is_none() {
                return Err(AppError::Validation(format!("{} must be an ISO 8601 date or datetime", col)));
            }
        }
    }
    Ok(())
}

/// RFC 3339, or a naive datetime / date taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validation_message(r: Result<impl std::fmt::Debug, AppError>) -> String {
        match r {
            Err(AppError::Validation(m)) => m,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn author_requires_both_names() {
        let msg = validation_message(RequestValidator::new_author(json!({ "first_name": "Jane" })));
        assert_eq!(msg, "last_name is required");
        let msg = validation_message(RequestValidator::new_author(json!({ "first_name": null, "last_name": "Doe" })));
        assert_eq!(msg, "first_name is required");
    }

    #[test]
    fn author_fields_must_be_strings_within_limit() {
        let msg = validation_message(RequestValidator::new_author(json!({ "first_name": 5, "last_name": "Doe" })));
        assert_eq!(msg, "first_name must be a string");
        let long = "x".repeat(129);
        let msg = validation_message(RequestValidator::new_author(json!({ "first_name": "J", "last_name": long })));
        assert_eq!(msg, "last_name must be at most 128 characters");
    }

    #[test]
    fn book_create_parses_optional_pub_date() {
        let b = RequestValidator::new_book(json!({ "title": "Dune", "author_id": 3 })).unwrap();
        assert_eq!(b, NewBook { title: "Dune".into(), author_id: 3, pub_date: None });

        let b = RequestValidator::new_book(json!({
            "title": "Dune",
            "author_id": 3,
            "pub_date": "1965-08-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(b.pub_date, Some("1965-08-01T00:00:00Z".parse().unwrap()));
    }

    #[test]
    fn book_create_rejects_bad_types() {
        let msg = validation_message(RequestValidator::new_book(json!({ "title": "Dune", "author_id": "three" })));
        assert_eq!(msg, "author_id must be an integer");
        let msg = validation_message(RequestValidator::new_book(json!({
            "title": "Dune",
            "author_id": 1,
            "pub_date": "last tuesday"
        })));
        assert!(msg.starts_with("pub_date"));
    }

    #[test]
    fn title_limit_is_256_characters() {
        let at_limit = "é".repeat(256);
        assert!(RequestValidator::new_book(json!({ "title": at_limit, "author_id": 1 })).is_ok());
        let msg = validation_message(RequestValidator::book_update(json!({ "title": "t".repeat(257), "author_id": 1 })));
        assert_eq!(msg, "title must be at most 256 characters");
    }

    #[test]
    fn book_update_ignores_unknown_fields() {
        let u = RequestValidator::book_update(json!({ "id": 99, "title": "New", "author_id": 2, "author": "2" })).unwrap();
        assert_eq!(u, BookUpdate { title: "New".into(), author_id: 2 });
    }

    #[test]
    fn non_object_body_is_bad_request() {
        assert!(matches!(RequestValidator::new_author(json!([1, 2])), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn timestamp_formats() {
        let expected: DateTime<Utc> = "2001-02-03T04:05:06Z".parse().unwrap();
        assert_eq!(parse_timestamp("2001-02-03T04:05:06Z"), Some(expected));
        assert_eq!(parse_timestamp("2001-02-03T06:05:06+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2001-02-03T04:05:06"), Some(expected));
        assert_eq!(parse_timestamp("2001-02-03 04:05:06"), Some(expected));
        assert_eq!(parse_timestamp("2001-02-03"), Some("2001-02-03T00:00:00Z".parse().unwrap()));
        assert_eq!(parse_timestamp("03/02/2001"), None);
    }
}
