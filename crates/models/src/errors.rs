use std::collections::BTreeMap;
use std::fmt;

use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// Per-field validation messages, keyed by wire field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self { Self::default() }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut e = Self::new();
        e.add(field, message);
        e
    }

    /// Keeps the first message recorded for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    /// Fold the outcome of a validator into this set.
    pub fn absorb(&mut self, res: Result<(), ModelError>) {
        if let Err(ModelError::Validation(other)) = res {
            for (field, message) in other.0 {
                self.add(&field, message);
            }
        }
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn get(&self, field: &str) -> Option<&str> { self.0.get(field).map(String::as_str) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), ModelError> {
        if self.is_empty() { Ok(()) } else { Err(ModelError::Validation(self)) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first { f.write_str("; ")?; }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("duplicate value: {0}")]
    Duplicate(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Classify a SeaORM error; constraint and missing-row failures get their own variants.
    pub fn from_db(e: DbErr) -> Self {
        if let DbErr::RecordNotUpdated = e {
            return ModelError::NotFound("record not updated".into());
        }
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => ModelError::Duplicate(detail),
            _ => ModelError::Db(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_keep_first_message_and_sort_fields() {
        let mut e = FieldErrors::new();
        e.add("email", "must not be blank");
        e.add("email", "invalid email format");
        e.add("ciudad", "must not be blank");
        assert_eq!(e.len(), 2);
        assert_eq!(e.get("email"), Some("must not be blank"));
        assert_eq!(e.to_string(), "ciudad: must not be blank; email: must not be blank");
    }

    #[test]
    fn absorb_merges_only_validation_errors() {
        let mut e = FieldErrors::new();
        e.absorb(Err(ModelError::Validation(FieldErrors::single("nombre", "must not be blank"))));
        e.absorb(Err(ModelError::Db("boom".into())));
        e.absorb(Ok(()));
        assert_eq!(e.len(), 1);
        assert!(matches!(e.into_result(), Err(ModelError::Validation(_))));
    }

    #[test]
    fn record_not_updated_maps_to_not_found() {
        assert!(matches!(ModelError::from_db(DbErr::RecordNotUpdated), ModelError::NotFound(_)));
        assert!(matches!(ModelError::from_db(DbErr::Custom("x".into())), ModelError::Db(_)));
    }
}
