pub mod admin;
pub mod cart;
pub mod contact;
pub mod order;

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use thiserror::Error;
use validator::ValidationErrors;

use crate::storage::StoreError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to validate: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    NotFound(String),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Field names that failed validation, sorted.
    pub fn invalid_fields(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => {
                let mut fields: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                fields.sort();
                fields
            }
            _ => Vec::new(),
        }
    }

    /// True when every invalid field failed because it was left empty.
    pub fn only_missing_fields(&self) -> bool {
        match self {
            Self::Validation(errors) => errors
                .field_errors()
                .values()
                .all(|errors| errors.iter().any(|error| error.code == REQUIRED_RULE)),
            _ => false,
        }
    }
}

/// Validator code of the `length(min = 1)` rule every required field carries.
const REQUIRED_RULE: &str = "length";

/// `<prefix>-<unix millis>`, bumped past any id already taken.
pub(crate) fn time_based_id<'a>(
    prefix: &str,
    now: DateTime<Utc>,
    taken: impl IntoIterator<Item = &'a str>,
) -> String {
    let taken: HashSet<&str> = taken.into_iter().collect();
    let mut millis = now.timestamp_millis();
    loop {
        let id = format!("{prefix}-{millis}");
        if !taken.contains(id.as_str()) {
            return id;
        }
        millis += 1;
    }
}

/// Trims a form field and maps blanks to `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
