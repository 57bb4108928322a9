//! Typed extraction of request parameters
//!
//! Parameters arrive as an ordered multimap of strings (query string and
//! form body). Required extractors fail with a missing-parameter error,
//! optional ones fall back to a default. Present values that cannot be
//! coerced fail with an invalid-argument error.

use crate::annotation::{ApiError, ApiResult};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Multi-valued request parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    values: HashMap<String, Vec<String>>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, keeping earlier values of the same name
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    /// Builder-style [`push`](Self::push)
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Non-empty values of a parameter, in order
    pub fn strings(&self, name: &str) -> Vec<String> {
        self.values
            .get(name)
            .map(|values| values.iter().filter(|v| !v.is_empty()).cloned().collect())
            .unwrap_or_default()
    }

    /// First non-empty value of a parameter, or `""`
    pub fn string(&self, name: &str) -> String {
        self.first(name).unwrap_or_default().to_string()
    }

    pub fn required_string(&self, name: &str, message: &str) -> ApiResult<String> {
        self.first(name)
            .map(str::to_string)
            .ok_or_else(|| ApiError::missing_parameter(message))
    }

    pub fn required_strings(&self, name: &str, message: &str) -> ApiResult<Vec<String>> {
        let values = self.strings(name);
        if values.is_empty() {
            return Err(ApiError::missing_parameter(message));
        }
        Ok(values)
    }

    pub fn required_int(&self, name: &str, message: &str) -> ApiResult<i32> {
        let raw = self
            .first(name)
            .ok_or_else(|| ApiError::missing_parameter(message))?;
        raw.trim()
            .parse()
            .map_err(|_| ApiError::invalid_argument(format!("Invalid {} parameter: {}", name, raw)))
    }

    /// `true` for `true`, `on` or `1` (any case), `false` for anything else
    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        match self.first(name) {
            None => default,
            Some(raw) => matches!(raw.to_lowercase().as_str(), "true" | "on" | "1"),
        }
    }

    /// Values parsed as milliseconds since the Unix epoch
    ///
    /// Any entry that is not a representable timestamp fails the whole list.
    pub fn times(&self, name: &str) -> ApiResult<Vec<DateTime<Utc>>> {
        self.strings(name)
            .iter()
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .ok()
                    .and_then(DateTime::<Utc>::from_timestamp_millis)
                    .ok_or_else(|| {
                        ApiError::invalid_argument(format!("Invalid {} parameter: {}", name, raw))
                    })
            })
            .collect()
    }

    fn first(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)?
            .iter()
            .map(String::as_str)
            .find(|v| !v.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

impl<K, V> Extend<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.push(name, value);
        }
    }
}
