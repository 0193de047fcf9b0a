//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?includeEmpty=` flag accepted by the category listings.
///
/// Only the literal value `true` enables it; anything else (including a
/// missing parameter) leaves empty categories out.
#[derive(Debug, Default, Deserialize)]
pub struct IncludeEmptyParams {
    #[serde(rename = "includeEmpty")]
    pub include_empty: Option<String>,
}

impl IncludeEmptyParams {
    pub fn include_empty(&self) -> bool {
        self.include_empty.as_deref() == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(value: Option<&str>) -> IncludeEmptyParams {
        IncludeEmptyParams {
            include_empty: value.map(str::to_string),
        }
    }

    #[test]
    fn only_literal_true_enables() {
        assert!(params(Some("true")).include_empty());
        assert!(!params(Some("TRUE")).include_empty());
        assert!(!params(Some("1")).include_empty());
        assert!(!params(None).include_empty());
    }
}
