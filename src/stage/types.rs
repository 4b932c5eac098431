use serde::{Deserialize, Serialize};

/// A field searched by [`search_filter_expr_stage`](super::search_filter_expr_stage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum SearchField {
    /// Holds a single value; matched after conversion to string.
    Scalar(String),
    /// Holds an array; matches when any element does.
    Array(String),
}

impl SearchField {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(n) | Self::Array(n) => n,
        }
    }

    /// `$`-prefixed field path for use inside expressions.
    pub(crate) fn path(&self) -> String {
        format!("${}", self.name())
    }
}

impl From<&str> for SearchField {
    fn from(name: &str) -> Self {
        Self::Scalar(name.to_owned())
    }
}
