//! Parameter types shared by several resources.

use serde::{Deserialize, Serialize};

/// Sort direction for list operations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// Parameters recognized by `list`-style operations.
///
/// Unset fields are not sent.
///
/// # Example
///
/// ```rust
/// use pact_api::rest::RequestArguments;
/// use pact_api::rest::resources::{ListParams, SortOrder};
/// use serde_json::json;
///
/// let params = ListParams {
///     states: Some(vec!["active".to_string(), "paused".to_string()]),
///     per_page: Some(10),
///     order: Some(SortOrder::Desc),
///     ..Default::default()
/// };
///
/// let args = RequestArguments::from_serialize(&params).unwrap();
/// assert_eq!(args.value("order"), Some(&json!("desc")));
/// assert!(!args.contains("page"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Only return records in these states. Sent comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,

    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Field to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}
