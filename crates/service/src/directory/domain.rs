use serde::{Deserialize, Deserializer, Serialize};

use super::sort::SortKey;
use crate::matching::TextMatch;
use crate::pagination::Pagination;

/// A directory row as stored and returned.
pub type Student = models::student::Model;

/// Full replacement body for add and update. Absent fields take their
/// empty/zero/false default and overwrite whatever was stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub age: i32,
    pub is_check: bool,
}

impl From<StudentInput> for models::student::Fields {
    fn from(i: StudentInput) -> Self {
        Self {
            first_name: i.first_name,
            last_name: i.last_name,
            email: i.email,
            address: i.address,
            city: i.city,
            age: i.age,
            is_check: i.is_check,
        }
    }
}

/// Raw list parameters from the query string. Empty values count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<i64>,
}

fn empty_as_none<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Resolved list request handed to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCriteria {
    /// Non-empty first-name substring, if any.
    pub search: Option<String>,
    pub search_match: TextMatch,
    pub sort: SortKey,
    pub pagination: Pagination,
}

/// One page of the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPage {
    /// Matching rows before pagination.
    pub total: u64,
    pub page: i64,
    pub page_size: i64,
    pub data: Vec<Student>,
}
