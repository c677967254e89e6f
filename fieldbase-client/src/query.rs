//! List options and their encoding into transport query parameters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat query mapping handed to the transport.
pub type QueryParams = BTreeMap<String, String>;

/// Pagination, sort and field selection for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    /// Field names to return, in order. Duplicates are sent as given.
    pub fields: Option<Vec<String>>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Encodes the options as query parameters.
    ///
    /// `fields` becomes a single comma-joined value (`fields=name,slug`), never
    /// an array-style parameter. An absent or empty list emits no `fields` key
    /// so the server default applies.
    pub fn encode(&self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(page) = self.page {
            query.insert("page".into(), page.to_string());
        }
        if let Some(limit) = self.limit {
            query.insert("limit".into(), limit.to_string());
        }
        if let Some(sort) = &self.sort {
            query.insert("sort".into(), sort.clone());
        }
        if let Some(fields) = self.fields.as_ref().filter(|f| !f.is_empty()) {
            query.insert("fields".into(), fields.join(","));
        }
        query
    }
}
