use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `GET /api/all` response. Every field tolerates absence so a sparse or
/// partially populated payload degrades to defaults instead of failing to
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DatasetResponse {
    #[serde(default)]
    pub last_update: Option<String>,
    #[serde(default)]
    pub topics: BTreeMap<String, TopicPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TopicPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub summary_updated: Option<String>,
    #[serde(default)]
    pub news: Vec<NewsItemPayload>,
    #[serde(default)]
    pub international: Vec<NewsItemPayload>,
    #[serde(default)]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NewsItemPayload {
    /// Display-only time label, already formatted by the service.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: String,
    /// Original-language title; international items only.
    #[serde(default)]
    pub title_original: Option<String>,
}

/// `GET /api/loading-status` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct LoadingStatus {
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub current: u64,
    #[serde(default)]
    pub total: u64,
}

/// `PUT /api/admin/topics/reorder` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderRequest {
    pub order: Vec<ReorderEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderEntry {
    pub id: String,
    pub order: usize,
}

/// Completion events emitted by the client thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    DatasetFetched(Result<DatasetResponse, ApiError>),
    StatusPolled(Result<LoadingStatus, ApiError>),
    NewsRefreshFinished(Result<(), ApiError>),
    SummaryRefreshFinished(Result<(), ApiError>),
    OrderPersisted(Result<(), ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiFailure,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFailure {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    Decode,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::InvalidUrl => write!(f, "invalid url"),
            ApiFailure::Network => write!(f, "network error"),
            ApiFailure::Timeout => write!(f, "timeout"),
            ApiFailure::HttpStatus(code) => write!(f, "http status {code}"),
            ApiFailure::Decode => write!(f, "decode error"),
        }
    }
}
