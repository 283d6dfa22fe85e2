//! Radar client: aggregation-service I/O and command execution.
mod api;
mod handle;
mod types;

pub use api::{ClientSettings, HttpRadarApi, RadarApi};
pub use handle::ClientHandle;
pub use types::{
    ApiError, ApiFailure, ClientEvent, DatasetResponse, LoadingStatus, NewsItemPayload,
    ReorderEntry, ReorderRequest, TopicPayload,
};
