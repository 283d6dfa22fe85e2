//! Radar core: pure dashboard state machine and view-model helpers.
mod changes;
mod effect;
mod msg;
mod reorder;
mod state;
mod status;
mod update;
mod view_model;

pub use changes::{ChangeTracker, FeedFlags};
pub use effect::{Effect, OrderEntry};
pub use msg::Msg;
pub use reorder::{place, DragSession};
pub use state::{
    DashboardState, LoadState, NewsSnapshot, TopicId, TopicSnapshot, KEYWORD_DISPLAY_LIMIT,
    ORDER_UNSET,
};
pub use status::{JobStatus, StatusEdge};
pub use update::update;
pub use view_model::{CardView, DashboardViewModel, NewsRowView};
