use crate::state::{TopicId, TopicSnapshot};
use crate::status::JobStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial load, the retry action, or the fixed reload interval firing.
    ReloadRequested,
    /// Status-poll interval firing.
    PollTick,
    /// Full dataset fetch resolved.
    DatasetLoaded {
        last_update: Option<String>,
        topics: Vec<TopicSnapshot>,
    },
    /// Full dataset fetch failed.
    DatasetFailed { message: String },
    /// Loading-status poll resolved; failed polls observe as `Unknown`.
    StatusPolled { status: JobStatus },
    /// Operator asked for a server-side news refresh.
    RefreshNewsRequested,
    /// The news-refresh endpoint reported back.
    NewsRefreshFinished { ok: bool },
    /// Operator asked for a server-side summary refresh.
    RefreshSummaryRequested,
    /// The summary-refresh endpoint reported back.
    SummaryRefreshFinished { ok: bool },
    /// Pointer pressed on a card's drag handle.
    DragStarted { id: TopicId },
    /// Pointer entered a card while a drag is active.
    DragEntered { id: TopicId },
    /// Pointer left a card it had entered, without dropping.
    DragLeft { id: TopicId },
    /// Dragged card released over a target card.
    DragDropped { target: TopicId },
    /// Drag ended without a valid drop.
    DragCancelled,
    /// Reorder persistence reported back.
    OrderPersisted { ok: bool },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
