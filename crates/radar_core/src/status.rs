/// Ingestion-job status as last observed from the aggregation service.
///
/// The service owns this value; the client only polls it. `Unknown` covers
/// both "never polled" and "poll failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobStatus {
    #[default]
    Unknown,
    Running,
    IdleEmpty,
    IdleNonempty,
}

impl JobStatus {
    /// Classifies a polled `{is_loading, total}` payload.
    pub fn classify(is_loading: bool, total: u64) -> Self {
        if is_loading {
            Self::Running
        } else if total > 0 {
            Self::IdleNonempty
        } else {
            Self::IdleEmpty
        }
    }
}

/// Rising-edge detector for "ingestion finished with results".
///
/// Fires exactly on the Running -> IdleNonempty transition. Any other
/// observation (including repeated IdleNonempty without a Running in
/// between) replaces the memory without firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusEdge {
    last: JobStatus,
}

impl StatusEdge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> JobStatus {
        self.last
    }

    /// Records the observation and reports whether a reload should run.
    pub fn observe(&mut self, status: JobStatus) -> bool {
        let finished = self.last == JobStatus::Running && status == JobStatus::IdleNonempty;
        self.last = status;
        finished
    }
}
