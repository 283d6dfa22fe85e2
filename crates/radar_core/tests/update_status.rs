use radar_core::{update, DashboardState, Effect, JobStatus, Msg, StatusEdge};

fn init_logging() {
    radar_logging::initialize_for_tests();
}

fn observe(state: DashboardState, status: JobStatus) -> (DashboardState, Vec<Effect>) {
    update(state, Msg::StatusPolled { status })
}

#[test]
fn classify_maps_the_polled_payload() {
    assert_eq!(JobStatus::classify(true, 0), JobStatus::Running);
    assert_eq!(JobStatus::classify(true, 7), JobStatus::Running);
    assert_eq!(JobStatus::classify(false, 7), JobStatus::IdleNonempty);
    assert_eq!(JobStatus::classify(false, 0), JobStatus::IdleEmpty);
}

#[test]
fn poll_tick_requests_a_status_poll() {
    init_logging();
    let (_state, effects) = update(DashboardState::new(), Msg::PollTick);
    assert_eq!(effects, vec![Effect::PollStatus]);
}

#[test]
fn finishing_ingestion_reloads_exactly_once() {
    init_logging();
    let state = DashboardState::new();
    let (state, effects) = observe(state, JobStatus::Running);
    assert!(effects.is_empty());
    let (state, effects) = observe(state, JobStatus::Running);
    assert!(effects.is_empty());

    let (state, effects) = observe(state, JobStatus::IdleNonempty);
    assert_eq!(effects, vec![Effect::FetchDataset]);

    // Staying idle does not retrigger.
    let (_state, effects) = observe(state, JobStatus::IdleNonempty);
    assert!(effects.is_empty());
}

#[test]
fn idle_without_a_prior_running_never_reloads() {
    init_logging();
    let state = DashboardState::new();
    let (state, effects) = observe(state, JobStatus::IdleNonempty);
    assert!(effects.is_empty());
    let (_state, effects) = observe(state, JobStatus::IdleNonempty);
    assert!(effects.is_empty());
}

#[test]
fn empty_result_resets_the_edge_memory() {
    init_logging();
    let state = DashboardState::new();
    let (state, _) = observe(state, JobStatus::Running);
    let (state, effects) = observe(state, JobStatus::IdleEmpty);
    assert!(effects.is_empty());

    let (_state, effects) = observe(state, JobStatus::IdleNonempty);
    assert!(effects.is_empty());
}

#[test]
fn failed_poll_resets_the_edge_memory() {
    init_logging();
    let state = DashboardState::new();
    let (state, _) = observe(state, JobStatus::Running);
    // A poll failure is observed as Unknown.
    let (state, effects) = observe(state, JobStatus::Unknown);
    assert!(effects.is_empty());

    let (_state, effects) = observe(state, JobStatus::IdleNonempty);
    assert!(effects.is_empty());
}

#[test]
fn edge_detector_is_usable_standalone() {
    let mut edge = StatusEdge::new();
    assert!(!edge.observe(JobStatus::Running));
    assert!(edge.observe(JobStatus::IdleNonempty));
    assert!(!edge.observe(JobStatus::IdleNonempty));
    assert_eq!(edge.last(), JobStatus::IdleNonempty);
}
