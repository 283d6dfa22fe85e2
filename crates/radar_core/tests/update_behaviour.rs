use std::sync::Once;

use radar_core::{
    update, DashboardState, Effect, LoadState, Msg, NewsSnapshot, TopicSnapshot,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(radar_logging::initialize_for_tests);
}

fn item(title: &str) -> NewsSnapshot {
    NewsSnapshot {
        title: title.to_string(),
        ..NewsSnapshot::default()
    }
}

fn topic(id: &str, order: Option<i64>, news: usize, international: usize) -> TopicSnapshot {
    TopicSnapshot {
        id: id.to_string(),
        name: format!("Topic {id}"),
        news: (0..news).map(|i| item(&format!("{id} news {i}"))).collect(),
        international: (0..international)
            .map(|i| item(&format!("{id} intl {i}")))
            .collect(),
        order,
        ..TopicSnapshot::default()
    }
}

fn load(state: DashboardState, topics: Vec<TopicSnapshot>) -> (DashboardState, Vec<Effect>) {
    update(
        state,
        Msg::DatasetLoaded {
            last_update: Some("2026-02-11T08:30:00".to_string()),
            topics,
        },
    )
}

#[test]
fn reload_request_emits_fetch() {
    init_logging();
    let state = DashboardState::new();
    assert_eq!(state.view().load, LoadState::Loading);

    let (_state, effects) = update(state, Msg::ReloadRequested);
    assert_eq!(effects, vec![Effect::FetchDataset]);
}

#[test]
fn dataset_load_orders_cards_by_hint_then_id() {
    init_logging();
    let state = DashboardState::new();
    let (mut state, effects) = load(
        state,
        vec![
            topic("pension", Some(2), 1, 0),
            topic("migrants", Some(0), 1, 0),
            topic("housing", None, 1, 0),
            topic("energy", None, 1, 0),
        ],
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.load, LoadState::Ready);
    assert_eq!(view.topic_count, 4);
    assert_eq!(view.last_update.as_deref(), Some("2026-02-11T08:30:00"));
    let ids: Vec<_> = view.cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["migrants", "pension", "energy", "housing"]);
}

#[test]
fn dataset_failure_shows_error_and_retry_refetches() {
    init_logging();
    let (state, _) = load(DashboardState::new(), vec![topic("energy", None, 1, 0)]);

    let (mut state, effects) = update(
        state,
        Msg::DatasetFailed {
            message: "connection refused".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.load, LoadState::Failed("connection refused".to_string()));
    assert!(view.cards.is_empty());

    let (_state, effects) = update(state, Msg::ReloadRequested);
    assert_eq!(effects, vec![Effect::FetchDataset]);
}

#[test]
fn new_items_flag_rises_once_per_growth() {
    init_logging();
    let (state, _) = load(DashboardState::new(), vec![topic("energy", None, 2, 0)]);
    // First appearance with items counts as growth from zero.
    assert!(state.view().cards[0].news_updated);

    let (state, _) = load(state, vec![topic("energy", None, 2, 0)]);
    assert!(!state.view().cards[0].news_updated);

    let (state, _) = load(state, vec![topic("energy", None, 3, 0)]);
    assert!(state.view().cards[0].news_updated);

    let (state, _) = load(state, vec![topic("energy", None, 3, 0)]);
    assert!(!state.view().cards[0].news_updated);
}

#[test]
fn emptied_feed_rearms_the_flag() {
    init_logging();
    let (state, _) = load(DashboardState::new(), vec![topic("energy", None, 2, 0)]);
    let (state, _) = load(state, vec![topic("energy", None, 0, 0)]);
    assert!(!state.view().cards[0].news_updated);

    let (state, _) = load(state, vec![topic("energy", None, 1, 0)]);
    assert!(state.view().cards[0].news_updated);
}

#[test]
fn feeds_flag_independently_in_view() {
    init_logging();
    let (state, _) = load(DashboardState::new(), vec![topic("energy", None, 1, 1)]);
    let (state, _) = load(state, vec![topic("energy", None, 1, 2)]);

    let card = &state.view().cards[0];
    assert!(!card.news_updated);
    assert!(card.international_updated);
}

#[test]
fn news_refresh_triggers_then_reloads_on_success() {
    init_logging();
    let state = DashboardState::new();

    let (state, effects) = update(state, Msg::RefreshNewsRequested);
    assert_eq!(effects, vec![Effect::TriggerNewsRefresh]);
    assert!(state.view().news_refresh_busy);

    // A second request while the first is in flight does nothing.
    let (state, effects) = update(state, Msg::RefreshNewsRequested);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::NewsRefreshFinished { ok: true });
    assert_eq!(effects, vec![Effect::FetchDataset]);
    assert!(!state.view().news_refresh_busy);
}

#[test]
fn news_refresh_failure_restores_button_without_reload() {
    init_logging();
    let (state, _) = update(DashboardState::new(), Msg::RefreshNewsRequested);

    let (state, effects) = update(state, Msg::NewsRefreshFinished { ok: false });
    assert!(effects.is_empty());
    assert!(!state.view().news_refresh_busy);
}

#[test]
fn summary_refresh_follows_the_same_protocol() {
    init_logging();
    let (state, effects) = update(DashboardState::new(), Msg::RefreshSummaryRequested);
    assert_eq!(effects, vec![Effect::TriggerSummaryRefresh]);
    assert!(state.view().summary_refresh_busy);

    let (state, effects) = update(state, Msg::SummaryRefreshFinished { ok: false });
    assert!(effects.is_empty());
    assert!(!state.view().summary_refresh_busy);

    let (state, _) = update(state, Msg::RefreshSummaryRequested);
    let (_state, effects) = update(state, Msg::SummaryRefreshFinished { ok: true });
    assert_eq!(effects, vec![Effect::FetchDataset]);
}

#[test]
fn keywords_are_capped_for_display() {
    init_logging();
    let mut t = topic("energy", None, 0, 0);
    t.keywords = (0..12).map(|i| format!("kw{i}")).collect();
    let (state, _) = load(DashboardState::new(), vec![t]);

    assert_eq!(state.view().cards[0].keywords.len(), 8);
}
