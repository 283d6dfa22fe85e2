use crate::{DashboardState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DashboardState, msg: Msg) -> (DashboardState, Vec<Effect>) {
    let effects = match msg {
        Msg::ReloadRequested => vec![Effect::FetchDataset],
        Msg::PollTick => vec![Effect::PollStatus],
        Msg::DatasetLoaded {
            last_update,
            topics,
        } => {
            state.apply_dataset(last_update, topics);
            Vec::new()
        }
        Msg::DatasetFailed { message } => {
            state.fail_load(message);
            Vec::new()
        }
        Msg::StatusPolled { status } => {
            if state.observe_status(status) {
                vec![Effect::FetchDataset]
            } else {
                Vec::new()
            }
        }
        Msg::RefreshNewsRequested => {
            if state.news_refresh_busy() {
                Vec::new()
            } else {
                state.set_news_refresh_busy(true);
                vec![Effect::TriggerNewsRefresh]
            }
        }
        Msg::NewsRefreshFinished { ok } => {
            state.set_news_refresh_busy(false);
            if ok {
                vec![Effect::FetchDataset]
            } else {
                Vec::new()
            }
        }
        Msg::RefreshSummaryRequested => {
            if state.summary_refresh_busy() {
                Vec::new()
            } else {
                state.set_summary_refresh_busy(true);
                vec![Effect::TriggerSummaryRefresh]
            }
        }
        Msg::SummaryRefreshFinished { ok } => {
            state.set_summary_refresh_busy(false);
            if ok {
                vec![Effect::FetchDataset]
            } else {
                Vec::new()
            }
        }
        Msg::DragStarted { id } => {
            state.start_drag(&id);
            Vec::new()
        }
        Msg::DragEntered { id } => {
            state.enter_drop_target(&id);
            Vec::new()
        }
        Msg::DragLeft { id } => {
            state.leave_drop_target(&id);
            Vec::new()
        }
        Msg::DragDropped { target } => match state.finish_drag(&target) {
            Some(order) => vec![Effect::PersistOrder { order }],
            None => Vec::new(),
        },
        Msg::DragCancelled => {
            state.cancel_drag();
            Vec::new()
        }
        Msg::OrderPersisted { ok } => {
            if ok {
                Vec::new()
            } else {
                // Server truth wins; the local rearrangement is discarded.
                vec![Effect::FetchDataset]
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
