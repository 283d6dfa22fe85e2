use radar_client::{ClientEvent, ClientHandle, ClientSettings, ReorderEntry, TopicPayload};
use radar_core::{Effect, JobStatus, Msg, NewsSnapshot, TopicSnapshot};
use radar_logging::radar_info;

/// Executes core effects against the client thread and translates its
/// completion events back into core messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            client: ClientHandle::new(settings),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchDataset => {
                    radar_info!("FetchDataset tick={}", radar_logging::get_loop_tick());
                    self.client.fetch_dataset();
                }
                Effect::PollStatus => self.client.poll_status(),
                Effect::TriggerNewsRefresh => {
                    radar_info!("TriggerNewsRefresh");
                    self.client.trigger_news_refresh();
                }
                Effect::TriggerSummaryRefresh => {
                    radar_info!("TriggerSummaryRefresh");
                    self.client.trigger_summary_refresh();
                }
                Effect::PersistOrder { order } => {
                    radar_info!("PersistOrder cards={}", order.len());
                    self.client.persist_order(
                        order
                            .into_iter()
                            .map(|entry| ReorderEntry {
                                id: entry.id,
                                order: entry.order,
                            })
                            .collect(),
                    );
                }
            }
        }
    }

    /// Drains one pending client event, mapped into a core message.
    pub fn try_recv(&self) -> Option<Msg> {
        self.client.try_recv().map(map_client_event)
    }
}

fn map_client_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::DatasetFetched(Ok(dataset)) => Msg::DatasetLoaded {
            last_update: dataset.last_update,
            topics: dataset
                .topics
                .into_iter()
                .map(|(id, payload)| map_topic(id, payload))
                .collect(),
        },
        ClientEvent::DatasetFetched(Err(err)) => Msg::DatasetFailed {
            message: err.to_string(),
        },
        ClientEvent::StatusPolled(Ok(status)) => Msg::StatusPolled {
            status: JobStatus::classify(status.is_loading, status.total),
        },
        // A failed poll observes as Unknown, which resets the edge detector.
        ClientEvent::StatusPolled(Err(_)) => Msg::StatusPolled {
            status: JobStatus::Unknown,
        },
        ClientEvent::NewsRefreshFinished(result) => Msg::NewsRefreshFinished {
            ok: result.is_ok(),
        },
        ClientEvent::SummaryRefreshFinished(result) => Msg::SummaryRefreshFinished {
            ok: result.is_ok(),
        },
        ClientEvent::OrderPersisted(result) => Msg::OrderPersisted {
            ok: result.is_ok(),
        },
    }
}

fn map_topic(id: String, payload: TopicPayload) -> TopicSnapshot {
    TopicSnapshot {
        id,
        name: payload.name,
        icon: payload.icon,
        keywords: payload.keywords,
        summary: payload.summary,
        summary_updated: payload.summary_updated,
        news: payload.news.into_iter().map(map_item).collect(),
        international: payload.international.into_iter().map(map_item).collect(),
        order: payload.order,
    }
}

fn map_item(item: radar_client::NewsItemPayload) -> NewsSnapshot {
    NewsSnapshot {
        time: item.time,
        source: item.source,
        link: item.link,
        title: item.title,
        title_original: item.title_original,
    }
}
