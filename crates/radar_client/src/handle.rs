use std::sync::{mpsc, Arc};
use std::thread;

use radar_logging::radar_warn;

use crate::api::{ClientSettings, HttpRadarApi, RadarApi};
use crate::{ClientEvent, ReorderEntry};

enum ClientCommand {
    FetchDataset,
    PollStatus,
    TriggerNewsRefresh,
    TriggerSummaryRefresh,
    PersistOrder { order: Vec<ReorderEntry> },
}

/// Handle to the client thread: commands go in over one channel, completion
/// events come back over another. The thread owns a tokio runtime; each
/// command runs as its own task, so a slow dataset fetch never blocks a
/// status poll.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(HttpRadarApi::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_dataset(&self) {
        let _ = self.cmd_tx.send(ClientCommand::FetchDataset);
    }

    pub fn poll_status(&self) {
        let _ = self.cmd_tx.send(ClientCommand::PollStatus);
    }

    pub fn trigger_news_refresh(&self) {
        let _ = self.cmd_tx.send(ClientCommand::TriggerNewsRefresh);
    }

    pub fn trigger_summary_refresh(&self) {
        let _ = self.cmd_tx.send(ClientCommand::TriggerSummaryRefresh);
    }

    pub fn persist_order(&self, order: Vec<ReorderEntry>) {
        let _ = self.cmd_tx.send(ClientCommand::PersistOrder { order });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn RadarApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    let event = match command {
        ClientCommand::FetchDataset => {
            let result = api.fetch_dataset().await;
            if let Err(err) = &result {
                radar_warn!("dataset fetch failed: {err}");
            }
            ClientEvent::DatasetFetched(result)
        }
        ClientCommand::PollStatus => ClientEvent::StatusPolled(api.fetch_loading_status().await),
        ClientCommand::TriggerNewsRefresh => {
            let result = api.trigger_news_refresh().await;
            if let Err(err) = &result {
                radar_warn!("news refresh failed: {err}");
            }
            ClientEvent::NewsRefreshFinished(result)
        }
        ClientCommand::TriggerSummaryRefresh => {
            let result = api.trigger_summary_refresh().await;
            if let Err(err) = &result {
                radar_warn!("summary refresh failed: {err}");
            }
            ClientEvent::SummaryRefreshFinished(result)
        }
        ClientCommand::PersistOrder { order } => {
            let result = api.persist_order(&order).await;
            if let Err(err) = &result {
                radar_warn!("order persistence failed: {err}");
            }
            ClientEvent::OrderPersisted(result)
        }
    };
    let _ = event_tx.send(event);
}
