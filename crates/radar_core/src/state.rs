use crate::changes::ChangeTracker;
use crate::effect::OrderEntry;
use crate::reorder::{place, DragSession};
use crate::status::{JobStatus, StatusEdge};
use crate::view_model::{CardView, DashboardViewModel, NewsRowView};

pub type TopicId = String;

/// Sort key for topics the service has not assigned an explicit order, so
/// un-ordered topics land after every ordered one.
pub const ORDER_UNSET: i64 = i64::MAX;

/// How many keywords a card shows at most.
pub const KEYWORD_DISPLAY_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsSnapshot {
    pub time: String,
    pub source: String,
    pub link: String,
    pub title: String,
    /// Original-language title; only international items carry one.
    pub title_original: Option<String>,
}

/// One topic as delivered by the aggregation service, already decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicSnapshot {
    pub id: TopicId,
    pub name: String,
    pub icon: String,
    pub keywords: Vec<String>,
    pub summary: String,
    pub summary_updated: Option<String>,
    pub news: Vec<NewsSnapshot>,
    pub international: Vec<NewsSnapshot>,
    pub order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing fetched yet.
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// A rendered card: the topic plus its per-feed "new items" flags from the
/// most recent change-tracker pass.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Card {
    topic: TopicSnapshot,
    news_updated: bool,
    international_updated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    load: LoadState,
    last_update: Option<String>,
    cards: Vec<Card>,
    tracker: ChangeTracker,
    drag: DragSession,
    status_edge: StatusEdge,
    news_refresh_busy: bool,
    summary_refresh_busy: bool,
    dirty: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> DashboardViewModel {
        DashboardViewModel {
            load: self.load.clone(),
            last_update: self.last_update.clone(),
            topic_count: self.cards.len(),
            cards: self.cards.iter().map(|card| self.card_view(card)).collect(),
            news_refresh_busy: self.news_refresh_busy,
            summary_refresh_busy: self.summary_refresh_busy,
            dragging: self.drag.dragged().map(ToOwned::to_owned),
        }
    }

    /// Returns whether the view changed since the last consume. The render
    /// loop uses this to coalesce redraws.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn card_view(&self, card: &Card) -> CardView {
        let topic = &card.topic;
        CardView {
            id: topic.id.clone(),
            name: topic.name.clone(),
            icon: topic.icon.clone(),
            keywords: topic
                .keywords
                .iter()
                .take(KEYWORD_DISPLAY_LIMIT)
                .cloned()
                .collect(),
            summary: topic.summary.clone(),
            summary_updated: topic.summary_updated.clone(),
            news: topic.news.iter().map(news_row).collect(),
            international: topic.international.iter().map(news_row).collect(),
            news_updated: card.news_updated,
            international_updated: card.international_updated,
            dragging: self.drag.dragged() == Some(topic.id.as_str()),
            drop_target: self.drag.is_marked(&topic.id),
        }
    }

    /// Replaces the rendered dataset wholesale. Topics are ordered by their
    /// order hint (ties and missing hints break by id), then each is run
    /// through the change tracker so its baselines match what is rendered.
    pub(crate) fn apply_dataset(&mut self, last_update: Option<String>, topics: Vec<TopicSnapshot>) {
        let mut topics = topics;
        topics.sort_by(|a, b| {
            let ka = (a.order.unwrap_or(ORDER_UNSET), &a.id);
            let kb = (b.order.unwrap_or(ORDER_UNSET), &b.id);
            ka.cmp(&kb)
        });

        let tracker = &mut self.tracker;
        self.cards = topics
            .into_iter()
            .map(|topic| {
                let flags = tracker.observe(&topic.id, topic.news.len(), topic.international.len());
                Card {
                    news_updated: flags.news,
                    international_updated: flags.international,
                    topic,
                }
            })
            .collect();
        self.last_update = last_update;
        self.load = LoadState::Ready;
        // A reload replaces the cards a drag was anchored to.
        self.drag = DragSession::default();
        self.dirty = true;
    }

    pub(crate) fn fail_load(&mut self, message: String) {
        self.load = LoadState::Failed(message);
        self.cards.clear();
        self.drag = DragSession::default();
        self.dirty = true;
    }

    pub(crate) fn observe_status(&mut self, status: JobStatus) -> bool {
        self.status_edge.observe(status)
    }

    pub(crate) fn news_refresh_busy(&self) -> bool {
        self.news_refresh_busy
    }

    pub(crate) fn summary_refresh_busy(&self) -> bool {
        self.summary_refresh_busy
    }

    pub(crate) fn set_news_refresh_busy(&mut self, busy: bool) {
        self.news_refresh_busy = busy;
        self.dirty = true;
    }

    pub(crate) fn set_summary_refresh_busy(&mut self, busy: bool) {
        self.summary_refresh_busy = busy;
        self.dirty = true;
    }

    pub(crate) fn start_drag(&mut self, id: &str) {
        if self.cards.iter().any(|card| card.topic.id == id) {
            self.drag.start(id.to_owned());
            self.dirty = true;
        }
    }

    pub(crate) fn enter_drop_target(&mut self, id: &str) {
        self.drag.mark(id);
        self.dirty = true;
    }

    pub(crate) fn leave_drop_target(&mut self, id: &str) {
        self.drag.unmark(id);
        self.dirty = true;
    }

    pub(crate) fn cancel_drag(&mut self) {
        if self.drag.finish().is_some() {
            self.dirty = true;
        }
    }

    /// Completes a drop: reconciles the card order and returns the full
    /// order list to persist. Returns `None` (after clearing the session)
    /// when no drag was active, the target is the dragged card itself, or
    /// either card is no longer rendered.
    pub(crate) fn finish_drag(&mut self, target: &str) -> Option<Vec<OrderEntry>> {
        let dragged = self.drag.finish()?;
        self.dirty = true;
        if dragged == target {
            return None;
        }
        let dragged_at = self.position(&dragged)?;
        let target_at = self.position(target)?;
        place(&mut self.cards, dragged_at, target_at);
        Some(self.order_entries())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.topic.id == id)
    }

    fn order_entries(&self) -> Vec<OrderEntry> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| OrderEntry {
                id: card.topic.id.clone(),
                order: index,
            })
            .collect()
    }
}

fn news_row(item: &NewsSnapshot) -> NewsRowView {
    NewsRowView {
        time: item.time.clone(),
        source: item.source.clone(),
        link: item.link.clone(),
        title: item.title.clone(),
        title_original: item.title_original.clone(),
    }
}
