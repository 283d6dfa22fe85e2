use crate::state::{LoadState, TopicId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardViewModel {
    pub load: LoadState,
    pub last_update: Option<String>,
    pub topic_count: usize,
    pub cards: Vec<CardView>,
    pub news_refresh_busy: bool,
    pub summary_refresh_busy: bool,
    pub dragging: Option<TopicId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: TopicId,
    pub name: String,
    pub icon: String,
    /// Already capped to the display limit.
    pub keywords: Vec<String>,
    pub summary: String,
    pub summary_updated: Option<String>,
    pub news: Vec<NewsRowView>,
    pub international: Vec<NewsRowView>,
    pub news_updated: bool,
    pub international_updated: bool,
    pub dragging: bool,
    pub drop_target: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRowView {
    pub time: String,
    pub source: String,
    pub link: String,
    pub title: String,
    pub title_original: Option<String>,
}
