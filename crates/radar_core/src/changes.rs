use std::collections::BTreeMap;

use crate::state::TopicId;

/// Which feeds of a topic gained items since the previous render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedFlags {
    pub news: bool,
    pub international: bool,
}

/// Per-topic item-count baselines for the domestic and international feeds.
///
/// `observe` is a one-shot rising-edge detector: a feed flags only when its
/// count strictly exceeds the stored baseline, and the baseline is then
/// overwritten regardless, so the same count never flags twice. Shrinking
/// counts lower the baseline without flagging, which lets a later arrival
/// flag again. Entries for topics that vanish from the payload are never
/// pruned; they are simply never read again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangeTracker {
    news_seen: BTreeMap<TopicId, usize>,
    international_seen: BTreeMap<TopicId, usize>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares the observed counts against the baselines, overwrites the
    /// baselines, and returns the per-feed flags.
    pub fn observe(&mut self, id: &str, news: usize, international: usize) -> FeedFlags {
        FeedFlags {
            news: advance(&mut self.news_seen, id, news),
            international: advance(&mut self.international_seen, id, international),
        }
    }
}

fn advance(seen: &mut BTreeMap<TopicId, usize>, id: &str, count: usize) -> bool {
    let previous = seen.insert(id.to_owned(), count).unwrap_or(0);
    count > previous
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_with_items_flags() {
        let mut tracker = ChangeTracker::new();
        let flags = tracker.observe("energy", 3, 0);
        assert!(flags.news);
        assert!(!flags.international);
    }

    #[test]
    fn flag_clears_once_baseline_catches_up() {
        let mut tracker = ChangeTracker::new();
        assert!(tracker.observe("energy", 3, 0).news);
        assert!(!tracker.observe("energy", 3, 0).news);
        assert!(tracker.observe("energy", 4, 0).news);
        assert!(!tracker.observe("energy", 4, 0).news);
    }

    #[test]
    fn shrinking_feed_resets_baseline_without_flagging() {
        let mut tracker = ChangeTracker::new();
        tracker.observe("energy", 5, 0);
        assert!(!tracker.observe("energy", 0, 0).news);
        assert!(tracker.observe("energy", 1, 0).news);
    }

    #[test]
    fn feeds_flag_independently() {
        let mut tracker = ChangeTracker::new();
        tracker.observe("energy", 2, 2);
        let flags = tracker.observe("energy", 2, 3);
        assert!(!flags.news);
        assert!(flags.international);
    }
}
