use std::collections::BTreeSet;

use crate::state::TopicId;

/// Pointer-drag session over the rendered card list.
///
/// At most one card is dragged at a time. Drop-target marks are kept per
/// card so overlapping enter/leave sequences across adjacent cards clear
/// only the card that was actually left.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragSession {
    dragged: Option<TopicId>,
    marks: BTreeSet<TopicId>,
}

impl DragSession {
    pub fn dragged(&self) -> Option<&str> {
        self.dragged.as_deref()
    }

    pub fn is_marked(&self, id: &str) -> bool {
        self.marks.contains(id)
    }

    pub(crate) fn start(&mut self, id: TopicId) {
        self.dragged = Some(id);
        self.marks.clear();
    }

    /// Marks a card as drop target. The dragged card itself never marks,
    /// and nothing marks while no drag is active.
    pub(crate) fn mark(&mut self, id: &str) {
        match self.dragged.as_deref() {
            Some(dragged) if dragged != id => {
                self.marks.insert(id.to_owned());
            }
            _ => {}
        }
    }

    pub(crate) fn unmark(&mut self, id: &str) {
        self.marks.remove(id);
    }

    /// Ends the session, clearing every mark, and returns the card that was
    /// being dragged, if any.
    pub(crate) fn finish(&mut self) -> Option<TopicId> {
        self.marks.clear();
        self.dragged.take()
    }
}

/// Drop placement rule.
///
/// Dropping onto the adjacent next card moves the dragged card one position
/// forward past it; dropping onto the adjacent previous card moves it one
/// position backward. A non-adjacent drop trades the two positions while
/// every card between them keeps its relative order. All three cases
/// exchange exactly the dragged and target slots, so bystanders never move.
pub fn place<T>(cards: &mut [T], dragged: usize, target: usize) {
    if dragged == target || dragged >= cards.len() || target >= cards.len() {
        return;
    }
    cards.swap(dragged, target);
}
