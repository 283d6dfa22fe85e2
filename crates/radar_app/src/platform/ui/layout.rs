use ratatui::layout::Rect;

use radar_core::DashboardViewModel;

use super::constants::{CARD_HEIGHT, HANDLE_WIDTH};

/// Screen rectangles of the rendered cards, kept across draws for mouse
/// hit-testing.
#[derive(Debug, Clone, Default)]
pub struct CardRects {
    entries: Vec<CardRect>,
}

#[derive(Debug, Clone)]
pub struct CardRect {
    pub id: String,
    pub area: Rect,
    pub handle: Rect,
}

impl CardRects {
    pub fn iter(&self) -> impl Iterator<Item = &CardRect> {
        self.entries.iter()
    }

    pub fn card_at(&self, x: u16, y: u16) -> Option<&CardRect> {
        self.entries.iter().find(|card| contains(card.area, x, y))
    }

    pub fn handle_at(&self, x: u16, y: u16) -> Option<&CardRect> {
        self.entries.iter().find(|card| contains(card.handle, x, y))
    }
}

/// Stacks cards top to bottom inside `body`, skipping `scroll` cards from
/// the top and clipping whatever does not fully fit.
pub fn card_rects(body: Rect, view: &DashboardViewModel, scroll: usize) -> CardRects {
    let mut entries = Vec::new();
    let mut y = body.y;
    for card in view.cards.iter().skip(scroll) {
        if y + CARD_HEIGHT > body.y + body.height {
            break;
        }
        let area = Rect::new(body.x, y, body.width, CARD_HEIGHT);
        let handle = Rect::new(area.x, area.y, HANDLE_WIDTH.min(area.width), 1);
        entries.push(CardRect {
            id: card.id.clone(),
            area,
            handle,
        });
        y += CARD_HEIGHT;
    }
    CardRects { entries }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
