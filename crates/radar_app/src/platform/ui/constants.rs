use std::time::Duration;

/// Unconditional full-dataset reload cadence.
pub const RELOAD_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Ingestion-status poll cadence.
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// How long one loop iteration blocks waiting for terminal input.
pub const INPUT_POLL: Duration = Duration::from_millis(50);

/// Rows a rendered card occupies, borders included.
pub const CARD_HEIGHT: u16 = 15;

/// Columns at a card's top-left corner that act as the drag handle.
pub const HANDLE_WIDTH: u16 = 4;

/// Domestic items shown per card.
pub const NEWS_ROWS: usize = 4;

/// International items shown per card.
pub const INTL_ROWS: usize = 3;
