//! Display adapter.
//!
//! The panel driver proper (16×2 character LCD over I²C) is an external
//! collaborator; this adapter renders the [`StatusView`] into the two
//! text lines the panel shows and hands them over.  [`LogDisplay`] is the
//! shipping implementation until the LCD board rev lands — it mirrors the
//! panel content onto the log console, which also makes bench bring-up
//! painless.

use log::info;

use crate::app::ports::DisplayPort;
use crate::app::view::StatusView;

/// Renders the panel lines to the log console.
pub struct LogDisplay;

impl Default for LogDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl LogDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayPort for LogDisplay {
    fn render(&mut self, view: &StatusView) {
        info!("display: {} | {}", view.line1(), view.line2());
    }
}
