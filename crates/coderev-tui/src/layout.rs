//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;

/// Error banner: top border + message row + bottom border
const BANNER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, endpoint and keybindings
    pub header: Rect,

    /// Error banner row, present only while an error is shown
    pub banner: Option<Rect>,

    /// Code editor (left half of the body)
    pub editor: Rect,

    /// Results panel (right half of the body)
    pub results: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_banner` - Reserve a row for the error banner
pub fn create(area: Rect, show_banner: bool) -> ScreenAreas {
    let (header, banner, body) = if show_banner {
        let chunks = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Min(3),
        ])
        .split(area);
        (chunks[0], Some(chunks[1]), chunks[2])
    } else {
        let chunks =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).split(area);
        (chunks[0], None, chunks[1])
    };

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);

    ScreenAreas {
        header,
        banner,
        editor: columns[0],
        results: columns[1],
    }
}
