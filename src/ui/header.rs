//! Header rendering: logo and API location.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::theme::MUTED_COLOR;

use super::helpers::create_border_block;

const LOGO_WIDTH: u16 = 10;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, api_url: &str) {
    let block = create_border_block("", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let [logo_area, location_area] =
        Layout::horizontal([Constraint::Length(LOGO_WIDTH), Constraint::Min(0)]).areas(inner);

    frame.render_widget(
        Paragraph::new(logo()).alignment(Alignment::Left),
        logo_area,
    );

    if inner.width > 40 {
        let location = Paragraph::new(format!("{api_url} "))
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Right);
        frame.render_widget(location, location_area);
    }
}

fn logo() -> Line<'static> {
    Line::from(vec![" fin".green().bold(), "board".cyan().bold()])
}
