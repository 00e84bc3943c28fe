//! Footer bar with keyboard shortcuts.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::theme::MUTED_COLOR;

const FOOTER_TEXT: &str = "q:Quit  ↑/k:Up  ↓/j:Down  g:Top  G:Bottom";

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(FOOTER_TEXT)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::row_text;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_footer_displays_shortcuts() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|frame| render(frame, frame.area())).unwrap();

        let content = row_text(terminal.backend().buffer(), Rect::new(0, 0, 80, 1), 0);
        for shortcut in ["q:Quit", "k:Up", "j:Down", "g:Top", "G:Bottom"] {
            assert!(
                content.contains(shortcut),
                "Footer should contain '{shortcut}', got: {content}"
            );
        }
    }

    #[test]
    fn test_footer_zero_height_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0)))
            .unwrap();
    }
}
