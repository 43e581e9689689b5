use alice_core::theme::{Element, Theme};
use alice_core::{Entry, EntryKind};
use ratatui::{
    prelude::{Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the entry log, newest lines pinned to the bottom once the
/// history outgrows the viewport.
pub fn render_chat(frame: &mut Frame, area: Rect, theme: &Theme, entries: &[Entry]) {
    let chat_block = Block::new()
        .borders(Borders::ALL)
        .title(" Alice Terminal ")
        .title_style(theme.title_style())
        .border_style(theme.border_style())
        .style(theme.ratatui_style(Element::Background));

    let inner_area = chat_block.inner(area);
    frame.render_widget(chat_block, area);

    let mut lines: Vec<Line> = Vec::new();
    for entry in entries {
        lines.extend(entry_lines(entry, theme));
    }

    let scroll = bottom_scroll(lines.len(), inner_area.height);

    let paragraph = Paragraph::new(lines)
        .style(theme.text_style())
        .scroll((scroll, 0));
    frame.render_widget(paragraph, inner_area);
}

/// Scroll offset that pins the last lines to the bottom of the
/// viewport. The log grows without bound, so the line count saturates
/// instead of wrapping once it outgrows `u16`.
fn bottom_scroll(total_lines: usize, height: u16) -> u16 {
    let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
    total.saturating_sub(height)
}

fn entry_lines<'a>(entry: &'a Entry, theme: &Theme) -> Vec<Line<'a>> {
    match entry.kind {
        EntryKind::Input => styled_lines(&entry.content, theme.ratatui_style(Element::Accent)),
        EntryKind::Spinner => styled_lines(&entry.content, theme.ratatui_style(Element::Info)),
        EntryKind::Error => styled_lines(&entry.content, theme.ratatui_style(Element::Error)),
        EntryKind::Image => vec![Line::from(vec![
            Span::styled("[image] ", theme.ratatui_style(Element::Info)),
            Span::styled(entry.content.as_str(), theme.ratatui_style(Element::Text)),
        ])],
        EntryKind::Text => styled_lines(&entry.content, theme.text_style()),
    }
}

fn styled_lines<'a>(content: &'a str, style: ratatui::style::Style) -> Vec<Line<'a>> {
    // An entry may span several lines; each becomes its own row so the
    // bottom-pinning scroll math stays honest.
    content
        .split('\n')
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_scroll_pins_the_last_lines() {
        assert_eq!(bottom_scroll(0, 10), 0);
        assert_eq!(bottom_scroll(10, 10), 0);
        assert_eq!(bottom_scroll(11, 10), 1);
        assert_eq!(bottom_scroll(100, 10), 90);
    }

    #[test]
    fn bottom_scroll_saturates_on_very_long_sessions() {
        // Past u16::MAX rendered lines the offset must clamp, not wrap
        // back to the top of the log.
        assert_eq!(bottom_scroll(u16::MAX as usize + 1, 10), u16::MAX - 10);
        assert_eq!(bottom_scroll(usize::MAX, 10), u16::MAX - 10);
    }
}
