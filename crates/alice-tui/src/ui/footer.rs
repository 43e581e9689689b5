use alice_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Input line. While a turn is in flight the controller hands us an
/// empty prompt and the field is shown disabled.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, prompt: &str, input: &str) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .style(theme.ratatui_style(Element::Background));

    let inner_area = footer_block.inner(area);
    frame.render_widget(footer_block, area);

    let content = if prompt.is_empty() {
        Line::from(Span::styled(
            "... agent is replying ...",
            theme.ratatui_style(Element::Inactive),
        ))
    } else {
        Line::from(vec![
            Span::styled(prompt, theme.ratatui_style(Element::Accent)),
            Span::styled(input, theme.text_style()),
            Span::styled("_", theme.ratatui_style(Element::Highlight)),
            Span::styled(
                "    [Esc] quit  [Ctrl+T] theme",
                theme.ratatui_style(Element::Inactive),
            ),
        ])
    };

    let footer_paragraph = Paragraph::new(content);
    frame.render_widget(footer_paragraph, inner_area);
}
