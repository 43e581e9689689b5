use alice_core::settings::Settings;
use alice_core::theme::{Element, Theme};
use alice_core::TurnPhase;
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    settings: &Settings,
    phase: TurnPhase,
) {
    let header_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .style(theme.ratatui_style(Element::Background));

    let inner_area = header_block.inner(area);
    frame.render_widget(header_block, area);

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(inner_area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled("ALICE", theme.ratatui_style(Element::Title)),
        Span::styled(" terminal", theme.ratatui_style(Element::Inactive)),
    ]))
    .alignment(Alignment::Left);
    frame.render_widget(title, header_chunks[0]);

    let (status_text, status_element) = match phase {
        TurnPhase::Idle => ("ready", Element::Inactive),
        TurnPhase::AwaitingResponse => ("waiting for agent", Element::Info),
        TurnPhase::Animating => ("replying", Element::Info),
    };
    let status = Paragraph::new(Span::styled(status_text, theme.ratatui_style(status_element)))
        .alignment(Alignment::Center);
    frame.render_widget(status, header_chunks[1]);

    // Short agent id plus a clock, enough to tell sessions apart.
    let agent_short: String = settings.agent_id.chars().take(8).collect();
    let clock = chrono::Local::now().format("%H:%M");
    let right = Paragraph::new(Span::styled(
        format!("{agent_short} {clock}"),
        theme.ratatui_style(Element::Inactive),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(right, header_chunks[2]);
}
