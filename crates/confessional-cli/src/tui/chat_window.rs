use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::session::{ChatMessage, Sender};
use super::ChatApp;

/// Render the chat window.
pub fn render(frame: &mut Frame, app: &ChatApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Conversation
            Constraint::Length(3), // Input
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_messages(frame, app, chunks[1]);
    render_input(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn render_title(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let palette = app.skin.palette();
    let status = if app.session.is_processing() {
        "typing..."
    } else {
        "online"
    };
    let title = Paragraph::new(format!("{}    {}", app.skin.window_title(), status))
        .style(
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(title, area);
}

fn message_line<'a>(app: &ChatApp, message: &'a ChatMessage) -> Line<'a> {
    let palette = app.skin.palette();
    let stamp = Span::styled(
        format!("[{}] ", message.timestamp.format("%-I:%M %p")),
        Style::default().fg(palette.timestamp),
    );

    if message.is_typing {
        return Line::from(vec![
            stamp,
            Span::styled(
                format!("{} is typing {}", app.skin.agent_name(), message.text),
                Style::default()
                    .fg(palette.typing)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]);
    }

    let (name, color) = match message.sender {
        Sender::User => (app.skin.user_label(), palette.user),
        Sender::Bot => (app.skin.agent_name(), palette.bot),
    };
    Line::from(vec![
        stamp,
        Span::styled(
            format!("{name}: "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(message.text.as_str()),
    ])
}

fn render_messages(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let palette = app.skin.palette();
    let lines: Vec<Line> = app
        .session
        .messages()
        .iter()
        .map(|m| message_line(app, m))
        .collect();

    // Keep the newest messages in view; wrapped lines may push a little out
    let viewport_height = area.height.saturating_sub(2);
    let line_count = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let offset = line_count.saturating_sub(viewport_height);

    let conversation = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(conversation, area);
}

fn render_input(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let palette = app.skin.palette();
    let style = if app.session.is_processing() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let input = Paragraph::new(app.input.as_str()).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.highlight))
            .title("Message"),
    );
    frame.render_widget(input, area);

    if !app.session.is_processing() {
        frame.set_cursor_position(Position::new(cursor_x(area, &app.input), area.y + 1));
    }
}

/// Column of the input cursor, clamped inside the box border.
fn cursor_x(area: Rect, input: &str) -> u16 {
    let width = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(1).saturating_add(width).min(max_x)
}

fn render_help(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let text = if app.session.show_try_again() {
        "  Enter Send  Tab Try again  Esc Quit"
    } else {
        "  Enter Send  Esc Quit"
    };
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
