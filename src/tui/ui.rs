use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::markets::display::{format_grouped, format_price};
use crate::tui::app::{App, InputMode};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Min(0),    // table
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    render_search_bar(frame, app, chunks[0]);
    render_table(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);
}

fn render_search_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (style, title) = match app.input_mode {
        InputMode::Search => (
            Style::default().fg(Color::Yellow),
            " Search by name (Enter: apply, Esc: clear) ",
        ),
        InputMode::Normal => (Style::default(), " Search ('/' to edit) "),
    };

    let input = Paragraph::new(app.state.search_term())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);

    if app.input_mode == InputMode::Search {
        frame.set_cursor_position((search_cursor_x(area, app.state.search_term()), area.y + 1));
    }
}

/// Cursor column after the last typed character, clamped to the input box.
/// Counts characters, not bytes, so multibyte input positions correctly.
fn search_cursor_x(area: Rect, term: &str) -> u16 {
    let x = area.x + 1 + term.chars().count() as u16;
    x.min(area.right().saturating_sub(2))
}

fn render_table(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let visible = app.state.visible();

    let title = match app.state.sort() {
        Some(key) => format!(" Markets: {} rows, sorted by {} ", visible.len(), key.label()),
        None => format!(" Markets: {} rows ", visible.len()),
    };

    let header = Row::new(vec!["Name", "Symbol", "Price", "24h Volume"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = visible
        .iter()
        .map(|entry| {
            Row::new(vec![
                entry.name.clone(),
                entry.symbol.to_uppercase(),
                format_price(entry.current_price),
                format_grouped(entry.total_volume),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

fn render_footer(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let mut spans = vec![
        Span::styled("/", Style::default().fg(Color::Yellow)),
        Span::raw(" search  "),
        Span::styled("m", Style::default().fg(Color::Yellow)),
        Span::raw(" sort by mkt cap  "),
        Span::styled("c", Style::default().fg(Color::Yellow)),
        Span::raw(" sort by 24h %  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(" refresh  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ];

    if app.fetch_in_flight {
        spans.push(Span::styled(
            "  [fetching...]",
            Style::default().fg(Color::Magenta),
        ));
    }
    if let Some(status) = app.status() {
        spans.push(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::Green),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "));
    frame.render_widget(footer, area);
}
