//! Draws the core's view tree with ratatui.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use todo_core::{render as render_view, Body, InputRow, Row, RowContent, View};
use todo_core::view::{EMPTY_TEXT, LOADING_TEXT};

use crate::app::{App, Focus};

const TITLE: &str = " Todo App ";

pub fn render(frame: &mut Frame, app: &App) {
    let view = render_view(app.store().state());

    let banner_height = if view.error_banner.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    if let Some(error) = &view.error_banner {
        render_banner(frame, chunks[0], error);
    }
    render_input(frame, chunks[1], &view.input, app.focus() == Focus::Input);
    render_body(frame, chunks[2], &view, app);
    render_hints(frame, chunks[3], app);
}

fn render_banner(frame: &mut Frame, area: Rect, error: &str) {
    let banner = Paragraph::new(error)
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL).title(" Error "))
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &InputRow, focused: bool) {
    let line = if input.text.is_empty() {
        Line::from(Span::styled(input.placeholder, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(input.text.as_str())
    };
    let border = if focused { Color::Cyan } else { Color::Gray };
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(TITLE)
            .title_bottom(" Enter: Add Todo "),
    );
    frame.render_widget(widget, area);
}

fn render_body(frame: &mut Frame, area: Rect, view: &View, app: &App) {
    let block = Block::default().borders(Borders::ALL);
    let rows = match &view.body {
        Body::Loading => {
            frame.render_widget(Paragraph::new(LOADING_TEXT).block(block), area);
            return;
        }
        Body::Empty => {
            frame.render_widget(Paragraph::new(EMPTY_TEXT).block(block), area);
            return;
        }
        Body::List(rows) => rows,
    };

    let items: Vec<ListItem> = rows.iter().map(row_item).collect();
    let list_focused = app.focus() == Focus::List;
    let list = List::new(items)
        .block(block.border_style(Style::default().fg(if list_focused {
            Color::Cyan
        } else {
            Color::Gray
        })))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if list_focused {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn row_item(row: &Row) -> ListItem<'static> {
    let checkbox = if row.completed { "[x] " } else { "[ ] " };
    let line = match &row.content {
        RowContent::Display { title } => {
            let style = if row.completed {
                Style::default().add_modifier(Modifier::CROSSED_OUT).fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(vec![Span::raw(checkbox), Span::styled(title.clone(), style)])
        }
        RowContent::Editing { draft } => Line::from(vec![
            Span::raw(checkbox),
            Span::styled(format!("{draft}▏"), Style::default().fg(Color::Yellow)),
            Span::styled("  Enter: Save  Esc: Cancel", Style::default().fg(Color::DarkGray)),
        ]),
    };
    ListItem::new(line)
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.store().state().editing.is_some() {
        "Enter: save | Esc: cancel | Ctrl+C: quit"
    } else {
        match app.focus() {
            Focus::Input => "Enter: add | Tab: list | Ctrl+C: quit",
            Focus::List => {
                "Space: toggle | e: edit | d: delete | r: reload | Tab: input | q: quit"
            }
        }
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::Gray)),
        area,
    );
}
