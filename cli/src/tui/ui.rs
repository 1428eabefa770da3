use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use todolist_core::{Marker, Trailing};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Focus};
use crate::tui::modal::Modal;

struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    done: Color,
    danger: Color,
}

const THEME: Theme = Theme {
    primary: Color::Rgb(0x88, 0x57, 0xE5),
    muted: Color::DarkGray,
    text: Color::Gray,
    done: Color::Rgb(0x1D, 0xB8, 0x63),
    danger: Color::Red,
};

const HIGHLIGHT_SYMBOL: &str = ">> ";
const MARKER_WIDTH: u16 = 3;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // New task input
            Constraint::Min(1),    // Tasks
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);
    draw_input(f, app, main_chunks[1]);
    draw_task_list(f, app, main_chunks[2]);
    draw_footer(f, app, main_chunks[3]);

    if let Some(modal) = app.modal() {
        draw_modal(f, modal, size);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("to.do", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(app.screen.counter_label(), Style::default().fg(THEME.text)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Input && app.modal().is_none();
    let input = app.screen.input();

    let content = if input.text().is_empty() && !focused {
        Span::styled("Add a new task", Style::default().fg(THEME.muted))
    } else {
        Span::raw(input.text())
    };
    let border = if focused { THEME.primary } else { THEME.muted };
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" New task ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(paragraph, area);

    if focused {
        let x = shifted(area.x.saturating_add(1), input.cursor_column());
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_task_list(f: &mut Frame, app: &mut App, area: Rect) {
    let list_focused = app.focus == Focus::List;
    let rows: Vec<Row> = app
        .screen
        .rows()
        .map(|binding| {
            let model = binding.row.render(binding.task);

            let marker = match model.marker {
                Marker::Checked => Span::styled(
                    "[✓]",
                    Style::default().fg(Color::White).bg(THEME.done),
                ),
                Marker::Empty => Span::styled("[ ]", Style::default().fg(THEME.muted)),
            };

            let mut title_style = if model.struck_through {
                Style::default().fg(THEME.done).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(THEME.text)
            };
            if model.title_editable {
                title_style = title_style.add_modifier(Modifier::UNDERLINED);
            }

            let trailing = match model.trailing {
                Trailing::Edit => Span::styled("e:edit", Style::default().fg(THEME.muted)),
                Trailing::Cancel => Span::styled("esc:cancel", Style::default().fg(THEME.muted)),
            };
            let remove_style = if model.remove_enabled {
                Style::default().fg(THEME.danger)
            } else {
                Style::default().fg(THEME.muted).add_modifier(Modifier::DIM)
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(Span::styled(model.text.to_string(), title_style)),
                Cell::from(trailing),
                Cell::from(Span::styled("d:remove", remove_style)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(MARKER_WIDTH), // Marker
            Constraint::Min(10),              // Title
            Constraint::Length(10),           // Edit / cancel
            Constraint::Length(8),            // Remove
        ],
    )
    .block(
        Block::default()
            .title(" Tasks ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if list_focused { THEME.primary } else { THEME.muted })),
    )
    .row_highlight_style(if list_focused {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    })
    .highlight_symbol(HIGHLIGHT_SYMBOL);

    f.render_stateful_widget(table, area, &mut app.state);

    if app.modal().is_some() {
        return;
    }
    if let Some(i) = app.editing_row() {
        let Some(column) = app
            .screen
            .row(i)
            .and_then(|(_, row)| row.draft())
            .map(|d| d.cursor_column())
        else {
            return;
        };
        let visible = i.checked_sub(app.state.offset());
        if let Some(line) = visible {
            let title_x = shifted(area.x, 1 + HIGHLIGHT_SYMBOL.width() + MARKER_WIDTH as usize + 1);
            let x = shifted(title_x, column);
            let y = shifted(area.y + 1, line);
            if y < area.bottom().saturating_sub(1) {
                f.set_cursor_position((x.min(area.right().saturating_sub(2)), y));
            }
        }
    }
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let help = if let Some(status) = app.status {
        Span::styled(status, Style::default().fg(THEME.danger))
    } else {
        let text = match (app.modal(), app.focus, app.editing_row()) {
            (Some(Modal::Confirm(_)), _, _) => "y: Yes | n: No | esc: Dismiss",
            (Some(Modal::Alert(_)), _, _) => "any key: OK",
            (None, Focus::Input, _) => "enter: Add | tab: Tasks | ctrl-c: Quit",
            (None, Focus::List, Some(_)) => "enter: Save | esc: Cancel | ctrl-t: Done",
            (None, Focus::List, None) => {
                "j/k: Navigate | space: Done | e: Edit | d: Remove | a: Add | q: Quit"
            }
        };
        Span::styled(text, Style::default().fg(THEME.muted))
    };
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), area);
}

fn draw_modal(f: &mut Frame, modal: &Modal, area: Rect) {
    let actions = match modal {
        Modal::Confirm(_) => "[y] Yes   [n] No",
        Modal::Alert(_) => "[any key] OK",
    };
    let content_width = modal.message().width().max(actions.width()).max(modal.title().width());
    let popup = centered(area, content_width as u16 + 4, 6);

    let body = Paragraph::new(vec![
        Line::from(modal.message()),
        Line::from(""),
        Line::from(Span::styled(actions, Style::default().fg(THEME.primary))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!(" {} ", modal.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.primary)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(body, popup);
}

/// `base + offset`, clamped to the terminal coordinate range.
fn shifted(base: u16, offset: usize) -> u16 {
    base.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX))
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
