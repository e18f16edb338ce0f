// 🖥️ Terminal UI - renders the list and detail screens
//
// All state lives in App; this module only draws it and turns key presses
// into Actions. Text and portraits come from the injected Resolver.

use crate::app::{Action, App};
use crate::champion::Champion;
use crate::list_view::{description_lines, wrap_text, ListRow, TapMode};
use crate::navigation::Route;
use crate::resources::{Portrait, Resolver, APP_NAME, BACK_LABEL};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io;

/// Width of the portrait cell in a list row, e.g. "[ Z ]"
const PORTRAIT_WIDTH: usize = 5;

pub fn run_ui(app: &mut App, resolver: &dyn Resolver) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, resolver);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    resolver: &dyn Resolver,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui(f, app, resolver))?;

        if let Event::Key(key) = event::read()? {
            if let Some(action) = action_for(key) {
                app.handle(action);
            }
        }
    }

    Ok(())
}

/// Key bindings
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            Some(Action::Back)
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => {
            Some(Action::Activate)
        }
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Next),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Previous),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::First),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Last),
        _ => None,
    }
}

pub fn ui(f: &mut Frame, app: &App, resolver: &dyn Resolver) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Screen
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app, resolver);

    match app.current_route() {
        Route::List => render_list(f, chunks[1], app, resolver),
        Route::Detail { .. } => render_detail(f, chunks[1], app, resolver),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App, resolver: &dyn Resolver) {
    let route = app.current_route();

    let mut spans = vec![
        Span::styled(
            resolver.resolve_text(APP_NAME),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled(route.title(), Style::default().fg(Color::Cyan)),
    ];

    if let Route::Detail { champion_id } = route {
        spans.push(Span::styled(
            format!(" #{}", champion_id),
            Style::default().fg(Color::DarkGray),
        ));
    }

    spans.push(Span::raw("  │  "));
    spans.push(Span::styled(
        format!("Total: {}", app.store().count()),
        Style::default().fg(Color::White),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

// ============================================================================
// LIST SCREEN
// ============================================================================

fn render_list(f: &mut Frame, area: Rect, app: &App, resolver: &dyn Resolver) {
    // Borders (2) + highlight symbol (2) + gap between portrait and text (1)
    let text_width = (area.width as usize).saturating_sub(5 + PORTRAIT_WIDTH).max(10);

    let items: Vec<ListItem> = app
        .list()
        .rows()
        .iter()
        .filter_map(|row| {
            app.store()
                .find_by_id(row.champion_id)
                .map(|champion| champion_item(champion, row, text_width, resolver))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Champions "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    let mut state = ListState::default();
    state.select(app.list().selected());

    f.render_stateful_widget(list, area, &mut state);
}

fn champion_item<'a>(
    champion: &Champion,
    row: &ListRow,
    text_width: usize,
    resolver: &dyn Resolver,
) -> ListItem<'a> {
    let portrait = resolver.resolve_image(champion.image);
    let name = resolver.resolve_text(champion.name);
    let title = resolver.resolve_text(champion.title);
    let description = resolver.resolve_text(champion.description);

    let mut text_lines: Vec<(String, Style)> = vec![
        (name, Style::default().add_modifier(Modifier::BOLD)),
        (
            title,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        ),
    ];
    for line in description_lines(&description, text_width, row.description_line_limit()) {
        text_lines.push((line, Style::default().fg(Color::Gray)));
    }

    let mut lines: Vec<Line> = text_lines
        .into_iter()
        .enumerate()
        .map(|(i, (text, style))| {
            let cell = if i == 0 {
                portrait_cell(&portrait)
            } else {
                " ".repeat(PORTRAIT_WIDTH)
            };
            let cell = Span::styled(cell, Style::default().fg(Color::Yellow));

            if row.image_on_left {
                Line::from(vec![cell, Span::raw(" "), Span::styled(text, style)])
            } else {
                Line::from(vec![
                    Span::styled(pad(&text, text_width), style),
                    Span::raw(" "),
                    cell,
                ])
            }
        })
        .collect();

    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn portrait_cell(portrait: &Portrait) -> String {
    format!("[ {} ]", portrait.monogram)
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

// ============================================================================
// DETAIL SCREEN
// ============================================================================

fn render_detail(f: &mut Frame, area: Rect, app: &App, resolver: &dyn Resolver) {
    let Some(detail) = app.detail() else {
        return;
    };

    match detail.champion() {
        Some(champion) => render_found(f, area, champion, resolver),
        None => render_not_found(
            f,
            area,
            detail.not_found_message(resolver).unwrap_or_default(),
            resolver.resolve_text(BACK_LABEL),
        ),
    }
}

fn render_found(f: &mut Frame, area: Rect, champion: &Champion, resolver: &dyn Resolver) {
    let portrait = resolver.resolve_image(champion.image);
    let width = (area.width as usize).saturating_sub(6).max(10);

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("╔═══ {} ═══╗", portrait.monogram),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("  "),
            Span::styled(
                format!("splash: {}", portrait.asset_path),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                resolver.resolve_text(champion.name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                resolver.resolve_text(champion.title),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]),
        Line::from(""),
        Line::from("  ─────────────────────────────────────"),
        Line::from(""),
    ];

    // Full description, never clipped
    for line in wrap_text(&resolver.resolve_text(champion.description), width) {
        content.push(Line::from(vec![Span::raw("  "), Span::raw(line)]));
    }

    let panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Champion Details "),
    );

    f.render_widget(panel, area);
}

fn render_not_found(f: &mut Frame, area: Rect, message: String, back_label: String) {
    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(message, Style::default().fg(Color::Red)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "[ Enter ]",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}", back_label)),
        ]),
    ];

    let panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Not Found "),
    );

    f.render_widget(panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow);
    let mut spans = Vec::new();

    match app.current_route() {
        Route::List => {
            let selected = app.list().selected().map(|i| i + 1).unwrap_or(0);
            spans.push(Span::styled(
                format!(" Row: {}/{} ", selected, app.list().len()),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("Enter", key));
            spans.push(Span::raw(match app.list().mode() {
                TapMode::OpenDetail => " Open | ",
                TapMode::ToggleExpand => " Expand | ",
            }));
            spans.push(Span::styled("↑/↓", key));
            spans.push(Span::raw(" Nav | "));
        }
        Route::Detail { .. } => {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("Esc", key));
            spans.push(Span::raw(" Back | "));
        }
    }

    spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

// ============================================================================
// TESTS
// ============================================================================
