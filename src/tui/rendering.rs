use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::layout::AppLayout;
use crate::models::{Catalog, ResultKind, SearchResult};
use crate::notify::{MessageType, StatusMessage};
use crate::search::PanelState;
use crate::utils::{
    format_absolute_timestamp, format_timestamp, sanitize_line, strip_control_sequences,
};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const DANGER: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the renderer needs for one frame
pub struct RenderState<'a> {
    pub query: &'a str,
    pub panel: PanelState,
    pub results: &'a [SearchResult],
    pub history: &'a [String],
    pub selected_idx: usize,
    pub catalog: &'a Catalog,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_input(frame, layout.input_area, state.query, state.panel);
    match state.panel {
        PanelState::ShowingResults => {
            render_results_list(frame, layout.results_area, state.results, state.selected_idx);
            let selected = state.results.get(state.selected_idx);
            render_preview(frame, layout.preview_area, selected, state.catalog);
        }
        PanelState::ShowingHistory => {
            render_history(frame, layout.results_area, state.history, state.selected_idx);
            render_preview(frame, layout.preview_area, None, state.catalog);
        }
        PanelState::NoResults => {
            render_placeholder(frame, layout.results_area, "No results");
            render_preview(frame, layout.preview_area, None, state.catalog);
        }
        PanelState::Idle => {
            render_placeholder(frame, layout.results_area, "Type at least 2 characters to search");
            render_preview(frame, layout.preview_area, None, state.catalog);
        }
    }
    render_status_bar(frame, layout.status_area, state);
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)).title(title)
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    }
}

fn render_input(frame: &mut Frame, area: Rect, query: &str, panel: PanelState) {
    let border = if panel == PanelState::Idle { MUTED } else { ACCENT };
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::raw(sanitize_line(query)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Search cases, evidence, events "),
    );

    frame.render_widget(paragraph, area);
}

fn kind_icon(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::Case => "📁",
        ResultKind::Evidence => "🔎",
        ResultKind::Event => "🕒",
    }
}

fn render_results_list(
    frame: &mut Frame,
    area: Rect,
    results: &[SearchResult],
    selected_idx: usize,
) {
    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let title: String = sanitize_line(&result.title).chars().take(60).collect();
            let content = match &result.subtitle {
                Some(subtitle) => {
                    format!("{} {} | {}", kind_icon(result.kind), title, sanitize_line(subtitle))
                }
                None => format!("{} {}", kind_icon(result.kind), title),
            };
            ListItem::new(content).style(row_style(idx == selected_idx))
        })
        .collect();

    let title = format!(" Results ({}) ", results.len());
    frame.render_widget(List::new(items).block(panel_block(&title)), area);
}

fn render_history(frame: &mut Frame, area: Rect, history: &[String], selected_idx: usize) {
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .map(|(idx, query)| {
            ListItem::new(format!("↺ {}", sanitize_line(query)))
                .style(row_style(idx == selected_idx))
        })
        .collect();

    frame.render_widget(List::new(items).block(panel_block(" Recent searches ")), area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(MUTED))
        .block(panel_block(" Results "));
    frame.render_widget(paragraph, area);
}

fn label(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", name), Style::default().fg(MUTED)),
        Span::raw(value),
    ])
}

/// Detail lines for the record behind a result, looked up in the catalog
fn preview_lines(result: &SearchResult, catalog: &Catalog) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            sanitize_line(&result.title),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )),
        label("Open", result.target_path.clone()),
    ];
    let mut description = None;

    match result.kind {
        ResultKind::Case => {
            if let Some(case) = catalog.cases.iter().find(|c| c.id == result.id) {
                lines.push(label("Status", case.status.to_string()));
                if let Some(priority) = &case.priority {
                    lines.push(label("Priority", sanitize_line(priority)));
                }
                if !case.tags.is_empty() {
                    let tags: Vec<String> = case.tags.iter().map(|t| sanitize_line(t)).collect();
                    lines.push(label("Tags", tags.join(", ")));
                }
                if let Some(created_at) = &case.created_at {
                    lines.push(label("Created", format_timestamp(created_at)));
                }
                description = case.description.clone();
            }
        }
        ResultKind::Evidence => {
            if let Some(item) = catalog.evidence.iter().find(|e| e.id == result.id) {
                if let Some(evidence_type) = &item.evidence_type {
                    lines.push(label("Type", sanitize_line(evidence_type)));
                }
                if let Some(case_id) = &item.case_id {
                    lines.push(label("Case", sanitize_line(case_id)));
                }
                if let Some(collected_at) = &item.collected_at {
                    lines.push(label("Collected", format_timestamp(collected_at)));
                }
                description = item.description.clone();
            }
        }
        ResultKind::Event => {
            if let Some(event) = catalog.events.iter().find(|e| e.id == result.id) {
                lines.push(label("When", format_absolute_timestamp(&event.timestamp)));
                if let Some(case_id) = &event.case_id {
                    lines.push(label("Case", sanitize_line(case_id)));
                }
                description = event.description.clone();
            }
        }
    }

    if let Some(description) = description {
        lines.push(Line::from(""));
        for line in strip_control_sequences(&description).lines() {
            lines.push(Line::from(line.to_string()));
        }
    }

    lines
}

fn render_preview(frame: &mut Frame, area: Rect, result: Option<&SearchResult>, catalog: &Catalog) {
    let content = match result {
        Some(result) => Text::from(preview_lines(result, catalog)),
        None => Text::from("No entry selected"),
    };

    let paragraph =
        Paragraph::new(content).block(panel_block(" Preview ")).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (text, style) = match state.status_message {
        Some(msg) => {
            let fg = match msg.message_type {
                MessageType::Error => DANGER,
                MessageType::Success | MessageType::Info => ACCENT,
            };
            (format!(" {} ", msg.text), Style::default().fg(fg).bg(BAR_BG))
        }
        None => {
            let mut parts = vec![];
            match state.panel {
                PanelState::ShowingResults => {
                    parts.push(format!(
                        "result {}/{}",
                        state.selected_idx + 1,
                        state.results.len()
                    ));
                    parts.push("Enter: open".to_string());
                    parts.push("Ctrl+Y: copy path".to_string());
                }
                PanelState::ShowingHistory => parts.push("Enter: reuse search".to_string()),
                PanelState::NoResults => parts.push("no matches".to_string()),
                PanelState::Idle => parts.push(format!("{} records", state.catalog.len())),
            }
            parts.push("Esc: close".to_string());
            parts.push("Ctrl+C: quit".to_string());
            (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR_BG))
        }
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
