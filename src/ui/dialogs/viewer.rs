//! Modal content viewer: one reference page at a time with pagination.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::content::{ContentPage, ContentTable, PageKind, ResourceLink, StepId};
use crate::navigation::ContentViewer;

/// Dot row for the pager, e.g. `○ ● ○` on page 2 of 3
pub fn page_indicator(current: usize, total: usize) -> String {
    (0..total)
        .map(|i| if i == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Presentation state layered over [`ContentViewer`]: link cursor and scroll.
///
/// Both reset whenever the viewer lands on a different page.
#[derive(Debug, Default)]
pub struct ViewerDialog {
    link_cursor: usize,
    scroll: u16,
    shown: Option<(StepId, usize)>,
}

impl ViewerDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, viewer: &ContentViewer) {
        let at = viewer
            .step()
            .filter(|_| viewer.is_open())
            .map(|step| (step, viewer.page()));
        if at != self.shown {
            self.link_cursor = 0;
            self.scroll = 0;
            self.shown = at;
        }
    }

    pub fn link_cursor(&self) -> usize {
        self.link_cursor
    }

    pub fn select_next_link(&mut self, link_count: usize) {
        if link_count > 0 {
            self.link_cursor = (self.link_cursor + 1).min(link_count - 1);
        }
    }

    pub fn select_previous_link(&mut self) {
        self.link_cursor = self.link_cursor.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn selected_link<'a>(
        &self,
        viewer: &ContentViewer,
        table: &'a ContentTable,
    ) -> Option<&'a ResourceLink> {
        viewer
            .current_page(table)?
            .links()
            .get(self.link_cursor)
            .copied()
    }

    /// Draws nothing unless the viewer is open on a step that has pages
    pub fn render(&self, frame: &mut Frame, table: &ContentTable, viewer: &ContentViewer) {
        if !viewer.is_visible(table) {
            return;
        }
        let Some(page) = viewer.current_page(table) else {
            return;
        };

        let area = centered_rect(80, 85, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Details ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Page title
                Constraint::Min(3),    // Body
                Constraint::Length(2), // Pager
            ])
            .split(inner);

        let title = Line::from(vec![
            Span::raw(if page.icon.is_empty() {
                String::new()
            } else {
                format!("{} ", page.icon)
            }),
            Span::styled(
                page.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let body = Paragraph::new(body_lines(
            page,
            viewer.samples_visible(),
            self.link_cursor,
        ))
        .wrap(Wrap { trim: false })
        .scroll((self.scroll, 0));
        frame.render_widget(body, chunks[1]);

        let pager = Paragraph::new(pager_line(viewer, table))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(pager, chunks[2]);
    }
}

fn body_lines(page: &ContentPage, samples_visible: bool, link_cursor: usize) -> Vec<Line<'_>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    if !page.description.is_empty() {
        lines.push(Line::from(page.description.as_str()));
        lines.push(Line::from(""));
    }

    if !page.items.is_empty() {
        lines.push(Line::from(Span::styled("Key Details", heading)));
        for item in &page.items {
            lines.push(Line::from(vec![
                Span::styled("  → ", Style::default().fg(Color::Cyan)),
                Span::raw(item.as_str()),
            ]));
        }
        lines.push(Line::from(""));
    }

    match &page.kind {
        PageKind::Plain => {}
        PageKind::Samples { samples } => {
            let toggle = if samples_visible {
                "[s] Hide MCP Samples"
            } else {
                "[s] View MCP Samples"
            };
            lines.push(Line::from(Span::styled(
                toggle,
                Style::default().fg(Color::Magenta),
            )));

            if samples_visible {
                for sample in samples {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(sample.title.as_str(), heading)));
                    for code_line in sample.code.lines() {
                        lines.push(Line::from(Span::styled(
                            code_line,
                            Style::default().fg(Color::Green),
                        )));
                    }
                }
            }
        }
        PageKind::Resources { .. } => {
            // Groups are an authoring detail; the viewer shows one flat list
            lines.push(Line::from(Span::styled("Learning Resources", heading)));
            for (index, link) in page.links().into_iter().enumerate() {
                let selected = index == link_cursor;
                let marker = if selected { "  > " } else { "    " };
                let label_style = if selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                lines.push(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(link.label.as_str(), label_style),
                    Span::styled(
                        format!("  {}", link.url),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
        }
    }

    lines
}

fn pager_line(viewer: &ContentViewer, table: &ContentTable) -> Line<'static> {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);
    let total = viewer.page_count(table);

    Line::from(vec![
        Span::styled(
            "[←] Previous",
            if viewer.has_previous() { enabled } else { disabled },
        ),
        Span::raw("   "),
        Span::styled(
            page_indicator(viewer.page(), total),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Page {} of {}", viewer.page() + 1, total),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("   "),
        Span::styled(
            "Next [→]",
            if viewer.has_next(table) { enabled } else { disabled },
        ),
    ])
}
