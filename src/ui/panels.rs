use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::content::{ContentTable, GuideHeader};
use crate::navigation::{StepAction, StepBrowser};

pub struct HeaderBar<'a> {
    pub header: &'a GuideHeader,
}

impl HeaderBar<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut title_line = Vec::new();
        if !self.header.badge.is_empty() {
            title_line.push(Span::styled(
                format!(" {} ", self.header.badge),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            title_line.push(Span::raw("  "));
        }
        title_line.push(Span::styled(
            self.header.title.as_str(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));

        let lines = vec![
            Line::from(title_line),
            Line::from(Span::styled(
                self.header.subtitle.as_str(),
                Style::default().fg(Color::Gray),
            )),
        ];

        let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, area);
    }
}

/// Left column: every step, with the cursor and expansion marker
pub struct StepListPanel {
    pub state: ListState,
}

impl Default for StepListPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StepListPanel {
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { state }
    }

    pub fn selected(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    pub fn select_next(&mut self, step_count: usize) {
        if step_count == 0 {
            return;
        }
        let next = (self.selected() + 1).min(step_count - 1);
        self.state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        self.state.select(Some(self.selected().saturating_sub(1)));
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        table: &ContentTable,
        browser: &StepBrowser,
        show_summaries: bool,
    ) {
        let items: Vec<ListItem> = table
            .steps()
            .iter()
            .map(|step| {
                let expanded = browser.is_expanded(step.id);
                let (marker, color) = if expanded {
                    ("▼", Color::Cyan)
                } else {
                    ("▶", Color::Gray)
                };

                let mut lines = vec![Line::from(vec![
                    Span::styled(format!("{} ", marker), Style::default().fg(color)),
                    Span::styled(
                        format!("{}. ", step.id + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        step.title.as_str(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ])];

                if show_summaries && !step.short_summary.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("     {}", step.short_summary),
                        Style::default().fg(Color::DarkGray),
                    )));
                }

                ListItem::new(lines)
            })
            .collect();

        let title = format!(" Steps ({}) ", table.step_count());
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

/// Shortcut key shown next to each step action
fn action_key(action: StepAction) -> char {
    match action {
        StepAction::ViewDetails => 'v',
        StepAction::GetHelp => 'g',
    }
}

/// Right column: guidance for the expanded step
pub struct StepDetailPanel;

impl StepDetailPanel {
    pub fn render(frame: &mut Frame, area: Rect, table: &ContentTable, browser: &StepBrowser) {
        let block = Block::default()
            .title(" Guidance ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));

        let Some(step) = browser.expanded_step(table) else {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Select a step to explore",
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    "[Enter] expand  [?] help",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!("Step {}: {}", step.id + 1, step.title),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                step.short_summary.as_str(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(step.detail.as_str()),
            Line::from(""),
        ];

        if !step.checklist.is_empty() {
            lines.push(Line::from(Span::styled(
                "Guidance & Checklist",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for item in &step.checklist {
                lines.push(Line::from(vec![
                    Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                    Span::raw(item.as_str()),
                ]));
            }
            lines.push(Line::from(""));
        }

        let page_count = table.pages_for(step.id).len();
        let mut actions = Vec::new();
        for action in StepAction::all() {
            actions.push(Span::styled(
                format!("[{}] {}", action_key(*action), action.label()),
                Style::default().fg(Color::Magenta),
            ));
            actions.push(Span::raw("   "));
        }
        actions.push(Span::styled(
            format!("{} reference pages", page_count),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(actions));

        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block.border_style(Style::default().fg(Color::Cyan)));
        frame.render_widget(detail, area);
    }
}

pub struct StatusBar<'a> {
    pub message: Option<&'a str>,
    pub selected: usize,
    pub step_count: usize,
}

impl StatusBar<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let position = Span::styled(
            format!(" Step {}/{}", self.selected + 1, self.step_count),
            Style::default().fg(Color::Green),
        );

        let middle = match self.message {
            Some(message) => Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Yellow),
            ),
            None => Span::styled(
                "  [j/k] Move [Enter] Expand [v] View Details [?] Help [q]uit",
                Style::default().fg(Color::DarkGray),
            ),
        };

        let bar = Paragraph::new(Line::from(vec![position, middle]))
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(bar, area);
    }
}
