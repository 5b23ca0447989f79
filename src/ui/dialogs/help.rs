use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::ui::keybindings::{shortcuts_by_category_for_context, ShortcutContext};

pub struct HelpDialog {
    pub visible: bool,
}

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDialog {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// One section per shortcut context, grouped by category
    fn lines() -> Vec<Line<'static>> {
        let mut help_text = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Cyan),
            )),
            Line::from(""),
        ];

        for (index, context) in ShortcutContext::all().iter().enumerate() {
            if index > 0 {
                help_text.push(Line::from(""));
            }
            help_text.push(Line::from(Span::styled(
                format!("{}:", context.display_name()),
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Cyan),
            )));

            for (category, shortcuts) in shortcuts_by_category_for_context(*context) {
                help_text.push(Line::from(Span::styled(
                    format!("  {}", category.display_name()),
                    Style::default().fg(Color::Gray),
                )));
                for shortcut in shortcuts {
                    help_text.push(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(
                            shortcut.key_display_padded(),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::raw(shortcut.description),
                    ]));
                }
            }
        }

        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::Gray),
        )));
        help_text
    }

    pub fn render(&self, frame: &mut Frame) {
        if !self.visible {
            return;
        }

        let area = centered_rect(70, 90, frame.area());
        frame.render_widget(Clear, area);

        let help = Paragraph::new(Self::lines())
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });

        frame.render_widget(help, area);
    }
}
