use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::panels::{HeaderBar, StatusBar, StepDetailPanel, StepListPanel};
use crate::config::Config;
use crate::content::ContentTable;
use crate::navigation::NavigationState;

/// Main screen: header, step list beside the expanded step's guidance, status bar
pub struct Guide {
    pub step_list: StepListPanel,
    pub status_message: Option<String>,
    step_list_width: u16,
    show_summaries: bool,
}

impl Guide {
    pub fn new(config: &Config) -> Self {
        Self {
            step_list: StepListPanel::new(),
            status_message: None,
            step_list_width: config.step_list_width(),
            show_summaries: config.ui.show_summaries,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn render(&mut self, frame: &mut Frame, table: &ContentTable, nav: &NavigationState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(8),    // Steps and guidance
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        HeaderBar {
            header: table.header(),
        }
        .render(frame, chunks[0]);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(self.step_list_width),
                Constraint::Percentage(100 - self.step_list_width),
            ])
            .split(chunks[1]);

        self.step_list.render(
            frame,
            main_chunks[0],
            table,
            &nav.browser,
            self.show_summaries,
        );
        StepDetailPanel::render(frame, main_chunks[1], table, &nav.browser);

        StatusBar {
            message: self.status_message.as_deref(),
            selected: self.step_list.selected(),
            step_count: table.step_count(),
        }
        .render(frame, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationEvent;
    use crate::ui::test_util::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(guide: &mut Guide, table: &ContentTable, nav: &NavigationState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        terminal.draw(|frame| guide.render(frame, table, nav)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_collapsed_guide_shows_all_steps() {
        let table = ContentTable::builtin().unwrap();
        let mut guide = Guide::new(&Config::default());
        let text = draw(&mut guide, &table, &NavigationState::new());

        assert!(text.contains("Your Complete SOP Guide"));
        assert!(text.contains("Steps (8)"));
        assert!(text.contains("Requirement Understanding"));
        assert!(text.contains("Client Submission"));
        assert!(text.contains("Select a step to explore"));
        assert!(text.contains("Step 1/8"));
    }

    #[test]
    fn test_expanded_step_shows_checklist_and_actions() {
        let table = ContentTable::builtin().unwrap();
        let nav = NavigationState::new().apply(NavigationEvent::SelectStep(1), &table);
        let mut guide = Guide::new(&Config::default());
        let text = draw(&mut guide, &table, &nav);

        assert!(text.contains("Step 2: Tools Setup"));
        assert!(text.contains("Guidance & Checklist"));
        assert!(text.contains("[v] View Details"));
        assert!(text.contains("[g] Get Help"));
        assert!(text.contains("6 reference pages"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let table = ContentTable::builtin().unwrap();
        let mut guide = Guide::new(&Config::default());
        guide.set_status("Link opener not found");
        let text = draw(&mut guide, &table, &NavigationState::new());
        assert!(text.contains("Link opener not found"));
        assert!(!text.contains("[q]uit"));

        guide.clear_status();
        let text = draw(&mut guide, &table, &NavigationState::new());
        assert!(text.contains("[q]uit"));
    }

    #[test]
    fn test_summaries_can_be_hidden() {
        let table = ContentTable::builtin().unwrap();
        let summary = table.steps()[1].short_summary.clone();

        let mut config = Config::default();
        let text = draw(&mut Guide::new(&config), &table, &NavigationState::new());
        assert!(text.contains(&summary));

        config.ui.show_summaries = false;
        let text = draw(&mut Guide::new(&config), &table, &NavigationState::new());
        assert!(!text.contains(&summary));
    }
}
