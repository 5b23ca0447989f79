use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;

use crate::config::Config;
use crate::content::ContentTable;
use crate::links::LinkOpener;
use crate::navigation::{NavigationEvent, NavigationState, StepAction};
use crate::ui::{install_panic_hook, Guide, HelpDialog, TerminalGuard, ViewerDialog};

/// Lines moved per PgUp/PgDn in the viewer
const SCROLL_STEP: u16 = 5;

pub struct App {
    config: Config,
    table: ContentTable,
    nav: NavigationState,
    guide: Guide,
    help_dialog: HelpDialog,
    viewer_dialog: ViewerDialog,
    opener: Box<dyn LinkOpener>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, table: ContentTable, opener: Box<dyn LinkOpener>) -> Self {
        let guide = Guide::new(&config);
        Self {
            config,
            table,
            nav: NavigationState::new(),
            guide,
            help_dialog: HelpDialog::new(),
            viewer_dialog: ViewerDialog::new(),
            opener,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let _guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        tracing::info!(steps = self.table.step_count(), "Guide started");

        let tick_rate = self.config.tick_rate();

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        tracing::info!("Guide closed");
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        self.guide.render(frame, &self.table, &self.nav);
        self.viewer_dialog.render(frame, &self.table, &self.nav.viewer);
        self.help_dialog.render(frame);
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.guide.status_message.as_deref()
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        // Help dialog swallows the key that closes it
        if self.help_dialog.visible {
            self.help_dialog.visible = false;
            return;
        }

        if self.nav.viewer_visible(&self.table) {
            self.handle_viewer_key(key);
        } else {
            self.handle_steps_key(key);
        }

        self.viewer_dialog.sync(&self.nav.viewer);
    }

    fn dispatch(&mut self, event: NavigationEvent) {
        self.nav = self.nav.apply(event, &self.table);
    }

    fn handle_steps_key(&mut self, key: KeyCode) {
        self.guide.clear_status();
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.help_dialog.toggle();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.guide.step_list.select_next(self.table.step_count());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.guide.step_list.select_previous();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.table.step_count() > 0 {
                    let step = self.guide.step_list.selected();
                    self.dispatch(NavigationEvent::SelectStep(step));
                }
            }
            KeyCode::Char('v') => {
                if self.nav.browser.expanded().is_none() {
                    self.guide.set_status("Expand a step first");
                }
                self.dispatch(NavigationEvent::Action(StepAction::ViewDetails));
            }
            KeyCode::Char('g') => {
                self.dispatch(NavigationEvent::Action(StepAction::GetHelp));
            }
            _ => {}
        }
    }

    fn handle_viewer_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.dispatch(NavigationEvent::CloseViewer);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.dispatch(NavigationEvent::NextPage);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.dispatch(NavigationEvent::PreviousPage);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.dispatch(NavigationEvent::JumpToPage(index));
            }
            KeyCode::Char('s') => {
                self.dispatch(NavigationEvent::ToggleSamples);
            }
            KeyCode::Char('j') => {
                let count = self
                    .nav
                    .viewer
                    .current_page(&self.table)
                    .map_or(0, |page| page.links().len());
                self.viewer_dialog.select_next_link(count);
            }
            KeyCode::Char('k') => {
                self.viewer_dialog.select_previous_link();
            }
            KeyCode::PageDown => {
                self.viewer_dialog.scroll_down(SCROLL_STEP);
            }
            KeyCode::PageUp => {
                self.viewer_dialog.scroll_up(SCROLL_STEP);
            }
            KeyCode::Enter | KeyCode::Char('o') => {
                self.open_selected_link();
            }
            _ => {}
        }
    }

    /// Hand the selected link to the opener. Failures only reach the status bar.
    fn open_selected_link(&mut self) {
        let Some(link) = self
            .viewer_dialog
            .selected_link(&self.nav.viewer, &self.table)
        else {
            return;
        };
        let (label, url) = (link.label.clone(), link.url.clone());

        match self.opener.open(&url) {
            Ok(()) => self.guide.set_status(format!("Opened {}", label)),
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "Failed to open link");
                self.guide.set_status(format!("Could not open link: {}", err));
            }
        }
    }
}
