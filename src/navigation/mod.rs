//! Navigation state for the guide.
//!
//! Two small state machines make up the session state:
//! - [`StepBrowser`]: which step, if any, is expanded
//! - [`ContentViewer`]: whether the page viewer is open, on which step, at which page
//!
//! Every transition is a pure function returning the next state. Rendering
//! reads the state and never writes it.

pub mod browser;
pub mod viewer;

pub use browser::{StepAction, StepBrowser};
pub use viewer::ContentViewer;

use crate::content::{ContentTable, StepId};

/// A discrete user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    SelectStep(StepId),
    Collapse,
    Action(StepAction),
    CloseViewer,
    NextPage,
    PreviousPage,
    JumpToPage(usize),
    ToggleSamples,
}

/// Combined step selection and viewer state for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub browser: StepBrowser,
    pub viewer: ContentViewer,
}

impl NavigationState {
    /// Nothing expanded, viewer closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the resulting state
    #[must_use]
    pub fn apply(self, event: NavigationEvent, table: &ContentTable) -> Self {
        let next = match event {
            NavigationEvent::SelectStep(step) => Self {
                browser: self.browser.select_step(step),
                ..self
            },
            NavigationEvent::Collapse => Self {
                browser: self.browser.collapse(),
                ..self
            },
            NavigationEvent::Action(StepAction::ViewDetails) => match self.browser.expanded() {
                Some(step) => Self {
                    viewer: self.viewer.open(step),
                    ..self
                },
                None => self,
            },
            NavigationEvent::Action(StepAction::GetHelp) => self,
            NavigationEvent::CloseViewer => Self {
                viewer: self.viewer.close(),
                ..self
            },
            NavigationEvent::NextPage => Self {
                viewer: self.viewer.next(table),
                ..self
            },
            NavigationEvent::PreviousPage => Self {
                viewer: self.viewer.previous(),
                ..self
            },
            NavigationEvent::JumpToPage(index) => Self {
                viewer: self.viewer.jump_to(index, table),
                ..self
            },
            NavigationEvent::ToggleSamples => Self {
                viewer: self.viewer.toggle_samples(table),
                ..self
            },
        };

        if next != self {
            tracing::debug!(
                ?event,
                expanded = ?next.browser.expanded(),
                viewer_open = next.viewer.is_open(),
                viewer_step = ?next.viewer.step(),
                page = next.viewer.page(),
                "Navigation transition"
            );
        }

        next
    }

    /// Apply events in order
    #[must_use]
    pub fn apply_all<I>(self, events: I, table: &ContentTable) -> Self
    where
        I: IntoIterator<Item = NavigationEvent>,
    {
        events
            .into_iter()
            .fold(self, |state, event| state.apply(event, table))
    }

    /// True while the viewer has something to draw
    pub fn viewer_visible(&self, table: &ContentTable) -> bool {
        self.viewer.is_visible(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_support::table_with_page_counts;

    #[test]
    fn test_initial_state() {
        let state = NavigationState::new();
        assert_eq!(state.browser.expanded(), None);
        assert!(!state.viewer.is_open());
    }

    #[test]
    fn test_view_details_opens_expanded_step() {
        let table = table_with_page_counts(&[2, 3]);
        let state = NavigationState::new().apply_all(
            [
                NavigationEvent::SelectStep(1),
                NavigationEvent::Action(StepAction::ViewDetails),
            ],
            &table,
        );
        assert!(state.viewer.is_open());
        assert_eq!(state.viewer.step(), Some(1));
        assert_eq!(state.viewer.page(), 0);
        assert!(state.viewer_visible(&table));
    }

    #[test]
    fn test_view_details_without_expanded_step_is_noop() {
        let table = table_with_page_counts(&[2]);
        let state = NavigationState::new();
        assert_eq!(
            state.apply(NavigationEvent::Action(StepAction::ViewDetails), &table),
            state
        );
    }

    #[test]
    fn test_get_help_is_noop() {
        let table = table_with_page_counts(&[2]);
        let state = NavigationState::new().apply(NavigationEvent::SelectStep(0), &table);
        assert_eq!(
            state.apply(NavigationEvent::Action(StepAction::GetHelp), &table),
            state
        );
    }

    #[test]
    fn test_viewer_independent_of_expanded_step() {
        let table = table_with_page_counts(&[2, 3]);
        let state = NavigationState::new().apply_all(
            [
                NavigationEvent::SelectStep(1),
                NavigationEvent::Action(StepAction::ViewDetails),
                NavigationEvent::SelectStep(1),
            ],
            &table,
        );
        assert_eq!(state.browser.expanded(), None);
        assert_eq!(state.viewer.step(), Some(1));
        assert!(state.viewer.is_open());
    }

    #[test]
    fn test_page_events() {
        let table = table_with_page_counts(&[4]);
        let state = NavigationState::new().apply_all(
            [
                NavigationEvent::SelectStep(0),
                NavigationEvent::Action(StepAction::ViewDetails),
                NavigationEvent::NextPage,
                NavigationEvent::NextPage,
                NavigationEvent::PreviousPage,
                NavigationEvent::JumpToPage(3),
                NavigationEvent::JumpToPage(10),
            ],
            &table,
        );
        assert_eq!(state.viewer.page(), 3);
    }

    #[test]
    fn test_close_then_reopen_resets_page() {
        let table = table_with_page_counts(&[4]);
        let state = NavigationState::new().apply_all(
            [
                NavigationEvent::SelectStep(0),
                NavigationEvent::Action(StepAction::ViewDetails),
                NavigationEvent::JumpToPage(2),
                NavigationEvent::CloseViewer,
            ],
            &table,
        );
        assert!(!state.viewer.is_open());
        assert_eq!(state.viewer.page(), 2);

        let reopened = state.apply(NavigationEvent::Action(StepAction::ViewDetails), &table);
        assert_eq!(reopened.viewer.page(), 0);
    }

    #[test]
    fn test_collapse_event() {
        let table = table_with_page_counts(&[1]);
        let state = NavigationState::new().apply_all(
            [NavigationEvent::SelectStep(0), NavigationEvent::Collapse],
            &table,
        );
        assert_eq!(state.browser.expanded(), None);
    }
}
