//! Step selection: at most one step is expanded at a time.

use crate::content::{ContentTable, Step, StepId};

/// Actions offered by an expanded step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Open the content viewer on the expanded step
    ViewDetails,
    /// Visual affordance only; has no effect
    GetHelp,
}

impl StepAction {
    pub fn label(&self) -> &'static str {
        match self {
            StepAction::ViewDetails => "View Details",
            StepAction::GetHelp => "Get Help",
        }
    }

    pub fn all() -> &'static [StepAction] {
        &[StepAction::ViewDetails, StepAction::GetHelp]
    }
}

/// Collapsed (`expanded == None`) or `Expanded(step)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepBrowser {
    expanded: Option<StepId>,
}

impl StepBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting the expanded step collapses it; any other step replaces it.
    ///
    /// Callers only pass ids drawn from the step sequence.
    #[must_use]
    pub fn select_step(self, step: StepId) -> Self {
        if self.expanded == Some(step) {
            Self { expanded: None }
        } else {
            Self {
                expanded: Some(step),
            }
        }
    }

    #[must_use]
    pub fn collapse(self) -> Self {
        Self { expanded: None }
    }

    pub fn expanded(&self) -> Option<StepId> {
        self.expanded
    }

    pub fn is_expanded(&self, step: StepId) -> bool {
        self.expanded == Some(step)
    }

    /// The expanded step's content, if any
    pub fn expanded_step<'a>(&self, table: &'a ContentTable) -> Option<&'a Step> {
        self.expanded.and_then(|id| table.step(id))
    }
}
