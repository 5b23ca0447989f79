//! Centralized keyboard shortcuts registry.
//!
//! Single source of truth for the shortcuts shown by `HelpDialog` and the
//! footer hints. Key handling in `App` must stay in step with this table.

use crossterm::event::KeyCode;

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Alternative key (e.g., vim key or arrow key)
    pub alt_key: Option<KeyCode>,
    /// Human-readable description of what this shortcut does
    pub description: &'static str,
    /// Category for grouping in help
    pub category: ShortcutCategory,
    /// Context where this shortcut is active
    pub context: ShortcutContext,
}

/// Categories for organizing shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutCategory {
    General,
    Navigation,
    Actions,
}

/// Contexts where shortcuts are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Step list and detail panel
    Steps,
    /// Content viewer dialog
    Viewer,
}

impl ShortcutCategory {
    /// Display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutCategory::General => "General",
            ShortcutCategory::Navigation => "Navigation",
            ShortcutCategory::Actions => "Actions",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [ShortcutCategory] {
        &[
            ShortcutCategory::General,
            ShortcutCategory::Navigation,
            ShortcutCategory::Actions,
        ]
    }
}

impl ShortcutContext {
    /// Display name for this context
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutContext::Steps => "Steps",
            ShortcutContext::Viewer => "Details Viewer",
        }
    }

    /// All contexts in display order
    pub fn all() -> &'static [ShortcutContext] {
        &[ShortcutContext::Steps, ShortcutContext::Viewer]
    }
}

impl Shortcut {
    /// Format key for display (e.g., "q", "Enter", "j/↓")
    pub fn key_display(&self) -> String {
        let primary = format_keycode(&self.key);
        match &self.alt_key {
            Some(alt) => format!("{}/{}", primary, format_keycode(alt)),
            None => primary,
        }
    }

    /// Format key for help dialog (left-padded to 9 chars)
    pub fn key_display_padded(&self) -> String {
        format!("{:<9}", self.key_display())
    }
}

/// Format a KeyCode for display
fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", key),
    }
}

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    // === Steps ===
    Shortcut {
        key: KeyCode::Char('q'),
        alt_key: Some(KeyCode::Esc),
        description: "Quit",
        category: ShortcutCategory::General,
        context: ShortcutContext::Steps,
    },
    Shortcut {
        key: KeyCode::Char('?'),
        alt_key: None,
        description: "Toggle help",
        category: ShortcutCategory::General,
        context: ShortcutContext::Steps,
    },
    Shortcut {
        key: KeyCode::Char('j'),
        alt_key: Some(KeyCode::Down),
        description: "Move down",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Steps,
    },
    Shortcut {
        key: KeyCode::Char('k'),
        alt_key: Some(KeyCode::Up),
        description: "Move up",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Steps,
    },
    Shortcut {
        key: KeyCode::Enter,
        alt_key: Some(KeyCode::Char(' ')),
        description: "Expand / collapse step",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Steps,
    },
    Shortcut {
        key: KeyCode::Char('v'),
        alt_key: None,
        description: "View details of expanded step",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Steps,
    },
    Shortcut {
        key: KeyCode::Char('g'),
        alt_key: None,
        description: "Get help",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Steps,
    },
    // === Viewer ===
    Shortcut {
        key: KeyCode::Esc,
        alt_key: Some(KeyCode::Char('q')),
        description: "Close viewer",
        category: ShortcutCategory::General,
        context: ShortcutContext::Viewer,
    },
    Shortcut {
        key: KeyCode::Right,
        alt_key: Some(KeyCode::Char('l')),
        description: "Next page",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Viewer,
    },
    Shortcut {
        key: KeyCode::Left,
        alt_key: Some(KeyCode::Char('h')),
        description: "Previous page",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Viewer,
    },
    Shortcut {
        key: KeyCode::Char('1'),
        alt_key: Some(KeyCode::Char('9')),
        description: "Jump to page 1-9",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Viewer,
    },
    Shortcut {
        key: KeyCode::PageDown,
        alt_key: Some(KeyCode::PageUp),
        description: "Scroll page content",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Viewer,
    },
    Shortcut {
        key: KeyCode::Char('j'),
        alt_key: Some(KeyCode::Char('k')),
        description: "Select resource link",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Viewer,
    },
    Shortcut {
        key: KeyCode::Char('s'),
        alt_key: None,
        description: "Show / hide samples",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Viewer,
    },
    Shortcut {
        key: KeyCode::Enter,
        alt_key: Some(KeyCode::Char('o')),
        description: "Open selected link",
        category: ShortcutCategory::Actions,
        context: ShortcutContext::Viewer,
    },
];

/// Get all shortcuts for a given context
pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

/// Grouped shortcuts by category
pub type GroupedByCategory = Vec<(ShortcutCategory, Vec<&'static Shortcut>)>;

/// Get shortcuts grouped by category for a given context
pub fn shortcuts_by_category_for_context(context: ShortcutContext) -> GroupedByCategory {
    let mut result = Vec::new();
    for category in ShortcutCategory::all() {
        let shortcuts: Vec<&Shortcut> = shortcuts_for_context(context)
            .filter(|s| s.category == *category)
            .collect();
        if !shortcuts.is_empty() {
            result.push((*category, shortcuts));
        }
    }
    result
}
