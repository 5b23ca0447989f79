pub mod dialogs;
pub mod guide;
pub mod keybindings;
mod panels;
pub mod terminal_guard;

pub use dialogs::{HelpDialog, ViewerDialog};
pub use guide::Guide;
pub use terminal_guard::{install_panic_hook, TerminalGuard};

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::{backend::TestBackend, Terminal};

    /// Rendered buffer as text, one line per row
    pub(crate) fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width).max(1);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
