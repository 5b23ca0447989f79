//! Markdown formatting helpers for guide export.

/// Build a markdown table from headers and rows
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut output = String::new();

    output.push_str("| ");
    output.push_str(&headers.join(" | "));
    output.push_str(" |\n");

    output.push_str("| ");
    output.push_str(
        &headers
            .iter()
            .map(|_| "---")
            .collect::<Vec<_>>()
            .join(" | "),
    );
    output.push_str(" |\n");

    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
        output.push_str("| ");
        output.push_str(&cells.join(" | "));
        output.push_str(" |\n");
    }

    output
}

/// Pipes would split a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Format a heading with the specified level
pub fn heading(level: u8, text: &str) -> String {
    let hashes = "#".repeat(level as usize);
    format!("{} {}\n\n", hashes, text)
}

/// Format a fenced code block with optional language.
///
/// The fence grows past any backtick run inside `code`.
pub fn code_block(code: &str, language: Option<&str>) -> String {
    let lang = language.unwrap_or("");
    let longest_run = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run.max(2) + 1);
    format!("{}{}\n{}\n{}\n\n", fence, lang, code, fence)
}

/// Format a bullet list
pub fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    items
        .iter()
        .map(|item| format!("- {}\n", item))
        .collect::<String>()
        + "\n"
}

/// Format a task list (unchecked boxes)
pub fn checklist(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    items
        .iter()
        .map(|item| format!("- [ ] {}\n", item))
        .collect::<String>()
        + "\n"
}

/// Format an inline link
pub fn link(label: &str, url: &str) -> String {
    format!("[{}]({})", label.replace(']', "\\]"), url)
}

/// Format a block quote
pub fn blockquote(text: &str) -> String {
    text.lines()
        .map(|line| format!("> {}\n", line))
        .collect::<String>()
        + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        let result = table(
            &["Step", "Pages"],
            &[
                vec!["Tools Setup".to_string(), "6".to_string()],
                vec!["A | B".to_string(), "1".to_string()],
            ],
        );
        assert!(result.contains("| Step | Pages |"));
        assert!(result.contains("| --- | --- |"));
        assert!(result.contains("| Tools Setup | 6 |"));
        assert!(result.contains("| A \\| B | 1 |"));
    }

    #[test]
    fn test_table_empty_headers() {
        assert_eq!(table(&[], &[]), "");
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(1, "Title"), "# Title\n\n");
        assert_eq!(heading(3, "Sub"), "### Sub\n\n");
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            code_block("{}", Some("json")),
            "```json\n{}\n```\n\n"
        );
    }

    #[test]
    fn test_code_block_with_backticks() {
        let block = code_block("use ``` here", None);
        assert!(block.starts_with("````\n"));
        assert!(block.ends_with("\n````\n\n"));
    }

    #[test]
    fn test_bullet_and_checklist() {
        let items = vec!["one".to_string(), "two".to_string()];
        assert_eq!(bullet_list(&items), "- one\n- two\n\n");
        assert_eq!(checklist(&items), "- [ ] one\n- [ ] two\n\n");
        assert_eq!(bullet_list(&[]), "");
        assert_eq!(checklist(&[]), "");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            link("Docs", "https://example.com"),
            "[Docs](https://example.com)"
        );
        assert_eq!(link("a]b", "https://x"), "[a\\]b](https://x)");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(blockquote("a\nb"), "> a\n> b\n\n");
    }
}
