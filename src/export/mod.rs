//! Static rendering of the whole guide.
//!
//! Produces a single Markdown document: the guide header, every step with
//! its detail and checklist, then each step's reference pages.

pub mod markdown;

use anyhow::{Context, Result};
use std::path::Path;

use crate::content::{ContentPage, ContentTable, PageKind, Step};
use markdown::{blockquote, bullet_list, checklist, code_block, heading, link, table};

pub struct MarkdownExporter<'a> {
    table: &'a ContentTable,
}

impl<'a> MarkdownExporter<'a> {
    pub fn new(table: &'a ContentTable) -> Self {
        Self { table }
    }

    pub fn render(&self) -> String {
        let header = self.table.header();
        let mut output = heading(1, &header.title);

        if !header.badge.is_empty() {
            output.push_str(&format!("**{}**\n\n", header.badge));
        }
        if !header.subtitle.is_empty() {
            output.push_str(&blockquote(&header.subtitle));
        }

        output.push_str(&heading(2, "Overview"));
        output.push_str(&self.overview_table());

        for step in self.table.steps() {
            output.push_str(&self.render_step(step));
        }

        output
    }

    fn overview_table(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .table
            .steps()
            .iter()
            .map(|step| {
                vec![
                    (step.id + 1).to_string(),
                    step.title.clone(),
                    step.short_summary.clone(),
                    self.table.pages_for(step.id).len().to_string(),
                ]
            })
            .collect();
        table(&["#", "Step", "Summary", "Pages"], &rows)
    }

    fn render_step(&self, step: &Step) -> String {
        let mut output = heading(2, &format!("{}. {}", step.id + 1, step.title));

        if !step.short_summary.is_empty() {
            output.push_str(&format!("_{}_\n\n", step.short_summary));
        }
        if !step.detail.is_empty() {
            output.push_str(&step.detail);
            output.push_str("\n\n");
        }
        if !step.checklist.is_empty() {
            output.push_str(&heading(3, "Guidance & Checklist"));
            output.push_str(&checklist(&step.checklist));
        }

        if !self.table.has_authored_pages(step.id) {
            return output;
        }

        let pages = self.table.pages_for(step.id);
        for (index, page) in pages.iter().enumerate() {
            output.push_str(&render_page(page, index, pages.len()));
        }

        output
    }

    /// Write the rendered guide, creating parent directories
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create export directory {}", parent.display())
                })?;
            }
        }

        std::fs::write(path, self.render())
            .with_context(|| format!("Failed to write export to {}", path.display()))?;

        tracing::info!(output = %path.display(), "Exported guide");
        Ok(())
    }
}

fn render_page(page: &ContentPage, index: usize, total: usize) -> String {
    let title = if page.icon.is_empty() {
        format!("{} ({}/{})", page.title, index + 1, total)
    } else {
        format!("{} {} ({}/{})", page.icon, page.title, index + 1, total)
    };
    let mut output = heading(3, &title);

    if !page.description.is_empty() {
        output.push_str(&page.description);
        output.push_str("\n\n");
    }
    output.push_str(&bullet_list(&page.items));

    match &page.kind {
        PageKind::Plain => {}
        PageKind::Samples { samples } => {
            for sample in samples {
                output.push_str(&format!("**{}**\n\n", sample.title));
                output.push_str(&code_block(&sample.code, Some("json")));
            }
        }
        PageKind::Resources { .. } => {
            let links: Vec<String> = page
                .links()
                .iter()
                .map(|l| link(&l.label, &l.url))
                .collect();
            output.push_str(&bullet_list(&links));
        }
    }

    output
}
