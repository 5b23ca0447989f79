//! Guide content: the immutable step sequence and per-step reference pages.
//!
//! A `ContentTable` is built once at start-up (from the embedded guide or
//! an external file) and passed by reference to everything that reads it.

pub mod loader;
pub mod schema;

pub use loader::{load, ContentError};
pub use schema::{
    ContentFile, ContentPage, GuideHeader, PageKind, ResourceGroup, ResourceLink, Sample, Step,
    StepId,
};

use std::collections::BTreeMap;

/// Embedded guide content
const BUILTIN_GUIDE: &str = include_str!("guide.json");

/// Step whose pages stand in for any step without authored pages
pub const FALLBACK_STEP: StepId = 0;

/// Read-only mapping from step id to its steps and content pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTable {
    header: GuideHeader,
    steps: Vec<Step>,
    pages: BTreeMap<StepId, Vec<ContentPage>>,
}

impl ContentTable {
    /// Build a table without validation. Step ids are reassigned from position.
    pub fn new(mut steps: Vec<Step>, pages: BTreeMap<StepId, Vec<ContentPage>>) -> Self {
        for (position, step) in steps.iter_mut().enumerate() {
            step.id = position;
        }
        Self {
            header: GuideHeader::default(),
            steps,
            pages,
        }
    }

    pub fn with_header(mut self, header: GuideHeader) -> Self {
        self.header = header;
        self
    }

    /// The guide compiled into the binary
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_GUIDE)
    }

    pub fn header(&self) -> &GuideHeader {
        &self.header
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.steps.get(id)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Pages for a step.
    ///
    /// Steps without an authored entry (including unknown ids) get the pages
    /// of step 0; if step 0 has none either the result is empty. An authored
    /// empty list is returned as is. Never fails.
    pub fn pages_for(&self, id: StepId) -> &[ContentPage] {
        self.authored_pages(id)
            .or_else(|| self.authored_pages(FALLBACK_STEP))
            .unwrap_or(&[])
    }

    /// True when `id` has its own pages rather than the fallback
    pub fn has_authored_pages(&self, id: StepId) -> bool {
        self.authored_pages(id).is_some()
    }

    fn authored_pages(&self, id: StepId) -> Option<&[ContentPage]> {
        self.pages
            .get(&id)
            .map(Vec::as_slice)
    }

    /// Every authored page list, keyed by step id, in id order
    pub fn page_entries(&self) -> impl Iterator<Item = (StepId, &[ContentPage])> {
        self.pages.iter().map(|(id, pages)| (*id, pages.as_slice()))
    }

    /// Every resource link in the table, in step then authoring order
    pub fn all_links(&self) -> Vec<&ResourceLink> {
        self.pages
            .values()
            .flatten()
            .flat_map(ContentPage::links)
            .collect()
    }

    /// Convert back to the file layout
    pub fn to_file(&self) -> ContentFile {
        ContentFile {
            guide: self.header.clone(),
            steps: self.steps.clone(),
            pages: self.pages.clone(),
        }
    }
}

impl From<ContentFile> for ContentTable {
    fn from(file: ContentFile) -> Self {
        ContentTable::new(file.steps, file.pages).with_header(file.guide)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn step(title: &str) -> Step {
        Step {
            id: 0,
            title: title.to_string(),
            short_summary: format!("{} summary", title),
            detail: format!("{} detail", title),
            checklist: vec![format!("{} item", title)],
        }
    }

    pub fn plain_page(title: &str) -> ContentPage {
        ContentPage {
            title: title.to_string(),
            icon: "•".to_string(),
            items: vec![format!("{} item", title)],
            description: format!("{} description", title),
            kind: PageKind::Plain,
        }
    }

    pub fn sample_page(title: &str) -> ContentPage {
        ContentPage {
            kind: PageKind::Samples {
                samples: vec![Sample {
                    title: format!("{} sample", title),
                    code: "{}".to_string(),
                }],
            },
            ..plain_page(title)
        }
    }

    /// Resource page with one group per `(key, labels)` entry
    pub fn resource_page(title: &str, groups: &[(&str, &[&str])]) -> ContentPage {
        ContentPage {
            kind: PageKind::Resources {
                groups: groups
                    .iter()
                    .map(|(key, labels)| ResourceGroup {
                        key: key.to_string(),
                        links: labels
                            .iter()
                            .map(|label| ResourceLink {
                                label: label.to_string(),
                                url: format!("https://example.com/{}", label),
                            })
                            .collect(),
                    })
                    .collect(),
            },
            ..plain_page(title)
        }
    }

    /// Table whose step `i` has `counts[i]` plain pages
    pub fn table_with_page_counts(counts: &[usize]) -> ContentTable {
        let steps = (0..counts.len())
            .map(|i| step(&format!("Step {}", i)))
            .collect();
        let pages = counts
            .iter()
            .enumerate()
            .map(|(i, count)| {
                let pages = (0..*count)
                    .map(|p| plain_page(&format!("Step {} page {}", i, p)))
                    .collect();
                (i, pages)
            })
            .collect();
        ContentTable::new(steps, pages)
    }
}
