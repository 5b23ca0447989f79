//! Serde shapes for the guide content file.
//!
//! The same shapes are used for the embedded guide (`guide.json`) and for
//! external content files passed with `--content` or `content.path`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position of a step in the step sequence (0-based)
pub type StepId = usize;

/// Header texts shown above the step list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideHeader {
    /// Small badge line (e.g., "Frontend Development Workflow")
    #[serde(default)]
    pub badge: String,
    /// Main title
    pub title: String,
    /// One-sentence subtitle
    #[serde(default)]
    pub subtitle: String,
}

impl Default for GuideHeader {
    fn default() -> Self {
        Self {
            badge: String::new(),
            title: "Standard Operating Procedure".to_string(),
            subtitle: String::new(),
        }
    }
}

/// One stage of the documented workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Assigned from the step's position when the table is built
    #[serde(skip)]
    pub id: StepId,
    pub title: String,
    #[serde(rename = "short", default)]
    pub short_summary: String,
    #[serde(default)]
    pub detail: String,
    /// Display order is meaningful
    #[serde(default)]
    pub checklist: Vec<String>,
}

/// One page of deep-reference material for a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPage {
    pub title: String,
    /// Opaque symbol reference, rendered verbatim
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub kind: PageKind,
}

/// What a page carries beyond its title, items and description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageKind {
    Plain,
    /// Page with supplementary configuration snippets behind a toggle
    Samples { samples: Vec<Sample> },
    /// Page listing external learning resources
    Resources { groups: Vec<ResourceGroup> },
}

/// A titled configuration snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub title: String,
    pub code: String,
}

/// Authoring-time grouping of resource links; the viewer flattens groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub key: String,
    #[serde(default)]
    pub links: Vec<ResourceLink>,
}

/// An external link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub label: String,
    pub url: String,
}

/// Top-level layout of a content file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub guide: GuideHeader,
    pub steps: Vec<Step>,
    /// Keyed by step id (decimal strings in JSON)
    #[serde(default)]
    pub pages: BTreeMap<StepId, Vec<ContentPage>>,
}

impl ContentPage {
    /// Sample snippets, if this is a sample page
    pub fn samples(&self) -> Option<&[Sample]> {
        match &self.kind {
            PageKind::Samples { samples } => Some(samples),
            _ => None,
        }
    }

    /// True when the page offers a show/hide samples control
    pub fn has_samples(&self) -> bool {
        self.samples().is_some_and(|s| !s.is_empty())
    }

    /// All resource links across groups, in authoring order
    pub fn links(&self) -> Vec<&ResourceLink> {
        match &self.kind {
            PageKind::Resources { groups } => groups.iter().flat_map(|g| g.links.iter()).collect(),
            _ => Vec::new(),
        }
    }
}
