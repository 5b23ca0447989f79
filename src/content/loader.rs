//! Parsing and validation of content files

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::schema::{ContentFile, PageKind, StepId};
use super::{ContentTable, FALLBACK_STEP};

/// Problems with a content file, reported at start-up
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("content defines no steps")]
    NoSteps,

    #[error("step {0} has an empty title")]
    EmptyStepTitle(StepId),

    #[error("step {0} has no pages; it is needed as the fallback for every other step")]
    NoFallbackPages(StepId),

    #[error("pages for step {0} are declared but empty")]
    EmptyPageList(StepId),

    #[error("page {page} of step {step} is a sample page without samples")]
    EmptySamples { step: StepId, page: usize },

    #[error("page {page} of step {step} repeats resource group '{key}'")]
    DuplicateGroupKey {
        step: StepId,
        page: usize,
        key: String,
    },
}

impl ContentTable {
    /// Parse and validate content from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let file: ContentFile = serde_json::from_str(json)?;
        let table = ContentTable::from(file);
        table.validate()?;
        Ok(table)
    }

    /// Read, parse and validate a content file
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let json = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            steps = table.step_count(),
            "Loaded content file"
        );
        Ok(table)
    }

    /// Check the authoring rules a usable guide must satisfy
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.steps.is_empty() {
            return Err(ContentError::NoSteps);
        }

        for step in &self.steps {
            if step.title.trim().is_empty() {
                return Err(ContentError::EmptyStepTitle(step.id));
            }
        }

        for (step, pages) in &self.pages {
            if pages.is_empty() {
                return Err(ContentError::EmptyPageList(*step));
            }

            for (index, page) in pages.iter().enumerate() {
                match &page.kind {
                    PageKind::Plain => {}
                    PageKind::Samples { samples } => {
                        if samples.is_empty() {
                            return Err(ContentError::EmptySamples {
                                step: *step,
                                page: index,
                            });
                        }
                    }
                    PageKind::Resources { groups } => {
                        let mut seen = HashSet::new();
                        for group in groups {
                            if !seen.insert(group.key.as_str()) {
                                return Err(ContentError::DuplicateGroupKey {
                                    step: *step,
                                    page: index,
                                    key: group.key.clone(),
                                });
                            }
                        }
                    }
                }
            }
        }

        if !self.has_authored_pages(FALLBACK_STEP) {
            return Err(ContentError::NoFallbackPages(FALLBACK_STEP));
        }

        Ok(())
    }
}

/// Load the content table selected by configuration.
///
/// An explicit path wins; otherwise the embedded guide is used.
pub fn load(path: Option<&Path>) -> Result<ContentTable, ContentError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Using external content file");
            ContentTable::from_path(path)
        }
        None => ContentTable::builtin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"{
        "guide": {"title": "Mini"},
        "steps": [{"title": "Only"}],
        "pages": {"0": [{"kind": "plain", "title": "Intro"}]}
    }"#;

    #[test]
    fn test_from_json_minimal() {
        let table = ContentTable::from_json(MINIMAL).unwrap();
        assert_eq!(table.step_count(), 1);
        assert_eq!(table.header().title, "Mini");
        assert_eq!(table.pages_for(5)[0].title, "Intro");
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = ContentTable::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_validate_no_steps() {
        let err = ContentTable::from_json(r#"{"steps": []}"#).unwrap_err();
        assert!(matches!(err, ContentError::NoSteps));
    }

    #[test]
    fn test_validate_empty_title() {
        let json = r#"{"steps": [{"title": "  "}], "pages": {"0": [{"kind": "plain", "title": "P"}]}}"#;
        let err = ContentTable::from_json(json).unwrap_err();
        assert!(matches!(err, ContentError::EmptyStepTitle(0)));
    }

    #[test]
    fn test_validate_requires_fallback_pages() {
        let json = r#"{"steps": [{"title": "A"}, {"title": "B"}], "pages": {"1": [{"kind": "plain", "title": "P"}]}}"#;
        let err = ContentTable::from_json(json).unwrap_err();
        assert!(matches!(err, ContentError::NoFallbackPages(0)));
    }

    #[test]
    fn test_validate_empty_page_list() {
        let json = r#"{"steps": [{"title": "A"}], "pages": {"0": [{"kind": "plain", "title": "P"}], "3": []}}"#;
        let err = ContentTable::from_json(json).unwrap_err();
        assert!(matches!(err, ContentError::EmptyPageList(3)));
    }

    #[test]
    fn test_validate_empty_samples() {
        let json = r#"{"steps": [{"title": "A"}], "pages": {"0": [{"kind": "samples", "title": "S", "samples": []}]}}"#;
        let err = ContentTable::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            ContentError::EmptySamples { step: 0, page: 0 }
        ));
    }

    #[test]
    fn test_validate_duplicate_group_key() {
        let json = r#"{
            "steps": [{"title": "A"}],
            "pages": {"0": [{
                "kind": "resources",
                "title": "R",
                "groups": [{"key": "docs", "links": []}, {"key": "docs", "links": []}]
            }]}
        }"#;
        let err = ContentTable::from_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "page 0 of step 0 repeats resource group 'docs'"
        );
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let table = ContentTable::from_path(file.path()).unwrap();
        assert_eq!(table.steps()[0].title, "Only");
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ContentTable::from_path(Path::new("/nonexistent/guide.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/guide.json"));
    }

    #[test]
    fn test_load_defaults_to_builtin() {
        let table = load(None).unwrap();
        assert_eq!(table, ContentTable::builtin().unwrap());
    }

    #[test]
    fn test_builtin_passes_validation() {
        ContentTable::builtin().unwrap().validate().unwrap();
    }
}
