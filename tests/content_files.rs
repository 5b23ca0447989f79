//! Content file integration tests
//!
//! Exercises the path a user-supplied guide takes: a JSON file on disk is
//! loaded and validated, navigated, exported to Markdown, and its resource
//! links are handed to an opener.

use std::fs;
use std::path::PathBuf;

use sopguide::content::{self, ContentError, ContentTable, PageKind};
use sopguide::export::MarkdownExporter;
use sopguide::links::{LinkError, LinkOpener, RecordingLinkOpener};
use sopguide::navigation::ContentViewer;
use tempfile::TempDir;

const TEAM_GUIDE: &str = r#"{
  "guide": {
    "badge": "Backend Workflow",
    "title": "Service Release SOP",
    "subtitle": "From ticket to production."
  },
  "steps": [
    { "title": "Plan", "short": "Read the ticket", "detail": "Understand scope.", "checklist": ["Estimate"] },
    { "title": "Build", "short": "Write the code", "detail": "Implement it.", "checklist": [] },
    { "title": "Ship", "short": "Release", "detail": "Deploy it.", "checklist": ["Tag", "Announce"] }
  ],
  "pages": {
    "0": [
      { "kind": "plain", "title": "Scope", "icon": "🎯", "items": ["Acceptance criteria"], "description": "What done means." },
      { "kind": "samples", "title": "Config", "icon": "⚙️", "items": [], "description": "Example config.",
        "samples": [ { "title": "service.toml", "code": "[service]\nport = 8080" } ] }
    ],
    "2": [
      { "kind": "resources", "title": "Runbooks", "icon": "📚", "items": [], "description": "Read before releasing.",
        "groups": [
          { "key": "internal", "links": [ { "label": "Release runbook", "url": "https://example.com/runbook" } ] },
          { "key": "external", "links": [
            { "label": "Semver", "url": "https://semver.org" },
            { "label": "Local notes", "url": "file:///tmp/notes.txt" }
          ] }
        ] }
    ]
  }
}"#;

fn write_guide(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn external_guide_loads_and_navigates() {
    let dir = TempDir::new().unwrap();
    let path = write_guide(&dir, "team.json", TEAM_GUIDE);

    let table = content::load(Some(&path)).unwrap();
    assert_eq!(table.header().title, "Service Release SOP");
    assert_eq!(table.step_count(), 3);
    assert_eq!(table.steps()[2].id, 2);

    // Build has no pages of its own and shares Plan's
    assert!(!table.has_authored_pages(1));
    assert_eq!(table.pages_for(1), table.pages_for(0));

    let viewer = ContentViewer::new().open(1).next(&table);
    assert_eq!(viewer.page(), 1);
    assert_eq!(viewer.next(&table).page(), 1);

    let viewer = viewer.toggle_samples(&table);
    assert!(viewer.samples_visible());
    assert!(!viewer.previous().samples_visible());
}

#[test]
fn resource_groups_flatten_in_authoring_order() {
    let table = ContentTable::from_json(TEAM_GUIDE).unwrap();
    let labels: Vec<_> = table.all_links().iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Release runbook", "Semver", "Local notes"]);

    match &table.pages_for(2)[0].kind {
        PageKind::Resources { groups } => {
            let keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
            assert_eq!(keys, vec!["internal", "external"]);
        }
        other => panic!("expected a resource page, got {:?}", other),
    }
}

#[test]
fn only_web_links_reach_the_opener() {
    let table = ContentTable::from_json(TEAM_GUIDE).unwrap();
    let opener = RecordingLinkOpener::new();

    let mut refused = 0;
    for link in table.all_links() {
        match opener.open(&link.url) {
            Ok(()) => {}
            Err(LinkError::UnsupportedScheme(url)) => {
                assert_eq!(url, "file:///tmp/notes.txt");
                refused += 1;
            }
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    assert_eq!(refused, 1);
    assert_eq!(
        opener.opened(),
        vec!["https://example.com/runbook", "https://semver.org"]
    );
}

#[test]
fn export_contains_every_step_and_page_once() {
    let dir = TempDir::new().unwrap();
    let table = ContentTable::from_json(TEAM_GUIDE).unwrap();
    let out = dir.path().join("docs").join("sop.md");

    MarkdownExporter::new(&table).write(&out).unwrap();
    let doc = fs::read_to_string(&out).unwrap();

    assert!(doc.starts_with("# Service Release SOP\n\n**Backend Workflow**"));
    assert!(doc.contains("## 1. Plan"));
    assert!(doc.contains("## 3. Ship"));
    assert!(doc.contains("- [ ] Announce"));
    assert!(doc.contains("```json\n[service]\nport = 8080\n```"));
    assert!(doc.contains("[Semver](https://semver.org)"));
    // Shared pages are rendered under the step that owns them only
    assert_eq!(doc.matches("### 🎯 Scope (1/2)").count(), 1);
}

#[test]
fn builtin_round_trips_through_file_layout() {
    let dir = TempDir::new().unwrap();
    let builtin = ContentTable::builtin().unwrap();
    let json = serde_json::to_string_pretty(&builtin.to_file()).unwrap();
    let path = write_guide(&dir, "copy.json", &json);

    let reloaded = ContentTable::from_path(&path).unwrap();
    assert_eq!(reloaded.steps(), builtin.steps());
    assert_eq!(reloaded.pages_for(1), builtin.pages_for(1));
    assert_eq!(reloaded.header(), builtin.header());
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = content::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn invalid_guides_are_rejected() {
    let cases = [
        (r#"{ "steps": [] }"#, "no steps"),
        (r#"{ "steps": [ { "title": "  " } ], "pages": { "0": [ { "kind": "plain", "title": "P" } ] } }"#, "empty title"),
        (r#"{ "steps": [ { "title": "A" } ], "pages": { "0": [] } }"#, "empty page list"),
        (r#"{ "steps": [ { "title": "A" } ], "pages": { "1": [ { "kind": "plain", "title": "P" } ] } }"#, "no fallback"),
        (r#"{ "steps": [ { "title": "A" } ], "pages": { "0": [ { "kind": "samples", "title": "P", "samples": [] } ] } }"#, "empty samples"),
        (r#"{ "steps": [ "#, "malformed"),
    ];

    for (json, label) in cases {
        let err = ContentTable::from_json(json).unwrap_err();
        let expected = match label {
            "no steps" => matches!(err, ContentError::NoSteps),
            "empty title" => matches!(err, ContentError::EmptyStepTitle(0)),
            "empty page list" => matches!(err, ContentError::EmptyPageList(0)),
            "no fallback" => matches!(err, ContentError::NoFallbackPages(0)),
            "empty samples" => matches!(err, ContentError::EmptySamples { step: 0, page: 0 }),
            _ => matches!(err, ContentError::Parse(_)),
        };
        assert!(expected, "{}: unexpected error {:?}", label, err);
    }
}
