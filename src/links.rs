//! Opening external resource links in the host environment.
//!
//! Links are handed to the platform opener (or a configured command). The
//! opener is reaped on a background thread so the UI never waits on it.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::LinksConfig;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("opening links is disabled in configuration")]
    Disabled,

    #[error("refusing to open '{0}': only http and https links are supported")]
    UnsupportedScheme(String),

    #[error("no link opener found (tried {0})")]
    OpenerNotFound(String),

    #[error("failed to launch {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can hand a URL to a browser
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkError>;
}

/// Only web links leave the process
pub fn check_scheme(url: &str) -> Result<(), LinkError> {
    let lower = url.trim().to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Ok(())
    } else {
        Err(LinkError::UnsupportedScheme(url.to_string()))
    }
}

/// Opener that spawns the platform's default URL handler
#[derive(Debug, Clone)]
pub struct SystemLinkOpener {
    enabled: bool,
    /// Overrides the platform default (e.g., "firefox")
    command: Option<String>,
}

impl SystemLinkOpener {
    pub fn new(config: &LinksConfig) -> Self {
        Self {
            enabled: config.enabled,
            command: config.command.clone().filter(|c| !c.trim().is_empty()),
        }
    }

    /// Program name and leading arguments to run before the URL
    fn launcher(&self) -> (String, Vec<String>) {
        if let Some(command) = &self.command {
            let mut parts = command.split_whitespace().map(str::to_string);
            let program = parts.next().unwrap_or_default();
            return (program, parts.collect());
        }

        if cfg!(target_os = "macos") {
            ("open".to_string(), Vec::new())
        } else if cfg!(target_os = "windows") {
            // No shell in between, so `&` in a query string stays part of the URL
            (
                "rundll32".to_string(),
                vec!["url.dll,FileProtocolHandler".to_string()],
            )
        } else {
            ("xdg-open".to_string(), Vec::new())
        }
    }

    fn resolve(&self, program: &str) -> Result<PathBuf, LinkError> {
        which::which(program).map_err(|_| LinkError::OpenerNotFound(program.to_string()))
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        if !self.enabled {
            return Err(LinkError::Disabled);
        }
        check_scheme(url)?;

        let (program, args) = self.launcher();
        let path = self.resolve(&program)?;
        debug!(opener = %path.display(), url, "Launching link opener");

        spawn_reaped(&path, &args, url).map_err(|source| LinkError::SpawnFailed {
            command: program.clone(),
            source,
        })?;

        info!(url, "Opened external link");
        Ok(())
    }
}

/// Launch `program args.. url` detached from the terminal and wait for it on
/// its own thread, so finished openers do not linger as zombies.
fn spawn_reaped(
    program: &Path,
    args: &[String],
    url: &str,
) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            if !status.success() {
                debug!(%status, "Link opener exited with failure");
            }
            Some(status)
        }
        Err(err) => {
            debug!(error = %err, "Failed to wait for link opener");
            None
        }
    }))
}

/// Opener that remembers requested URLs instead of launching anything
#[derive(Debug, Clone, Default)]
pub struct RecordingLinkOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        check_scheme(url)?;
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url.to_string());
        }
        Ok(())
    }
}
