use std::path::Path;
use tracing::{error, info};

use super::error::GenerationError;

/// Progress callbacks invoked by the pipeline
///
/// The pipeline reports through this trait instead of a process-wide logger,
/// so a front end can surface progress however it likes. All methods default
/// to doing nothing.
pub trait GenerationReporter: Send + Sync {
    /// A template is about to be rendered
    fn template_started(&self, _template: &str) {}
    /// A template was rendered and written to `path`
    fn file_written(&self, _template: &str, _path: &Path) {}
    /// A template failed; the error is returned to the caller right after
    fn template_failed(&self, _template: &str, _error: &GenerationError) {}
}

/// Reporter that forwards every event to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl GenerationReporter for TracingReporter {
    fn template_started(&self, template: &str) {
        info!(template, "rendering template");
    }

    fn file_written(&self, template: &str, path: &Path) {
        info!(template, path = %path.display(), "file generated");
    }

    fn template_failed(&self, template: &str, error: &GenerationError) {
        error!(template, %error, "template generation failed");
    }
}
