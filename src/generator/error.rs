use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure of a generation call
///
/// Each variant is one error kind a caller can match on. The `Display` output
/// is written to be shown to a user as-is.
#[derive(Debug)]
pub enum GenerationError {
    /// The descriptor file is missing, is not valid JSON, or lacks a required key
    DescriptorLoad {
        /// Descriptor file that failed to load
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },
    /// A catalog entry has no backing template asset
    ///
    /// This points at a packaging defect, not at user input.
    TemplateNotFound {
        /// Template identifier, relative to the template root
        template: String,
    },
    /// The template exists but could not be parsed or rendered
    TemplateRender {
        /// Template identifier, relative to the template root
        template: String,
        /// Engine error message
        reason: String,
    },
    /// Creating a directory or writing a file failed
    IoWrite {
        /// Path that could not be written
        path: PathBuf,
        /// Template being rendered when the write failed, if any
        template: Option<String>,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The descriptor has no fields, so the generated module would be degenerate
    EmptyFields {
        /// `Table` name of the refused entity
        entity: String,
    },
    /// Project metadata is unusable (empty company or project, no entities)
    InvalidProject {
        /// What is missing
        reason: String,
    },
}

impl GenerationError {
    /// Template identifier this error is attached to, when there is one
    #[must_use]
    pub fn template(&self) -> Option<&str> {
        match self {
            GenerationError::TemplateNotFound { template }
            | GenerationError::TemplateRender { template, .. } => Some(template),
            GenerationError::IoWrite { template, .. } => template.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn descriptor_load(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        GenerationError::DescriptorLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::DescriptorLoad { path, reason } => {
                write!(f, "Cannot load descriptor {}: {}", path.display(), reason)
            }
            GenerationError::TemplateNotFound { template } => {
                write!(f, "Template not found: {template}")
            }
            GenerationError::TemplateRender { template, reason } => {
                write!(f, "Cannot render template {template}: {reason}")
            }
            GenerationError::IoWrite {
                path,
                template: Some(template),
                source,
            } => write!(
                f,
                "Cannot write {} (template {}): {}",
                path.display(),
                template,
                source
            ),
            GenerationError::IoWrite {
                path,
                template: None,
                source,
            } => write!(f, "Cannot write {}: {}", path.display(), source),
            GenerationError::EmptyFields { entity } => write!(
                f,
                "The entity '{entity}' has no fields. Please add at least one field before generating."
            ),
            GenerationError::InvalidProject { reason } => f.write_str(reason),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::IoWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result alias for the generation pipeline
pub type Result<T> = std::result::Result<T, GenerationError>;
