use minijinja::{path_loader, AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::descriptor::{load_descriptor, EntityDescriptor};
use super::error::{GenerationError, Result};
use super::imports::{get_required_imports, get_type_imports, type_import};
use super::paths::{resolve_output_path, template_identifier};
use super::report::{GenerationReporter, TracingReporter};
use crate::naming::to_snake_case;

/// Id type used by templates when no field is flagged `isId`
pub const DEFAULT_ID_TYPE: &str = "Long";
/// Id name used by templates when no field is flagged `isId`
pub const DEFAULT_ID_NAME: &str = "id";

/// Values visible to a template body
///
/// The descriptor keys (`company`, `project`, `packageName`, `table`, `Table`,
/// `tables`, `capitalTables`, `endpoint`, `fields`) plus values computed from
/// them:
///
/// - `imports`: every import of the persistence entity, sorted
/// - `typeImports`: only the imports required by field types, sorted
/// - `idType`, `idName`: type and name of the first `isId` field
/// - `idImport`: import needed by `idType`, or none
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext<'a> {
    #[serde(flatten)]
    pub descriptor: &'a EntityDescriptor,
    pub imports: Vec<String>,
    pub type_imports: Vec<String>,
    pub id_type: &'a str,
    pub id_name: &'a str,
    pub id_import: Option<&'static str>,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn new(descriptor: &'a EntityDescriptor) -> Self {
        let id = descriptor.id_field();
        let id_type = id
            .map(|f| f.ty.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_ID_TYPE);
        RenderContext {
            descriptor,
            imports: get_required_imports(&descriptor.fields),
            type_imports: get_type_imports(&descriptor.fields),
            id_type,
            id_name: id.map_or(DEFAULT_ID_NAME, |f| f.name.as_str()),
            id_import: type_import(id_type),
        }
    }
}

fn snake_case_filter(value: &str) -> String {
    to_snake_case(value)
}

/// Template environment shared by every render of one generation run
///
/// Built once by the caller and passed down; it owns the template root, the
/// configured engine and the [`GenerationReporter`].
pub struct Generator {
    env: Environment<'static>,
    template_root: PathBuf,
    reporter: Box<dyn GenerationReporter>,
}

impl Generator {
    /// Generator reading templates from `template_root`, reporting through `tracing`
    #[must_use]
    pub fn new(template_root: impl Into<PathBuf>) -> Self {
        let template_root = template_root.into();
        let mut env = Environment::new();
        env.set_loader(path_loader(&template_root));
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("snake_case", snake_case_filter);
        Generator {
            env,
            template_root,
            reporter: Box::new(TracingReporter),
        }
    }

    /// Replace the reporter
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl GenerationReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    #[must_use]
    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    /// Render one template body against `descriptor` without touching the filesystem
    ///
    /// # Errors
    ///
    /// [`GenerationError::TemplateNotFound`] if no asset backs `template`,
    /// [`GenerationError::TemplateRender`] on syntax errors or unknown names.
    pub fn render_template(&self, descriptor: &EntityDescriptor, template: &str) -> Result<String> {
        let template = template_identifier(&self.template_root, template);
        let tmpl = self.env.get_template(&template).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => GenerationError::TemplateNotFound {
                template: template.clone(),
            },
            _ => GenerationError::TemplateRender {
                template: template.clone(),
                reason: e.to_string(),
            },
        })?;
        tmpl.render(RenderContext::new(descriptor))
            .map_err(|e| GenerationError::TemplateRender {
                template: template.clone(),
                reason: e.to_string(),
            })
    }

    /// Render `template` and write it under `output_root`, returning the written path
    ///
    /// The body is rendered before any directory is created, so a failure
    /// leaves nothing behind for this template. An existing file is overwritten.
    pub fn write_template(
        &self,
        descriptor: &EntityDescriptor,
        template: &str,
        output_root: &Path,
    ) -> Result<PathBuf> {
        let template = template_identifier(&self.template_root, template);
        self.reporter.template_started(&template);
        match self.write_template_inner(descriptor, &template, output_root) {
            Ok(path) => {
                self.reporter.file_written(&template, &path);
                Ok(path)
            }
            Err(e) => {
                self.reporter.template_failed(&template, &e);
                Err(e)
            }
        }
    }

    fn write_template_inner(
        &self,
        descriptor: &EntityDescriptor,
        template: &str,
        output_root: &Path,
    ) -> Result<PathBuf> {
        let output_path = resolve_output_path(output_root, template, descriptor);
        debug!(template, output = %output_path.display(), "resolved output path");

        let rendered = self.render_template(descriptor, template)?;

        let io_err = |path: &Path, source| GenerationError::IoWrite {
            path: path.to_path_buf(),
            template: Some(template.to_string()),
            source,
        };
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
        fs::write(&output_path, rendered).map_err(|e| io_err(&output_path, e))?;
        Ok(output_path)
    }

    /// Load the descriptor at `descriptor_path` and render one template from it
    ///
    /// # Errors
    ///
    /// Any [`GenerationError`] kind except `EmptyFields` and `InvalidProject`.
    /// Nothing is written when an error is returned.
    pub fn render_template_to_output(
        &self,
        descriptor_path: &Path,
        template: &str,
        output_root: &Path,
    ) -> Result<PathBuf> {
        debug!(descriptor = %descriptor_path.display(), template, "loading descriptor");
        let descriptor = load_descriptor(descriptor_path).inspect_err(|e| {
            self.reporter.template_failed(template, e);
        })?;
        self.write_template(&descriptor, template, output_root)
    }
}
