use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::descriptor::{load_descriptor, EntityDescriptor, ProjectMeta};
use super::entity::{save_entity_json, EntityData};
use super::error::{GenerationError, Result};
use super::paths::project_root;
use super::templates::Generator;

/// Templates making up one generated module, in generation order
///
/// Identifiers are relative to the template root. Changing this list changes
/// what every generation run produces.
pub const TEMPLATES_TO_GENERATE: &[&str] = &[
    "src/main/java/adapters/datasources/xxx/model/XxxEntity.java.j2",
    "src/main/java/adapters/datasources/xxx/XxxMapper.java.j2",
    "src/main/java/adapters/datasources/xxx/XxxPanacheAdapter.java.j2",
    "src/main/java/adapters/rest/controllers/xxx/XxxController.java.j2",
    "src/main/java/adapters/rest/controllers/xxx/XxxMapper.java.j2",
    "src/main/java/adapters/rest/controllers/xxx/model/XxxSchema.java.j2",
    "src/main/java/application/xxx/XxxDatasourcePort.java.j2",
    "src/main/java/application/xxx/XxxService.java.j2",
    "src/main/java/application/xxx/model/Xxx.java.j2",
    "src/main/resources/application.properties.j2",
    "src/main/java/Application.java.j2",
];

/// Result of generating one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// `<output>/<company>/<project>`
    pub output_root: PathBuf,
    /// Written files, in catalog order
    pub files: Vec<PathBuf>,
}

impl Generator {
    /// Render the whole catalog for the descriptor at `descriptor_path`
    ///
    /// Stops at the first failing template. Files written before the failure
    /// stay on disk.
    ///
    /// # Errors
    ///
    /// [`GenerationError::EmptyFields`] before anything is written when the
    /// descriptor has no fields; otherwise the first template error.
    pub fn generate_all_templates(
        &self,
        descriptor_path: &Path,
        output_root: &Path,
    ) -> Result<GenerationOutcome> {
        info!(descriptor = %descriptor_path.display(), "starting template generation");
        let descriptor = load_descriptor(descriptor_path).inspect_err(|e| {
            error!(descriptor = %descriptor_path.display(), error = %e, "descriptor rejected");
        })?;
        self.generate_descriptor(&descriptor, output_root)
            .inspect_err(|e| {
                error!(descriptor = %descriptor_path.display(), error = %e, "template generation aborted");
            })
    }

    /// Render the whole catalog for an already loaded descriptor
    pub fn generate_descriptor(
        &self,
        descriptor: &EntityDescriptor,
        output_root: &Path,
    ) -> Result<GenerationOutcome> {
        if descriptor.fields.is_empty() {
            warn!(entity = %descriptor.entity_name, "refusing to generate an entity without fields");
            return Err(GenerationError::EmptyFields {
                entity: descriptor.entity_name.clone(),
            });
        }

        let files = TEMPLATES_TO_GENERATE
            .iter()
            .map(|template| self.write_template(descriptor, template, output_root))
            .collect::<Result<Vec<_>>>()?;

        info!(
            entity = %descriptor.entity_name,
            files = files.len(),
            "template generation completed"
        );
        Ok(GenerationOutcome {
            output_root: project_root(output_root, descriptor),
            files,
        })
    }

    /// Generate every entity of a project, one after the other
    ///
    /// Each composed descriptor is saved to `<work_dir>/<Table>.json` and then
    /// generated from that file. The first failing entity stops the run.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidProject`] for an empty company or project name
    /// or an empty entity list, then any per-entity error.
    pub fn generate_entities(
        &self,
        meta: &ProjectMeta,
        entities: Vec<EntityData>,
        work_dir: &Path,
        output_root: &Path,
    ) -> Result<Vec<GenerationOutcome>> {
        if meta.company.trim().is_empty() {
            return Err(GenerationError::InvalidProject {
                reason: "The company name cannot be empty".to_string(),
            });
        }
        if meta.project.trim().is_empty() {
            return Err(GenerationError::InvalidProject {
                reason: "The project name cannot be empty".to_string(),
            });
        }
        if entities.is_empty() {
            return Err(GenerationError::InvalidProject {
                reason: "No entities have been created yet".to_string(),
            });
        }

        let mut outcomes = Vec::with_capacity(entities.len());
        for entity in entities {
            let descriptor = EntityDescriptor::compose(meta, entity);
            let entity_name = descriptor.entity_name.clone();
            info!(entity = %entity_name, "injecting project metadata");
            let descriptor_path = save_entity_json(&entity_name, &descriptor, work_dir)?;
            if descriptor.fields.is_empty() {
                error!(entity = %entity_name, "no fields found");
                return Err(GenerationError::EmptyFields {
                    entity: entity_name,
                });
            }
            outcomes.push(self.generate_all_templates(&descriptor_path, output_root)?);
        }
        Ok(outcomes)
    }
}
