//! # Generator Module
//!
//! Renders a fixed catalog of Jinja templates against an entity descriptor to
//! produce one hexagonal Java API module: persistence entity, mappers, Panache
//! adapter, REST controller and schema, application port and service, domain
//! model, `application.properties` and the application bootstrap class.
//!
//! ## Pipeline
//!
//! ```text
//! descriptor JSON → load_descriptor → resolve_output_path → render → write
//! ```
//!
//! 1. **Load** - [`load_descriptor`] parses and validates the descriptor once
//! 2. **Resolve** - [`resolve_output_path`] maps a template identifier to its
//!    output file, substituting `xxx`/`Xxx` with the entity names
//! 3. **Render** - the template body sees the descriptor plus the computed
//!    `imports` list and the `snake_case` filter
//! 4. **Write** - the file is written, replacing any previous version
//!
//! ## Generated Structure
//!
//! ```text
//! <output>/<company>/<project>/
//! ├── src/main/java/<package/path>/
//! │   ├── adapters/datasources/<table>/model/<Table>Entity.java
//! │   ├── adapters/datasources/<table>/<Table>Mapper.java
//! │   ├── adapters/datasources/<table>/<Table>PanacheAdapter.java
//! │   ├── adapters/rest/controllers/<table>/<Table>Controller.java
//! │   ├── adapters/rest/controllers/<table>/<Table>Mapper.java
//! │   ├── adapters/rest/controllers/<table>/model/<Table>Schema.java
//! │   ├── application/<table>/<Table>DatasourcePort.java
//! │   ├── application/<table>/<Table>Service.java
//! │   ├── application/<table>/model/<Table>.java
//! │   └── Application.java
//! └── src/main/resources/
//!     └── application.properties
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hexapi::generator::Generator;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = Generator::new("templates");
//! let outcome = generator.generate_all_templates(Path::new("temp/User.json"), Path::new("output"))?;
//! println!("generated {} files under {:?}", outcome.files.len(), outcome.output_root);
//! # Ok(())
//! # }
//! ```
//!
//! ## Limitations
//!
//! Writes are not transactional. Two runs targeting the same output path race
//! and the last writer wins. A failed batch leaves already-written files in place.

mod catalog;
mod descriptor;
mod entity;
mod error;
mod imports;
mod paths;
mod report;
mod templates;

pub use catalog::{GenerationOutcome, TEMPLATES_TO_GENERATE};
pub use descriptor::{
    load_descriptor, parse_descriptor, EntityDescriptor, FieldDescriptor, NameVariants,
    ProjectMeta,
};
pub use entity::{build_entity_data, save_entity_json, EntityData, RawFieldInput};
pub use error::{GenerationError, Result};
pub use imports::{get_required_imports, get_type_imports, type_import, COMMON_IMPORTS};
pub use paths::{
    is_resource_template, project_root, resolve_output_path, substitute_tokens,
    template_identifier, ENTITY_TOKEN, JAVA_SOURCE_ROOT, RESOURCE_ROOT, TABLE_TOKEN,
    TEMPLATE_SUFFIX,
};
pub use report::{GenerationReporter, TracingReporter};
pub use templates::{Generator, RenderContext, DEFAULT_ID_NAME, DEFAULT_ID_TYPE};
