//! # HexAPI
//!
//! **HexAPI** generates the boilerplate of a hexagonal (ports and adapters)
//! Java REST API from a small JSON entity descriptor.
//!
//! ## Overview
//!
//! An entity is described once: company, project, Java package, entity name
//! and an ordered list of typed fields. HexAPI renders a fixed catalog of
//! Jinja templates against that descriptor and writes one Java project tree
//! per company and project, with the persistence entity, mappers, Panache
//! adapter, REST controller and schema, application port and service, domain
//! model, `application.properties` and the bootstrap class.
//!
//! ## Architecture
//!
//! - **[`naming`]** - Casing utilities turning free-form names into identifiers
//! - **[`generator`]** - Descriptor model, import resolution, output paths,
//!   template rendering and the batch drivers
//! - **[`config`]** - TOML and environment configuration of the binary
//! - **[`logging`]** - `tracing` subscriber with console and rotating file output
//! - **[`cli`]** - The `hexapi-gen` command-line front end
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(hexapi-gen)
//!     participant Entity as generator::build_entity_data
//!     participant Desc as generator::load_descriptor
//!     participant Gen as generator::Generator
//!     participant FS as File System
//!
//!     User->>CLI: new-entity --name "order line" --field id:Long:id
//!     CLI->>Entity: build_entity_data(name, raw fields)
//!     Entity-->>CLI: EntityData
//!     CLI->>FS: temp/OrderLine.json
//!
//!     User->>CLI: generate-project --company Acme --project Shop --entity temp/OrderLine.json
//!     CLI->>Gen: generate_entities(meta, entities)
//!     Gen->>FS: temp/OrderLine.json (with project metadata)
//!     Gen->>Desc: load_descriptor(path)
//!     loop every catalog template
//!         Gen->>Gen: resolve output path, render
//!         Gen->>FS: write file
//!     end
//!     Gen-->>CLI: GenerationOutcome
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! hexapi-gen new-entity --name user --field id:Long:id --field email:String
//! hexapi-gen generate-project --company acme --project shop --entity temp/User.json
//! ```
//!
//! From code:
//!
//! ```rust,no_run
//! use hexapi::generator::{build_entity_data, Generator, ProjectMeta, RawFieldInput};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let meta = ProjectMeta {
//!     company: "Acme".into(),
//!     project: "Shop".into(),
//!     package: String::new(),
//! };
//! let user = build_entity_data("user", &[RawFieldInput::parse_spec("id:Long:id")?]);
//! let generator = Generator::new("templates");
//! generator.generate_entities(&meta, vec![user], Path::new("temp"), Path::new("output"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod logging;
pub mod naming;
