use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::generator::{
    build_entity_data, save_entity_json, EntityData, GenerationOutcome, Generator, ProjectMeta,
    RawFieldInput, TEMPLATES_TO_GENERATE,
};
use crate::logging::{init_logging, LogConfig};
use crate::naming::generate_name_variants;

/// Command-line interface of the HexAPI generator
#[derive(Debug, Parser)]
#[command(name = "hexapi-gen", version)]
#[command(about = "Generate hexagonal Java API modules from entity descriptors", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./hexapi.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Template root, overriding the configured one
    #[arg(long, global = true)]
    pub templates: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `hexapi-gen` commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the whole template catalog for one descriptor
    Generate {
        /// Descriptor JSON file
        #[arg(short, long)]
        descriptor: PathBuf,

        /// Output root (default: configured output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a single template for one descriptor
    Render {
        /// Descriptor JSON file
        #[arg(short, long)]
        descriptor: PathBuf,

        /// Template identifier relative to the template root
        #[arg(short, long)]
        template: String,

        /// Output root (default: configured output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build entity data from raw fields and save it as `<Name>.json`
    NewEntity {
        /// Entity name, free-form ("order line", "Période")
        #[arg(short, long)]
        name: String,

        /// Field as `name:Type[:flag,flag]`, flags being `id` and `nullable`
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<RawFieldInput>,

        /// JSON array of raw field objects, read before any --field
        #[arg(long)]
        fields_file: Option<PathBuf>,

        /// Destination directory (default: configured work_dir)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Generate every saved entity of a project
    GenerateProject {
        /// Company name
        #[arg(long)]
        company: String,

        /// Project name
        #[arg(long)]
        project: String,

        /// Java package (default: com.<company>.<project>)
        #[arg(long)]
        package: Option<String>,

        /// Entity file written by `new-entity`, in generation order
        #[arg(short, long = "entity", required = true)]
        entities: Vec<PathBuf>,

        /// Output root (default: configured output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print every casing variant of a name as JSON
    Variants {
        /// Name to convert
        name: String,
    },
    /// List the template catalog in generation order
    Templates,
}

fn parse_field(spec: &str) -> Result<RawFieldInput, String> {
    RawFieldInput::parse_spec(spec)
}

/// Parse arguments, set up logging and run the selected command
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let _guard = init_logging(&LogConfig::from_config(&config))?;
    execute(&cli, &config)
}

/// Configuration for `cli`: file and environment, then command-line flags
pub fn load_config(cli: &Cli) -> anyhow::Result<GeneratorConfig> {
    let mut config = GeneratorConfig::load(cli.config.as_deref())?;
    if let Some(templates) = &cli.templates {
        config.template_dir = templates.clone();
    }
    Ok(config)
}

/// Run the command of `cli` against an already resolved configuration
pub fn execute(cli: &Cli, config: &GeneratorConfig) -> anyhow::Result<()> {
    debug!(?config, "resolved configuration");
    match &cli.command {
        Commands::Generate { descriptor, output } => {
            let output = output.as_deref().unwrap_or(config.output_dir.as_path());
            let outcome = Generator::new(&config.template_dir)
                .generate_all_templates(descriptor, output)?;
            print_outcome(&outcome);
            Ok(())
        }
        Commands::Render {
            descriptor,
            template,
            output,
        } => {
            let output = output.as_deref().unwrap_or(config.output_dir.as_path());
            let path = Generator::new(&config.template_dir)
                .render_template_to_output(descriptor, template, output)?;
            println!("✅ Generated {template} → {}", path.display());
            Ok(())
        }
        Commands::NewEntity {
            name,
            fields,
            fields_file,
            out_dir,
        } => {
            let mut raw = match fields_file {
                Some(path) => read_fields_file(path)?,
                None => Vec::new(),
            };
            raw.extend(fields.iter().cloned());

            let data = build_entity_data(name, &raw);
            let out_dir = out_dir.as_deref().unwrap_or(config.work_dir.as_path());
            let path = save_entity_json(&data.entity_name, &data, out_dir)?;
            println!(
                "✅ Saved entity {} ({} fields) → {}",
                data.entity_name,
                data.fields.len(),
                path.display()
            );
            Ok(())
        }
        Commands::GenerateProject {
            company,
            project,
            package,
            entities,
            output,
        } => {
            let meta = ProjectMeta {
                company: company.clone(),
                project: project.clone(),
                package: package.clone().unwrap_or_default(),
            };
            let entities = entities
                .iter()
                .map(|path| read_entity_file(path))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let output = output.as_deref().unwrap_or(config.output_dir.as_path());
            let outcomes = Generator::new(&config.template_dir).generate_entities(
                &meta,
                entities,
                &config.work_dir,
                output,
            )?;
            for outcome in &outcomes {
                print_outcome(outcome);
            }
            Ok(())
        }
        Commands::Variants { name } => {
            let variants = generate_name_variants(name);
            println!("{}", serde_json::to_string_pretty(&variants)?);
            Ok(())
        }
        Commands::Templates => {
            for template in TEMPLATES_TO_GENERATE {
                println!("{template}");
            }
            Ok(())
        }
    }
}

fn print_outcome(outcome: &GenerationOutcome) {
    for file in &outcome.files {
        println!("✅ Generated {}", file.display());
    }
    println!(
        "📦 {} files under {}",
        outcome.files.len(),
        outcome.output_root.display()
    );
}

fn read_fields_file(path: &Path) -> anyhow::Result<Vec<RawFieldInput>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fields file: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse fields file: {}", path.display()))
}

fn read_entity_file(path: &Path) -> anyhow::Result<EntityData> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read entity file: {}", path.display()))?;
    EntityData::parse(&contents)
        .with_context(|| format!("Failed to parse entity file: {}", path.display()))
}
