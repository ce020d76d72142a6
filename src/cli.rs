use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::generator::DocGenerator;
use crate::parser::ModelParser;
use crate::scanner::ModelScanner;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Jersey doc generator - document the REST resources of a serialized class model
#[derive(Parser, Debug)]
#[command(name = "jersey-doc")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Model files or directories containing them (.json, .yaml, .yml)
    #[arg(value_name = "MODEL_PATH", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory receiving jersey.doc
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Fully-qualified name of a type to leave out (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "TYPE")]
    pub excludes: Vec<String>,

    /// File listing fully-qualified type names to leave out, one per line
    #[arg(long = "exclude-file", value_name = "FILE")]
    pub exclude_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    for input in &args.inputs {
        if !input.exists() {
            anyhow::bail!("Model path does not exist: {}", input.display());
        }
    }

    if args.output_dir.is_file() {
        anyhow::bail!(
            "Output directory is a file: {}",
            args.output_dir.display()
        );
    }

    info!("Model inputs: {:?}", args.inputs);
    info!("Output directory: {}", args.output_dir.display());
    if !args.excludes.is_empty() {
        info!("Excluded types: {:?}", args.excludes);
    }

    Ok(args)
}

impl CliArgs {
    /// Builds the generator configuration from the arguments.
    pub fn to_config(&self) -> Result<GeneratorConfig, GeneratorError> {
        let config =
            GeneratorConfig::new(self.output_dir.clone()).with_excludes(self.excludes.iter().cloned());

        match &self.exclude_file {
            Some(path) => config.with_exclude_file(path),
            None => Ok(config),
        }
    }
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    info!("Starting documentation generation...");

    let config = args
        .to_config()
        .context("Failed to load generator configuration")?;

    // Step 1: Collect model files
    info!("Scanning model inputs...");
    let scan_result = ModelScanner::new(args.inputs.clone()).scan()?;
    for warning in &scan_result.warnings {
        log::warn!("{}", warning);
    }
    if scan_result.model_files.is_empty() {
        anyhow::bail!("No model files found in the given inputs");
    }
    info!("Found {} model files", scan_result.model_files.len());

    // Step 2: Build the type model
    let model = ModelParser::load_model(&scan_result.model_files)
        .context("Failed to load the type model")?;
    info!("Loaded {} types", model.len());

    // Step 3: Write the document
    let documented = DocGenerator::new(&config)
        .generate(&model)
        .context("Documentation generation failed")?;

    if documented.is_empty() {
        log::warn!("No resource types found in the model");
    }

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Model files: {}", scan_result.model_files.len());
    info!("  - Types in model: {}", model.len());
    info!("  - Resources documented: {}", documented.len());
    for entry in &documented {
        debug!("  - {}", entry.full_name);
    }

    Ok(())
}
