//! Mission CLI - breed and render self-describing mission statements.

mod telemetry;

use anyhow::{bail, Context, Result};
use clap::Parser;
use mission_core::{GenerationReport, MissionConfig};
use mission_genome::{decode, Splicer};
use mission_lineage::GenerationPipeline;
use mission_runtime::{
    ActivationService, DefinitionLoader, DefinitionStore, DirectoryStore, Entity, MemoryStore,
    SelfContainedMissionStatement,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "mission")]
#[command(author, version, about = "Evolve mission statements from a genome", long_about = None)]
struct Cli {
    /// `[PARTNER] NAME` of the generation to create; none renders the seed
    #[arg(num_args = 0..=2, value_name = "NAME")]
    names: Vec<String>,

    /// Directory holding emitted definitions (default: from config, else ".")
    #[arg(long, value_name = "DIR")]
    definitions: Option<PathBuf>,

    /// Keep definitions in memory instead of on disk
    #[arg(long, conflicts_with = "definitions")]
    in_memory: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for deterministic splicing
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON report after the sentence
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize telemetry
    telemetry::init_telemetry(cli.verbose)?;

    // Load configuration
    let config = load_config(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = match cli.names.as_slice() {
        [] => render_seed(&config, &mut out)?,
        [name] => breed(&cli, &config, None, name, &mut out)?,
        [partner, name] => breed(&cli, &config, Some(partner), name, &mut out)?,
        _ => bail!("expected at most two names"),
    };

    // Report goes after the sentence
    if cli.json {
        writeln!(out, "{}", report.to_json()?)?;
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<MissionConfig> {
    let mut config = match &cli.config {
        Some(path) => MissionConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => MissionConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(dir) = &cli.definitions {
        config.definition_dir = dir.display().to_string();
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn render_seed(config: &MissionConfig, out: &mut dyn Write) -> Result<GenerationReport> {
    let seed = SelfContainedMissionStatement::new(config.decoder.clone())?;

    let mut buf = Vec::new();
    seed.render(&mut buf).context("rendering seed")?;
    out.write_all(&buf)?;
    out.flush()?;

    Ok(GenerationReport::new(
        seed.identity(),
        Vec::new(),
        seed.genome().clone(),
        decode(seed.genome()),
        String::from_utf8(buf)?,
    ))
}

fn breed(
    cli: &Cli,
    config: &MissionConfig,
    partner: Option<&String>,
    name: &str,
    out: &mut dyn Write,
) -> Result<GenerationReport> {
    // Pick the definition store
    let store: Arc<dyn DefinitionStore> = if cli.in_memory {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(DirectoryStore::new(&config.definition_dir))
    };
    let loader = DefinitionLoader::new(Arc::clone(&store), config.decoder.clone());

    // The seed is always the left parent
    let seed = SelfContainedMissionStatement::new(config.decoder.clone())?;
    let partner: Box<dyn Entity> = match partner {
        Some(partner) => loader
            .activate(partner)
            .with_context(|| format!("activating partner '{}'", partner))?,
        None => Box::new(SelfContainedMissionStatement::new(config.decoder.clone())?),
    };
    info!(partner = partner.identity(), name, "Starting generation");

    // Run the pipeline
    let mut splicer = Splicer::from_config(&config.splice, config.seed)?;
    let outcome = GenerationPipeline::new(name, store.as_ref(), &loader)
        .run(&seed, partner.as_ref(), &mut splicer, out)
        .with_context(|| format!("creating generation '{}'", name))?;

    Ok(outcome.report())
}
