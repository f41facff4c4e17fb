//! CLI for drawing selector→presenter pairings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use roulette::core::assignment::build_assignments;
use roulette::core::derangement::sample_derangement;
use roulette::exit_codes;
use roulette::io::config::{CONFIG_FILE, RouletteConfig, load_config, write_config};
use roulette::io::rules::load_rules;
use roulette::render::render_table;

const RULES_FILE: &str = "RULES.md";
const RULES_TEMPLATE: &str = "\
# Rules

Each selector picks a topic for their paired presenter. The presenter
prepares and presents it at the next session.
";

#[derive(Parser)]
#[command(
    name = "roulette",
    version,
    about = "Random selector/presenter pairing for presentation rounds"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write `roulette.toml` and a stub rules document if missing.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Check the config and rules document without drawing.
    Validate,
    /// Draw a fresh pairing and print the table.
    Draw {
        /// Seed the RNG for a reproducible draw.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    roulette::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(force),
        Command::Validate => cmd_validate(),
        Command::Draw { seed } => cmd_draw(seed),
    }
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);
    if force || !config_path.exists() {
        let cfg = RouletteConfig {
            rules_file: Some(RULES_FILE.to_string()),
            ..RouletteConfig::default()
        };
        write_config(config_path, &cfg)?;
    }

    let rules_path = Path::new(RULES_FILE);
    if force || !rules_path.exists() {
        fs::write(rules_path, RULES_TEMPLATE)
            .with_context(|| format!("write {}", rules_path.display()))?;
    }

    Ok(())
}

fn cmd_validate() -> Result<()> {
    let cfg = load_config(Path::new(CONFIG_FILE))?;
    if let Some(rules_file) = &cfg.rules_file {
        let rules_path = Path::new(rules_file);
        if !rules_path.exists() {
            bail!("rules file {} not found", rules_path.display());
        }
    }
    println!("ok: {} participants", cfg.participants.len());
    Ok(())
}

fn cmd_draw(seed: Option<u64>) -> Result<()> {
    let cfg = load_config(Path::new(CONFIG_FILE))?;
    let n = cfg.participants.len();
    debug!(n, "config loaded");

    if let Some(rules_file) = &cfg.rules_file {
        let rules = load_rules(Path::new(rules_file))?;
        println!("{rules}");
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(n, seed, "drawing pairing");

    let permutation = sample_derangement(n, &mut rng)?;
    let assignments = build_assignments(&cfg.participants, &permutation)?;
    print!("{}", render_table(&assignments));
    Ok(())
}
