//! shelfpack - CLI tool for shelf-packing inventory layouts.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shelfpack_core::{
    generate_layout, load_layout, save_layout, summary_table, validate_snapshot, PackConfig,
    ShelfPacker, DEFAULT_PADDING, DEFAULT_SHELF_COUNT,
};

/// Generate, validate, and edit shelf-packing inventory layouts.
#[derive(Parser, Debug)]
#[command(name = "shelfpack")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output debug information as JSON
    #[arg(long, global = true)]
    debug: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a fully packed layout
    Generate {
        /// Number of shelves
        #[arg(short, long, default_value_t = DEFAULT_SHELF_COUNT)]
        shelves: usize,

        /// RNG seed for a reproducible layout
        #[arg(long)]
        seed: Option<u64>,

        /// Output layout file path
        #[arg(short, long, default_value = "layout.json")]
        output: PathBuf,
    },

    /// Validate a layout file against the shelf invariants
    Validate {
        /// Input layout file path
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print a layout as a summary table
    Summary {
        /// Input layout file path
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Find a spot for a box on a shelf and commit it
    Place {
        /// Input layout file path
        #[arg(short, long)]
        input: PathBuf,

        /// Shelf number (1-based, as shown by `summary`)
        #[arg(short, long)]
        shelf: usize,

        /// Box width as a fraction of the shelf (0, 1]
        #[arg(short, long)]
        width: f64,

        /// Box height as a fraction of the shelf (0, 1]
        #[arg(long)]
        height: f64,

        /// Output layout file path (defaults to rewriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match args.command {
        Command::Generate {
            shelves,
            seed,
            output,
        } => generate(shelves, seed, &output, args.debug),
        Command::Validate { input } => validate(&input, args.debug),
        Command::Summary { input } => summary(&input),
        Command::Place {
            input,
            shelf,
            width,
            height,
            output,
        } => place(&input, shelf, width, height, output, args.debug),
    }
}

fn generate(shelves: usize, seed: Option<u64>, output: &PathBuf, debug: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = PackConfig::new(shelves);
    let snapshot = generate_layout(&config, &mut rng);

    info!(
        "Generated {} boxes across {} shelves",
        snapshot.total_boxes(),
        snapshot.shelf_count()
    );

    if debug {
        let json = serde_json::to_string_pretty(&snapshot)?;
        println!("{}", json);
        return Ok(());
    }

    save_layout(output, &snapshot)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Saved: {}", output.display());

    Ok(())
}

fn validate(input: &PathBuf, debug: bool) -> Result<()> {
    let snapshot =
        load_layout(input).with_context(|| format!("Failed to load {}", input.display()))?;

    if debug {
        let json = serde_json::to_string_pretty(&snapshot)?;
        println!("{}", json);
    }

    let validation = validate_snapshot(&snapshot, DEFAULT_PADDING);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    info!("Validation passed");
    Ok(())
}

fn summary(input: &PathBuf) -> Result<()> {
    let snapshot =
        load_layout(input).with_context(|| format!("Failed to load {}", input.display()))?;

    print!("{}", summary_table(&snapshot));
    Ok(())
}

fn place(
    input: &PathBuf,
    shelf: usize,
    width: f64,
    height: f64,
    output: Option<PathBuf>,
    debug: bool,
) -> Result<()> {
    if shelf == 0 {
        anyhow::bail!("Shelf numbers are 1-based");
    }
    let shelf_index = shelf - 1;

    let snapshot =
        load_layout(input).with_context(|| format!("Failed to load {}", input.display()))?;
    let mut packer = ShelfPacker::from_snapshot(snapshot, DEFAULT_PADDING);

    let candidate = packer
        .find_placement(shelf_index, width, height)
        .with_context(|| format!("Cannot place on shelf {}", shelf))?;

    let Some(candidate) = candidate else {
        info!(
            "A {:.2}×{:.2} box does not fit on shelf {}",
            width, height, shelf
        );
        return Ok(());
    };

    packer.place(shelf_index, candidate)?;
    info!(
        "Placed {:.2}×{:.2} on shelf {} at offset {:.4}",
        width, height, shelf, candidate.offset
    );

    let snapshot = packer.snapshot();

    if debug {
        let json = serde_json::to_string_pretty(&snapshot)?;
        println!("{}", json);
        return Ok(());
    }

    let output_path = output.unwrap_or_else(|| input.clone());
    save_layout(&output_path, &snapshot)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    info!("Saved: {}", output_path.display());

    Ok(())
}
