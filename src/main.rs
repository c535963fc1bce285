//! decision-lattice CLI: inspect decision trees and convert them to concept lattices.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use decision_lattice::config::{ConvertConfig, PremiseOrder};
use decision_lattice::context::FormalContext;
use decision_lattice::convert::{convert_files, load_decision_tree};

#[derive(Parser)]
#[command(name = "decision-lattice", version, about = "Decision trees and their concept lattices")]
struct Cli {
    /// Converter configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Premise order, overriding the configuration file.
    #[arg(long, global = true, value_parser = ["superset", "subset"])]
    order: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the rules of a decision tree and its order structure.
    Inspect {
        /// JSON file with rules: [{"premise": ["a", ...], "target": "..."}, ...].
        #[arg(long)]
        rules: PathBuf,
    },

    /// Convert a decision tree into a concept lattice, printed as JSON.
    Convert {
        /// Formal context file (`.cxt` or JSON).
        #[arg(long)]
        context: PathBuf,

        /// JSON file with rules.
        #[arg(long)]
        rules: PathBuf,
    },

    /// Show size and fingerprint of a formal context.
    Context {
        /// Formal context file (`.cxt` or JSON).
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };
    match cli.order.as_deref() {
        Some("subset") => config.order = PremiseOrder::Subset,
        Some("superset") => config.order = PremiseOrder::Superset,
        _ => {}
    }

    match cli.command {
        Commands::Inspect { rules } => {
            let tree = load_decision_tree(&rules, &config)?;
            println!("{tree}");
            println!("  order: {}", config.order);
            match tree.root() {
                Some(root) => println!("  root:  {root}"),
                None => println!("  root:  (empty tree)"),
            }
            println!("  leaves: {:?}", tree.bottom_elements());
            for (i, (premise, target)) in tree.iter().enumerate() {
                let children = tree.direct_sub_elements(i)?;
                println!("  {i}. {premise:?} -> {target:?} children={children:?}");
            }
        }

        Commands::Convert { context, rules } => {
            let lattice = convert_files(&context, &rules, &config)?;
            let json = lattice.to_json().into_diagnostic()?;
            println!("{json}");
        }

        Commands::Context { file } => {
            let context = FormalContext::load(&file)?;
            println!("Context {}", file.display());
            println!("  objects:     {}", context.n_objects());
            println!("  attributes:  {}", context.n_attributes());
            println!("  fingerprint: {:016x}", context.hash_fixed());
        }
    }

    Ok(())
}
