use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sp_preparser::preparse_with;
use sp_syntax::{PreparseSyntax, VectorFunctionSpec};

#[derive(Parser)]
#[command(name = "sp-preparse", about = "Sonic Pi preparser: rewrite syntax sugar into plain Ruby")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preparse a file and emit the rewritten Ruby.
    Preparse {
        /// Input .rb file.
        input: PathBuf,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        registry: RegistryArgs,
    },
    /// Preparse the file and report a builtin name collision, if any.
    Check {
        input: PathBuf,
        #[command(flatten)]
        registry: RegistryArgs,
    },
    /// Print the default preparser configuration as JSON.
    Config,
}

#[derive(Args)]
struct RegistryArgs {
    /// Vector function names, comma separated.
    #[arg(long, value_delimiter = ',')]
    fns: Vec<String>,
    /// JSON file with an array of `{"name": ...}` vector function specs.
    #[arg(long)]
    fns_file: Option<PathBuf>,
    /// JSON preparser configuration (see `config`).
    #[arg(long)]
    config: Option<PathBuf>,
}

impl RegistryArgs {
    fn vector_functions(&self) -> Result<Vec<VectorFunctionSpec>> {
        let mut fns: Vec<VectorFunctionSpec> = match &self.fns_file {
            Some(path) => serde_json::from_str(&read(path)?)
                .with_context(|| format!("invalid vector function list in {}", path.display()))?,
            None => Vec::new(),
        };
        fns.extend(self.fns.iter().map(|name| VectorFunctionSpec::new(name.trim())));
        Ok(fns)
    }

    fn syntax(&self) -> Result<PreparseSyntax> {
        match &self.config {
            Some(path) => serde_json::from_str(&read(path)?)
                .with_context(|| format!("invalid preparser config in {}", path.display())),
            None => Ok(PreparseSyntax::default()),
        }
    }

    fn run(&self, input: &Path) -> Result<String> {
        let source = read(input)?;
        let fns = self.vector_functions()?;
        let syntax = self.syntax()?;
        tracing::debug!(input = %input.display(), fns = fns.len(), "preparsing");

        preparse_with(&source, &fns, &syntax).map_err(|e| {
            anyhow::anyhow!("{}:{} (byte {}): {e}", input.display(), e.line(), e.offset())
        })
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Preparse {
            input,
            output,
            registry,
        } => {
            let output_str = registry.run(&input)?;
            match &output {
                Some(path) => std::fs::write(path, &output_str)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{output_str}"),
            }
        }
        Commands::Check { input, registry } => {
            registry.run(&input)?;
            eprintln!("OK: {}", input.display());
        }
        Commands::Config => {
            let json = serde_json::to_string_pretty(&PreparseSyntax::default())?;
            println!("{json}");
        }
    }

    Ok(())
}
