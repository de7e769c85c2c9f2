use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use uw_ast::UnpackOptions;
use uw_parser::{parse_bundle, ParseResult};
use uw_unpack::{detect, unpack, write_bundle, UnpackOutcome};

#[derive(Parser)]
#[command(name = "uw", about = "unwebpack: split a bundled script into one file per module")]
struct Cli {
    /// Log what the unpacker does (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Unpack the bundle and write index.js plus one module<id>.js per module.
    Unpack {
        /// Bundled script.
        #[arg(default_value = "input/source.js")]
        input: PathBuf,
        /// Output directory.
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
        /// Rename every identifier matching a parameter name, ignoring
        /// shadowing by nested scopes.
        #[arg(long)]
        name_based: bool,
        /// Warn instead of failing on requires of modules missing from the bundle.
        #[arg(long)]
        allow_dangling: bool,
        /// Fail when the input contains no bundle.
        #[arg(long)]
        strict: bool,
    },
    /// Report what would be unpacked without writing anything.
    Detect {
        #[arg(default_value = "input/source.js")]
        input: PathBuf,
    },
    /// Parse the file and dump the syntax tree.
    Parse {
        input: PathBuf,
        /// Dump as JSON instead of the debug representation.
        #[arg(long)]
        ast: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Unpack {
            input,
            output,
            name_based,
            allow_dangling,
            strict,
        } => {
            let parsed = read_and_parse(&input)?;
            let options = UnpackOptions {
                resolve_scopes: !name_based,
                allow_dangling,
            };

            match unpack(&parsed.script, &options)? {
                UnpackOutcome::Unpacked(bundle) => {
                    let count = write_bundle(&output, &bundle, &parsed.source_map)?;
                    println!("Unpacked {count} modules, wrote to {}", output.display());
                }
                UnpackOutcome::NoMatch(reason) => {
                    if strict {
                        anyhow::bail!("no bundle found in {}: {reason}", input.display());
                    }
                    eprintln!("Nothing to unpack in {}: {reason}", input.display());
                }
            }
        }
        Commands::Detect { input } => {
            let parsed = read_and_parse(&input)?;

            match detect(&parsed.script) {
                Ok(bundle) => {
                    let ids: Vec<String> = bundle.modules.iter().map(|m| m.id.to_string()).collect();
                    println!("utils:   {}", bundle.utils_name);
                    println!("entry:   {}", bundle.entry_module);
                    println!("modules: {} of {} slots [{}]", ids.len(), bundle.array_len, ids.join(", "));
                    if bundle.additional_candidates > 0 {
                        println!("ignored: {} further wrapper(s)", bundle.additional_candidates);
                    }
                }
                Err(reason) => eprintln!("No bundle in {}: {reason}", input.display()),
            }
        }
        Commands::Parse { input, ast } => {
            let parsed = read_and_parse(&input)?;

            if ast {
                let json = serde_json::to_string_pretty(&parsed.script)?;
                println!("{json}");
            } else {
                println!("{:#?}", parsed.script);
            }
        }
    }

    Ok(())
}

fn read_and_parse(input: &Path) -> Result<ParseResult> {
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    parse_bundle(&source, &input.display().to_string())
}
