use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use vocab_distance::config::Config;
use vocab_distance::ingest::{read_word_list, DatasetBuilder, Lexicon, WordSource};
use vocab_distance::output::{self, Dataset};
use vocab_distance::scoring::{ScoringEngine, WordRecord};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_RECORD: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_IO: i32 = 5;

const DEFAULT_OUTPUT: &str = "vocabulary-data.json";

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single word
    Score {
        /// English headword
        word: String,
        /// Translation; repeat for several, primary first
        #[arg(short, long = "translation", required = true)]
        translations: Vec<String>,
        /// Proficiency level (A1..C2); other tags use the default meaning distance
        #[arg(short, long, default_value = "B1")]
        level: String,
        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a scored dataset from word lists
    Build {
        /// Word lists as SOURCE=PATH (sources: oxford_3000, awl, gre_357 or any name)
        #[arg(required = true, value_parser = parse_list_arg)]
        lists: Vec<(WordSource, PathBuf)>,
        /// Curated lexicon YAML; repeat to combine, earlier files win
        #[arg(long)]
        lexicon: Vec<PathBuf>,
        /// Output file (defaults to config `output` or vocabulary-data.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Use the headword as placeholder translation for words missing from the lexicon
        #[arg(long)]
        placeholder: bool,
    },
    /// Write a config file with the default formula constants
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "vocab-distance")]
#[command(about = "Score vocabulary by meaning, visual and pronunciation distance", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/vocab-distance/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn parse_list_arg(s: &str) -> Result<(WordSource, PathBuf), String> {
    let (source, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SOURCE=PATH, got '{}'", s))?;
    if path.trim().is_empty() {
        return Err(format!("missing path in '{}'", s));
    }
    let source: WordSource = source.parse()?;
    Ok((source, PathBuf::from(path.trim())))
}

/// Load config and resolve the scoring engine once, before any word is scored.
fn load_engine(config_path: Option<PathBuf>) -> (Config, ScoringEngine) {
    let config = match vocab_distance::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let scoring = config.scoring.clone().unwrap_or_default();
    let engine = match ScoringEngine::new(&scoring) {
        Ok(engine) => engine,
        Err(errors) => {
            eprintln!("Scoring config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };
    info!(
        stroke_weight = engine.stroke_weight(),
        pronunciation = %engine.pronunciation_model(),
        "scoring engine ready"
    );

    (config, engine)
}

fn main() {
    let cli = Cli::parse();
    vocab_distance::logging::init_logging(cli.verbose);
    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Init { force } => {
            let path = match cli.config {
                Some(path) => path,
                None => match vocab_distance::config::get_config_path() {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("Config error: {:#}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                },
            };
            if let Err(e) = vocab_distance::config::write_default_config(&path, force) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Wrote default config to {}", path.display());
        }
        Commands::Score {
            word,
            translations,
            level,
            json,
        } => {
            let (_, engine) = load_engine(cli.config);
            let record = WordRecord::new(&word, translations, &level);
            let profile = match engine.score(&record) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_INVALID_RECORD);
                }
            };

            if json {
                match serde_json::to_string_pretty(&profile) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Failed to serialize profile: {}", e);
                        std::process::exit(EXIT_IO);
                    }
                }
            } else {
                let contributions = engine.explain(&profile);
                println!(
                    "{}",
                    output::format_profile(&record, &profile, &contributions, use_colors)
                );
            }
        }
        Commands::Build {
            lists,
            lexicon,
            output: output_path,
            placeholder,
        } => {
            let (config, engine) = load_engine(cli.config);

            let lexicon_paths: Vec<PathBuf> = if lexicon.is_empty() {
                config.lexicon.into_iter().collect()
            } else {
                lexicon
            };
            let lexicon = match Lexicon::from_paths(&lexicon_paths) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Lexicon error: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
            };
            info!(entries = lexicon.len(), "lexicon loaded");

            let mut word_lists = Vec::with_capacity(lists.len());
            for (source, path) in lists {
                match read_word_list(&path) {
                    Ok(words) => word_lists.push((source, words)),
                    Err(e) => {
                        eprintln!("{:#}", e);
                        std::process::exit(EXIT_IO);
                    }
                }
            }

            let report = DatasetBuilder::new(&engine, &lexicon)
                .with_placeholder(placeholder)
                .build(&word_lists);

            let output_path = output_path
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
            let dataset = Dataset::new(&engine, &report.entries);
            if let Err(e) = output::write_dataset(&output_path, &dataset) {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_IO);
            }

            println!("{}", output::format_build_summary(&report, use_colors));
            println!("Wrote {}", output_path.display());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
