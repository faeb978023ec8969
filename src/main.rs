use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use recipe_ingredients::config::load_config;
use recipe_ingredients::pipelines;
use recipe_ingredients::PipelineConfig;

const PREVIEW_ROWS: usize = 10;

#[derive(Parser)]
#[command(name = "recipe-ingredients", version, about = "Korean recipe ingredient tooling")]
struct Cli {
    /// Configuration file (defaults to ./recipe-ingredients.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract normalized ingredients from the recipe corpus
    Extract {
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Per-recipe output table
        #[arg(long)]
        recipes_out: Option<PathBuf>,
        /// Unique ingredient output table
        #[arg(long)]
        unique_out: Option<PathBuf>,
        /// Write tables without a UTF-8 byte order mark
        #[arg(long)]
        no_bom: bool,
    },
    /// Translate the unique ingredient table to English
    Translate {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write tables or the corpus to the document store
    Upload {
        #[command(subcommand)]
        target: UploadTarget,
    },
}

#[derive(Subcommand)]
enum UploadTarget {
    /// Upload the translated ingredient table, numbering documents from 1
    Ingredients {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value = "ingredients")]
        collection: String,
    },
    /// Upload every corpus record, keyed by its sequence id
    Recipes {
        #[arg(long)]
        corpus: Option<PathBuf>,
        #[arg(long, default_value = "recipes")]
        collection: String,
    },
    /// Upload the survey question sections, numbering documents from 1
    Questions {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value = "questions")]
        collection: String,
    },
    /// Copy a collection under a new name
    Copy {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Delete the source documents once every copy succeeded
        #[arg(long)]
        delete_source: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config: PipelineConfig = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Extract {
            corpus,
            recipes_out,
            unique_out,
            no_bom,
        } => {
            if let Some(path) = corpus {
                config.corpus.path = path;
            }
            if let Some(path) = recipes_out {
                config.output.recipes_path = path;
            }
            if let Some(path) = unique_out {
                config.output.unique_path = path;
            }
            if no_bom {
                config.output.write_bom = false;
            }

            let output = pipelines::extract::process(&config)?;
            for row in output.recipes.iter().take(PREVIEW_ROWS) {
                println!("{}\t{}", row.name, row.joined());
            }
        }
        Command::Translate { input, output } => {
            if let Some(path) = input {
                config.output.unique_path = path;
            }
            if let Some(path) = output {
                config.output.translated_path = path;
            }

            pipelines::translate::process(&config).await?;
        }
        Command::Upload { target } => match target {
            UploadTarget::Ingredients { input, collection } => {
                if let Some(path) = input {
                    config.output.translated_path = path;
                }
                pipelines::upload::ingredients(&config, &collection).await?;
            }
            UploadTarget::Recipes { corpus, collection } => {
                if let Some(path) = corpus {
                    config.corpus.path = path;
                }
                pipelines::upload::recipes(&config, &collection).await?;
            }
            UploadTarget::Questions { input, collection } => {
                if let Some(path) = input {
                    config.corpus.questions_path = path;
                }
                pipelines::upload::questions(&config, &collection).await?;
            }
            UploadTarget::Copy {
                from,
                to,
                delete_source,
            } => {
                let report = pipelines::upload::copy(&config, &from, &to, delete_source).await?;
                info!(
                    "Copied {} and deleted {} documents",
                    report.copied, report.deleted
                );
            }
        },
    }

    Ok(())
}
