use clap::{Parser, Subcommand};
use educafric_docs::demo::write_demo_documents;
use educafric_docs::{
    BulletinConfig, BulletinGenerator, DocumentError, MasterSheetGenerator, MasterSheetOptions,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "educafric-docs",
    version,
    about = "Generate report cards and class master sheets as PDF",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a student bulletin from a JSON data bag
    Bulletin {
        #[arg(long)]
        data: PathBuf,
        /// Generator settings (JSON, camelCase keys)
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        output: PathBuf,
    },
    /// Render a class master sheet
    MasterSheet {
        #[arg(long)]
        data: PathBuf,
        /// Rendering options (JSON, camelCase keys)
        #[arg(long)]
        options: Option<PathBuf>,
        #[arg(long)]
        output: PathBuf,
    },
    /// Write the demonstration bulletin and master sheets
    Demo {
        #[arg(long, default_value = "demo-output")]
        output_dir: PathBuf,
    },
}

fn read_json(path: &Path) -> Result<Value, DocumentError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn read_settings<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T, DocumentError> {
    match path {
        Some(path) => serde_json::from_value(read_json(path)?)
            .map_err(|e| DocumentError::Config(format!("{}: {}", path.display(), e))),
        None => Ok(T::default()),
    }
}

fn main() -> Result<(), DocumentError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("educafric=info"))
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Bulletin { data, config, output } => {
            let config: BulletinConfig = read_settings(config.as_deref())?;
            let data = read_json(&data)?;
            let bytes = BulletinGenerator::new().with_config(config).generate(Some(&data))?;
            fs::write(&output, bytes)?;
            println!("Bulletin written to {}", output.display());
        }
        Commands::MasterSheet { data, options, output } => {
            let options: MasterSheetOptions = read_settings(options.as_deref())?;
            let data = read_json(&data)?;
            let bytes = MasterSheetGenerator::new().with_options(options).generate_value(&data)?;
            fs::write(&output, bytes)?;
            println!("Master sheet written to {}", output.display());
        }
        Commands::Demo { output_dir } => {
            for path in write_demo_documents(&output_dir)? {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}
