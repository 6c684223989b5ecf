use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use stride_core::*;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Workout distance, speed and calorie calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Coefficients file (defaults to the standard config path)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Subcommand)]
enum Commands {
    /// Print summaries for the built-in sample sessions (default)
    Demo,

    /// Summarize a single package
    Show {
        /// Workout type code (SWM, RUN, WLK)
        workout_type: String,

        /// Positional readings for the workout
        #[arg(allow_negative_numbers = true)]
        data: Vec<f64>,
    },

    /// Summarize packages listed in a JSON file, like demo but with your own sessions
    Batch {
        /// JSON array of {"workout_type": ..., "data": [...]} objects
        file: PathBuf,
    },

    /// Manage the coefficients file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default coefficients to the config file (or --config path)
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Initialize logging
    stride_core::logging::init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => cmd_demo(&load_dispatcher(config_path)?, cli.format),
        Commands::Show { workout_type, data } => {
            let record = load_dispatcher(config_path)?.read(&workout_type, &data)?;
            emit(&record, cli.format)
        }
        Commands::Batch { file } => cmd_batch(&load_dispatcher(config_path)?, &file, cli.format),
        Commands::Config {
            action: ConfigAction::Init { force },
        } => cmd_config_init(config_path, force),
    }
}

fn load_dispatcher(config_path: Option<&Path>) -> Result<Dispatcher> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(Dispatcher::new(config.coefficients()))
}

fn cmd_config_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_config_path()
            .ok_or_else(|| Error::Config("No config directory on this platform".into()))?,
    };

    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!("✓ Wrote default coefficients to {}", path.display());
    Ok(())
}

fn cmd_demo(dispatcher: &Dispatcher, format: Format) -> Result<()> {
    for package in sample_packages() {
        let record = package.read(dispatcher)?;
        emit(&record, format)?;
    }
    Ok(())
}

fn cmd_batch(dispatcher: &Dispatcher, file: &Path, format: Format) -> Result<()> {
    let packages = load_packages(file)?;

    let mut failed = 0;
    for (index, package) in packages.iter().enumerate() {
        match package.read(dispatcher) {
            Ok(record) => emit(&record, format)?,
            Err(e) => {
                tracing::warn!("Skipping package {} ({}): {}", index, package.workout_type, e);
                eprintln!("package {}: {}", index, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(Error::BatchFailed {
            failed,
            total: packages.len(),
        });
    }

    Ok(())
}

fn emit(record: &WorkoutRecord, format: Format) -> Result<()> {
    match format {
        Format::Text => print_summary(record),
        Format::Json => {
            println!("{}", serde_json::to_string(&record.show_training_info())?);
        }
    }
    Ok(())
}
