use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
enum Verbosity {
    Warnings,
    Silent,
    Debug,
}

/// Simple cli tool to introspect .ini files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, value_enum, global = true, default_value_t = Verbosity::Warnings)]
    verbosity: Verbosity,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a single value
    Get {
        /// File path of the .ini file
        #[arg(short, long)]
        path: PathBuf,

        /// Section name. Leave empty for global section.
        #[arg(short, long)]
        section: Option<String>,

        /// Key name
        #[arg(short, long)]
        key: String,
    },
    /// Print all keys of a section
    Section {
        #[arg(short, long)]
        path: PathBuf,

        /// Section name. Leave empty for global section.
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Print the whole file as parsed
    Dump {
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Print the [description] section
    Desc {
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Count the sections with numeric names
    Timers {
        #[arg(short, long)]
        path: PathBuf,
    },
}

fn warn_on_extension(path: &Path) {
    if path.extension().is_none_or(|extension| extension != "ini") {
        log::warn!("Specified file does not have an .ini extension!");
    }
}

fn load(path: &Path) -> anyhow::Result<modini::models::IniFile> {
    warn_on_extension(path);
    modini::load_file(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.verbosity {
        Verbosity::Silent => (),
        Verbosity::Warnings => LoggerBuilder::new().filter(None, LevelFilter::Warn).init(),
        Verbosity::Debug => LoggerBuilder::new().filter(None, LevelFilter::Debug).init(),
    }

    match args.command {
        Command::Get { path, section, key } => {
            let ini_file = load(&path)?;
            let section_name = section.unwrap_or_default();

            let Some(section) = ini_file.get_section_by_name(&section_name) else {
                return Err(anyhow!("The given ini file did not contain the specified section"));
            };

            match section.get_value_by_key(&key) {
                Some(value) => print!("{value}"),
                None => return Err(anyhow!("The given section did not contain the specified key")),
            }
        }
        Command::Section { path, section } => {
            let ini_file = load(&path)?;
            let section_name = section.unwrap_or_default();

            match ini_file.get_section_by_name(&section_name) {
                Some(section) => print!("{section}"),
                None => return Err(anyhow!("The given ini file did not contain the specified section")),
            }
        }
        Command::Dump { path } => print!("{}", load(&path)?),
        Command::Desc { path } => {
            warn_on_extension(&path);
            let description =
                modini::load_mod_desc(&path).with_context(|| format!("Failed to load {}", path.display()))?;

            let mut entries: Vec<_> = description.into_iter().collect();
            entries.sort_unstable();
            for (key, value) in entries {
                println!("{key} = {value}");
            }
        }
        Command::Timers { path } => {
            let timers = load(&path)?.timer_sections();

            println!("{}", timers.len());
            for (number, name) in timers.iter() {
                println!("{number}\t[{name}]");
            }
        }
    }

    Ok(())
}
