use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use readable_html::{Config, Error, Lesson};
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "readable.toml";

#[derive(Parser, Debug)]
#[command(name = "readable")]
#[command(about = "Convert plain-text lesson content to readable HTML")]
struct Cli {
    /// Input file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat input as a lesson JSON object and render the full lesson
    #[arg(long)]
    lesson: bool,

    /// Config file (defaults to readable.toml in the working directory, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("readable_html={level}"))),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(Path::new(LOCAL_CONFIG)),
    };

    let input = read_input(cli.input.as_deref())?;

    let html = if cli.lesson {
        let lesson = Lesson::from_json(&input)?;
        tracing::debug!(id = ?lesson.id, "rendering lesson");
        readable_html::render_lesson(&lesson, &config)
    } else {
        readable_html::ensure_readable_html(&input)
    };

    write_output(cli.output.as_deref(), &html)
}

fn read_input(path: Option<&Path>) -> Result<String, Error> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, html: &str) -> Result<(), Error> {
    match path {
        Some(path) => {
            fs::write(path, html).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
            println!("Created {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}").map_err(|source| Error::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })
        }
    }
}
