//! map2svg - Convert HTML image maps to SVG overlays

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use map2svg::{Options, options::DEFAULT_INDENT};

#[derive(Parser)]
#[command(name = "map2svg")]
#[command(version, about = "Convert an HTML image map to SVG shapes.", long_about = None)]
#[command(after_help = "EXAMPLES:
    map2svg plan.map                    Print the overlay to stdout
    map2svg --visible-strokes plan.html Always show region outlines
    map2svg plan.map -o overlay.html    Write the overlay to a file")]
struct Cli {
    /// The image map file, either .map or .html
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Don't show an outline around the shapes
    #[arg(long)]
    no_strokes: bool,

    /// Always show strokes, otherwise they are only visible on hover.
    /// Ignored if --no-strokes is enabled
    #[arg(long)]
    visible_strokes: bool,

    /// Spaces per nesting level in the output
    #[arg(long, value_name = "N", default_value_t = DEFAULT_INDENT)]
    indent: usize,

    /// Write the overlay to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Suppress diagnostic messages
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options::new()
            .with_suppressed_outlines(self.no_strokes)
            .with_visible_outlines(self.visible_strokes)
            .with_indent(self.indent)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if quiet {
        builder.filter_level(LevelFilter::Off);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: &Cli) -> map2svg::Result<()> {
    let html = map2svg::convert_file(&cli.file, &cli.options())?;

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{html}\n"))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}")?;
        }
    }
    Ok(())
}
