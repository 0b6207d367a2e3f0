//! CLI tool for rendering one PowerPoint slide to an image.

use anyhow::{bail, Context, Result};
use clap::Parser;
use pptshot_core::ExportRequest;
use pptshot_powerpoint::{AutomationClient, Launcher, PowerPoint};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("PPTSHOT_COMMIT"),
    "\nbuilt: ",
    env!("PPTSHOT_DATE"),
);

/// Export a slide of a presentation as an image using PowerPoint.
#[derive(Parser, Debug)]
#[command(name = "ppt-screenshot")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Args {
    /// Input presentation filename
    #[arg(short, long)]
    input: PathBuf,

    /// Output screenshot image filename (format follows the extension, PNG if none)
    #[arg(short, long)]
    output: PathBuf,

    /// Overwrite an existing output file
    #[arg(short, long)]
    force: bool,

    /// Output image width (0 = native slide width)
    #[arg(short = 'W', long, default_value = "0")]
    width: u32,

    /// Output image height (0 = native slide height)
    #[arg(short = 'H', long, default_value = "0")]
    height: u32,

    /// 1-based slide number, clamped to the slides available
    #[arg(short = 'n', long, default_value = "1", allow_hyphen_values = true)]
    index: i32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let client = AutomationClient::new(PowerPoint);
    if let Err(e) = run(&args, &client) {
        eprintln!("{:#}", e);
    }
}

/// Validate the arguments and export a single slide.
///
/// Path checks happen before PowerPoint is launched.
fn run<L: Launcher>(args: &Args, client: &AutomationClient<L>) -> Result<()> {
    let request = ExportRequest::new(
        &args.input,
        &args.output,
        args.force,
        args.width,
        args.height,
        args.index,
    )?;

    if !client.is_available() {
        bail!("the PowerPoint application is unavailable");
    }

    let bounds = client
        .display_bounds(&request.input)
        .context("failed to get presentation display bounds")?;
    let (width, height) = request.dimensions(&bounds);

    let slide = client
        .export(&request.input, &request.output, width, height, request.index)
        .context("failed to export screenshot image")?;

    log::info!(
        "Exported slide {} as {} ({}x{}) to {}",
        slide,
        request.format(),
        width,
        height,
        request.output.display()
    );
    Ok(())
}
