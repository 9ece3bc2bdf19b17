use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "autodesign", version)]
struct Cli {
    /// Directory holding the saved template and config.json.
    #[arg(long, global = true, default_value = ".autodesign")]
    state_dir: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Save the template, output folder, gradient colors and border thickness.
    Setup(SetupArgs),
    /// Composite every poster of a folder onto the saved template.
    Run(RunArgs),
    /// Show the saved setup.
    Status,
    /// Delete the saved template and config.
    Reset,
}

#[derive(Parser, Debug)]
struct SetupArgs {
    /// Template image file.
    #[arg(long)]
    template: PathBuf,

    /// Existing folder receiving the date-named output folders.
    #[arg(long)]
    output: PathBuf,

    /// Outer border color (#RRGGBB).
    #[arg(long)]
    start_color: String,

    /// Inner border color (#RRGGBB).
    #[arg(long)]
    end_color: String,

    /// Border thickness in pixels.
    #[arg(long)]
    border: String,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Folder of poster images (png, jpg, jpeg).
    #[arg(long)]
    posters: PathBuf,

    /// Output folder name (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Use this config JSON instead of the saved one.
    #[arg(long, requires = "template")]
    config: Option<PathBuf>,

    /// Use this template instead of the saved one.
    #[arg(long, requires = "config")]
    template: Option<PathBuf>,

    /// Width every poster is resized to.
    #[arg(long, default_value_t = autodesign::DEFAULT_TARGET_WIDTH)]
    target_width: u32,

    /// Posters taller than this (after resizing) are moved down.
    #[arg(long, default_value_t = autodesign::LayoutOpts::default().tall_poster_threshold_px)]
    tall_threshold: u32,

    /// How far tall posters are moved down.
    #[arg(
        long,
        default_value_t = autodesign::LayoutOpts::default().tall_poster_nudge_px,
        allow_negative_numbers = true
    )]
    tall_nudge: i64,

    /// Composite posters in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ws = autodesign::Workspace::new(&cli.state_dir);
    match cli.cmd {
        Command::Setup(args) => cmd_setup(&ws, args),
        Command::Run(args) => cmd_run(&ws, args),
        Command::Status => cmd_status(&ws),
        Command::Reset => cmd_reset(&ws),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_setup(ws: &autodesign::Workspace, args: SetupArgs) -> anyhow::Result<()> {
    let req = autodesign::SetupRequest {
        template_path: args.template,
        output_root: args.output,
        start_color: args.start_color,
        end_color: args.end_color,
        border_thickness: args.border,
    };

    let mut session = autodesign::Session::NeedsSetup;
    session.configure(&req, Some(ws))?;

    eprintln!("saved setup to {}", ws.dir().display());
    Ok(())
}

fn cmd_run(ws: &autodesign::Workspace, args: RunArgs) -> anyhow::Result<()> {
    let session = match (&args.config, &args.template) {
        (Some(config), Some(template)) => autodesign::Session::Ready(autodesign::ReadySession {
            config: autodesign::RunConfig::from_path(config)?,
            template_path: template.clone(),
        }),
        _ => autodesign::Session::resume(ws)?,
    };
    if session.ready().is_none() {
        anyhow::bail!(
            "no saved setup in '{}'; run `autodesign setup` first",
            ws.dir().display()
        );
    }

    let date = match &args.date {
        Some(s) => autodesign::DateLabel::parse(s)?,
        None => autodesign::DateLabel::today(),
    };
    let opts = autodesign::BatchOpts {
        layout: autodesign::LayoutOpts {
            target_width: args.target_width,
            tall_poster_threshold_px: args.tall_threshold,
            tall_poster_nudge_px: args.tall_nudge,
        },
        parallel: args.parallel,
        threads: args.threads,
    };

    let report = session
        .run_batch(&args.posters, date, &opts, &autodesign::CancelToken::new())
        .with_context(|| format!("process posters in '{}'", args.posters.display()))?;
    print_report(&report);

    match report.outcome() {
        autodesign::BatchOutcome::NothingProcessed if !report.failed.is_empty() => {
            anyhow::bail!("no poster could be processed ({} failed)", report.failed.len())
        }
        autodesign::BatchOutcome::NothingProcessed => {
            eprintln!("no png/jpg/jpeg posters found in {}", args.posters.display());
            Ok(())
        }
        autodesign::BatchOutcome::Partial | autodesign::BatchOutcome::Complete => Ok(()),
    }
}

fn print_report(report: &autodesign::BatchReport) {
    eprintln!(
        "wrote {} poster(s) to {}",
        report.succeeded(),
        report.output_dir.display()
    );
    if !report.failed.is_empty() {
        eprintln!("failed:");
        for f in &report.failed {
            eprintln!("  {}: {}", f.file_name, f.error);
        }
    }
}

fn cmd_status(ws: &autodesign::Workspace) -> anyhow::Result<()> {
    match autodesign::Session::resume(ws)? {
        autodesign::Session::NeedsSetup => {
            println!("not configured ({})", ws.dir().display());
        }
        autodesign::Session::Ready(ready) => {
            let cfg = &ready.config;
            println!("template:    {}", ready.template_path.display());
            println!("output root: {}", cfg.output_root.display());
            println!("start color: {}", cfg.start_color.to_hex());
            println!("end color:   {}", cfg.end_color.to_hex());
            println!(
                "border:      {}",
                autodesign::format_border_px(cfg.border_thickness_px)
            );
        }
    }
    Ok(())
}

fn cmd_reset(ws: &autodesign::Workspace) -> anyhow::Result<()> {
    // A malformed config must not block clearing it.
    let mut session = autodesign::Session::resume(ws).unwrap_or(autodesign::Session::NeedsSetup);
    session.reset(Some(ws))?;
    eprintln!("cleared setup in {}", ws.dir().display());
    Ok(())
}
