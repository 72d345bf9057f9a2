use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ruler_ticks::{steps, RulerCanvas, RulerConfig, Tick};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ruler-ticks", about = "Draw a ruler by divide and conquer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct RulerArgs {
    /// Ruler length L; the ruler spans [0, L].
    #[arg(long, default_value_t = 128.0)]
    length: f64,
    /// Tallest tick height h.
    #[arg(long, default_value_t = 5)]
    height: i32,
    /// Diagram width in columns.
    #[arg(long, default_value_t = 129)]
    width: usize,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute every tick at once and draw the finished ruler.
    Draw {
        #[command(flatten)]
        ruler: RulerArgs,
    },
    /// Draw the ruler one tick at a time.
    Animate {
        #[command(flatten)]
        ruler: RulerArgs,
        /// Pause between steps, in milliseconds.
        #[arg(long, default_value_t = 250)]
        delay_ms: u64,
        /// Stop after this many ticks.
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Print ticks in generation order, one `position\theight` per line.
    List {
        #[command(flatten)]
        ruler: RulerArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Draw { ruler } => run_draw(ruler)?,
        Commands::Animate {
            ruler,
            delay_ms,
            steps,
        } => run_animate(ruler, delay_ms, steps)?,
        Commands::List { ruler } => run_list(ruler)?,
    }

    Ok(())
}

fn prepare(args: &RulerArgs) -> Result<(RulerConfig, RulerCanvas)> {
    let config = RulerConfig::new(args.length, args.height);
    config.validate().context("invalid ruler parameters")?;
    let canvas =
        RulerCanvas::for_config(&config, args.width).context("invalid diagram width")?;
    Ok((config, canvas))
}

fn run_draw(args: RulerArgs) -> Result<()> {
    let (config, canvas) = prepare(&args)?;
    let ticks = config.ticks().context("tick generation failed")?;
    info!(count = ticks.len(), "computed all ticks");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    canvas.write(&mut out, &ticks, &config.title())?;
    writeln!(out, "Done: {} ticks in total.", ticks.len())?;

    Ok(())
}

fn run_animate(args: RulerArgs, delay_ms: u64, limit: Option<usize>) -> Result<()> {
    let (config, canvas) = prepare(&args)?;
    let config = config.with_step_delay(Duration::from_millis(delay_ms));
    let stream = config.stream().context("tick generation failed")?;
    let clear = io::stdout().is_terminal();
    info!(delay_ms, "starting animation");

    let mut accumulated: Vec<Tick> = Vec::new();
    let mut taken = 0;
    for step in steps(stream).take(limit.unwrap_or(usize::MAX)) {
        accumulated.push(step.tick);
        taken = step.index;

        let frame = canvas.render(&accumulated, &step.caption())?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if clear {
            write!(out, "\x1B[2J\x1B[1;1H")?;
        }
        writeln!(out, "{frame}")?;
        out.flush()?;
        drop(out);

        thread::sleep(config.step_delay);
    }

    println!("Animation finished after {taken} steps.");
    Ok(())
}

fn run_list(args: RulerArgs) -> Result<()> {
    let (config, _) = prepare(&args)?;
    let ticks = config.ticks().context("tick generation failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for tick in ticks {
        writeln!(out, "{}\t{}", tick.position, tick.height)?;
    }

    Ok(())
}
