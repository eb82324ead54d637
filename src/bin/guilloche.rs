use std::path::PathBuf;

use anyhow::Context as _;
use clap::{CommandFactory as _, Parser};
use clap::error::ErrorKind;

use guilloche::{
    AnimationState, Canvas, ContinuousInput, Session, SessionOpts, open_continuous_input,
    run_headless,
};

/// Animated guilloche curves. Keys: arrows change R/r, F1 switches the curve, 1/2 line
/// width, Q/A W/S E/D the frequencies, M lines/dots, F2 saves an SVG, Return fullscreen,
/// Escape quits. The mouse sets R and r directly.
#[derive(Parser, Debug)]
#[command(name = "guilloche", version)]
struct Cli {
    /// Start fullscreen.
    #[arg(short, long)]
    fullscreen: bool,

    /// Write every frame to a numbered PNG.
    #[arg(short, long)]
    screenshot: bool,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Directory for PNG and SVG output.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Initial parameters as JSON.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Quit after this many frames.
    #[arg(long)]
    frames: Option<u64>,

    /// Render without a window.
    #[arg(long, requires = "frames")]
    headless: bool,

    /// Print the final parameters as JSON on exit.
    #[arg(long)]
    print_params: bool,

    /// Do not open a joystick.
    #[arg(long)]
    no_joystick: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                eprint!("{}", e.render());
                return Ok(());
            }
            ErrorKind::UnknownArgument => {
                eprint!("{}", e.render());
                eprintln!();
                eprint!("{}", Cli::command().render_help());
                return Ok(());
            }
            _ => e.exit(),
        },
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let state = match &cli.params {
        Some(path) => AnimationState::from_path(path)
            .with_context(|| format!("load parameters '{}'", path.display()))?,
        None => AnimationState::default(),
    };
    let canvas = Canvas::new(cli.width, cli.height).context("viewport size")?;

    let mut session = Session::new(SessionOpts {
        canvas,
        state,
        screenshot: cli.screenshot,
        out_dir: cli.out_dir.clone(),
    })
    .context("start session")?;
    let mut continuous = open_continuous_input(!cli.no_joystick);

    let session = if cli.headless {
        let frames = cli.frames.context("--headless requires --frames")?;
        run_headless(&mut session, continuous.as_mut(), frames)?;
        session
    } else {
        run_windowed(session, continuous, &cli)?
    };

    if cli.print_params {
        println!("{}", session.state().to_json_pretty()?);
    }
    Ok(())
}

#[cfg(feature = "window")]
fn run_windowed(
    session: Session,
    continuous: Box<dyn ContinuousInput>,
    cli: &Cli,
) -> anyhow::Result<Session> {
    let opts = guilloche::WindowOpts {
        fullscreen: cli.fullscreen,
        frames: cli.frames,
    };
    guilloche::run(session, continuous, opts).context("window")
}

#[cfg(not(feature = "window"))]
fn run_windowed(
    _session: Session,
    _continuous: Box<dyn ContinuousInput>,
    _cli: &Cli,
) -> anyhow::Result<Session> {
    anyhow::bail!("built without the `window` feature; use --headless --frames <n>")
}
