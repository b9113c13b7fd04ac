use std::path::{Path, PathBuf};

use anyhow::Context as _;
use boloto::{
    FfmpegSink, FfmpegSinkOpts, FrameIndex, FrameSink, Pacing, PngSequenceSink, Show, ShowSession,
};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "boloto", version, about = "Procedural swamp creatures")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single tick of a show as a PNG.
    Frame(FrameArgs),
    /// Render a whole show into a PNG sequence directory or an MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Render the tableau of every creature as a PNG.
    Still(StillArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Preset name (`frog`, `snails`, `tableau`) or path to a show JSON.
    #[arg(long)]
    show: String,

    /// Tick to render (0-based).
    #[arg(long, default_value_t = 0)]
    tick: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Preset name (`frog`, `snails`, `tableau`) or path to a show JSON.
    #[arg(long)]
    show: String,

    /// Output directory for PNG frames, or a `.mp4` file.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of replacing an existing MP4.
    #[arg(long)]
    no_overwrite: bool,

    /// Pace frames at the show's frame delay instead of rendering flat out.
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

#[derive(Parser, Debug)]
struct StillArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Still(args) => cmd_still(args),
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

fn load_show(arg: &str) -> anyhow::Result<Show> {
    if let Some(show) = Show::preset(arg) {
        return Ok(show);
    }
    let path = Path::new(arg);
    if !path.exists() {
        anyhow::bail!("'{arg}' is neither a preset (frog, snails, tableau) nor a show file");
    }
    Show::from_path(path).with_context(|| format!("load show '{}'", path.display()))
}

fn write_tick(show: Show, tick: u64, out: &Path) -> anyhow::Result<()> {
    let session = ShowSession::new(show)?;
    let frame = session.render_tick(FrameIndex(tick))?;
    boloto::write_png(out, &frame)?;
    tracing::info!(path = %out.display(), tick, "wrote frame");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let show = load_show(&args.show)?;
    write_tick(show, args.tick, &args.out)
}

fn cmd_still(args: StillArgs) -> anyhow::Result<()> {
    write_tick(Show::tableau(), 0, &args.out)
}

fn mp4_opts(args: &RenderArgs) -> FfmpegSinkOpts {
    FfmpegSinkOpts {
        out_path: args.out.clone(),
        overwrite: !args.no_overwrite,
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let show = load_show(&args.show)?;
    let session = ShowSession::new(show)?;
    let pacing = if args.realtime {
        Pacing::Realtime
    } else {
        Pacing::Offline
    };

    let is_mp4 = args
        .out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mp4"));
    let mut sink: Box<dyn FrameSink> = if is_mp4 {
        Box::new(FfmpegSink::new(mp4_opts(&args)))
    } else {
        Box::new(PngSequenceSink::new(args.out.clone()))
    };

    let stats = session
        .render_all(sink.as_mut(), pacing)
        .with_context(|| format!("render show into '{}'", args.out.display()))?;
    tracing::info!(path = %args.out.display(), frames = stats.frames, "wrote show");
    Ok(())
}
