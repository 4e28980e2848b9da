// SPDX-License-Identifier: MPL-2.0
//! Command-line driver: loads a result file and replays viewer commands
//! against a headless page, printing the viewer state after each step.

use anyhow::{anyhow, bail, Context, Result};
use iced_core::keyboard::{key::Named, Key, Modifiers};
use iced_core::mouse::ScrollDelta;
use iced_core::{Point, Size};
use search_lens::app::{App, Event, Message};
use search_lens::application::port::{HeadlessHost, ImageProbe};
use search_lens::config::{self, Config};
use search_lens::domain::results::ResultId;
use search_lens::infrastructure::{FsImageProbe, ResultFileSource};
use search_lens::ui::state::zoom::format_percent;
use search_lens::ui::viewer::controller;
use search_lens::ui::viewer::LoadPhase;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: search_lens [OPTIONS] RESULTS.toml [COMMAND...]

Options:
  --config PATH      Settings file (default: platform config dir)
  --container WxH    Viewer container size in pixels (default: 1280x800)
  --save-config      Write the effective settings back to the settings file
  -v, --verbose      Debug logging
  -h, --help         Print this help

Commands:
  open:<id>          Open a result in the viewer
  next, prev, close  Session navigation
  Escape, ArrowLeft, ArrowRight, +, =, -, 0
                     Key presses
  wheel-up, wheel-down
                     One wheel notch
  drag:X1,Y1:X2,Y2   Drag the image between two points
  dblclick           Double-click the image
";

const DEFAULT_CONTAINER: Size = Size::new(1280.0, 800.0);

/// One replayable viewer command.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Open(ResultId),
    Next,
    Previous,
    Close,
    Key(Key),
    Wheel(f32),
    Drag { from: Point, to: Point },
    DoubleClick,
}

fn parse_command(raw: &str) -> Result<Command> {
    if let Some(id) = raw.strip_prefix("open:") {
        if id.is_empty() {
            bail!("open needs a result id");
        }
        return Ok(Command::Open(ResultId::from(id)));
    }
    if let Some(points) = raw.strip_prefix("drag:") {
        let (from, to) = points
            .split_once(':')
            .ok_or_else(|| anyhow!("drag expects X1,Y1:X2,Y2, got `{points}`"))?;
        return Ok(Command::Drag {
            from: parse_point(from)?,
            to: parse_point(to)?,
        });
    }
    let command = match raw {
        "next" => Command::Next,
        "prev" => Command::Previous,
        "close" => Command::Close,
        "wheel-up" => Command::Wheel(1.0),
        "wheel-down" => Command::Wheel(-1.0),
        "dblclick" => Command::DoubleClick,
        "Escape" => Command::Key(Key::Named(Named::Escape)),
        "ArrowLeft" => Command::Key(Key::Named(Named::ArrowLeft)),
        "ArrowRight" => Command::Key(Key::Named(Named::ArrowRight)),
        "+" | "=" | "-" | "0" => Command::Key(Key::Character(raw.into())),
        other => bail!("unknown command `{other}`"),
    };
    Ok(command)
}

fn parse_point(raw: &str) -> Result<Point> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| anyhow!("point expects X,Y, got `{raw}`"))?;
    Ok(Point::new(
        x.trim().parse().with_context(|| format!("bad x in `{raw}`"))?,
        y.trim().parse().with_context(|| format!("bad y in `{raw}`"))?,
    ))
}

fn parse_size(raw: &str) -> Result<Size> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("size expects WxH, got `{raw}`"))?;
    Ok(Size::new(
        width.trim().parse().with_context(|| format!("bad width in `{raw}`"))?,
        height.trim().parse().with_context(|| format!("bad height in `{raw}`"))?,
    ))
}

/// Messages a command expands to.
fn messages(command: &Command) -> Vec<Message> {
    match command {
        Command::Open(id) => vec![Message::Open(id.clone())],
        Command::Next => vec![Message::Next],
        Command::Previous => vec![Message::Previous],
        Command::Close => vec![Message::Close],
        Command::Key(key) => vec![Message::KeyPressed {
            key: key.clone(),
            modifiers: Modifiers::empty(),
        }],
        Command::Wheel(y) => vec![Message::WheelScrolled(ScrollDelta::Lines { x: 0.0, y: *y })],
        Command::Drag { from, to } => vec![
            Message::Viewport(controller::Message::BeginDrag(*from)),
            Message::Viewport(controller::Message::ContinueDrag(*to)),
            Message::Viewport(controller::Message::EndDrag),
        ],
        Command::DoubleClick => {
            let first = Instant::now();
            let second = first + Duration::from_millis(100);
            [first, second]
                .into_iter()
                .map(|at| {
                    Message::Viewport(controller::Message::Click {
                        position: Point::ORIGIN,
                        at,
                    })
                })
                .collect()
        }
    }
}

/// Runs one message and answers any image request with the probe result.
fn dispatch<P: ImageProbe>(app: &mut App<HeadlessHost>, probe: &P, message: Message) {
    let Event::ImageRequested { token, source } = app.update(message) else {
        return;
    };
    let Some(item) = app.current_item() else {
        return;
    };
    let reply = match probe.natural_size(item) {
        Ok(natural) => Message::ImageReady { token, natural },
        Err(err) => {
            tracing::warn!(%source, %err, "image unavailable");
            Message::ImageFailed {
                token,
                reason: err.to_string(),
            }
        }
    };
    app.update(reply);
}

fn status(app: &App<HeadlessHost>) -> String {
    let Some(id) = app.session().current_id() else {
        return "closed".to_string();
    };
    let position = app
        .position()
        .map_or_else(|| "-".to_string(), |(index, total)| format!("{index}/{total}"));
    let viewer = app.viewer();
    let offset = viewer.state().offset();
    let phase = match viewer.phase() {
        LoadPhase::Idle => "idle".to_string(),
        LoadPhase::Pending => "pending".to_string(),
        LoadPhase::Ready { natural } => format!("{}x{}", natural.width, natural.height),
        LoadPhase::Failed { reason } => format!("failed ({reason})"),
    };
    let shown = viewer.transform().map_or_else(
        || "-".to_string(),
        |transform| {
            let size = transform.displayed_size();
            format!("{:.0}x{:.0}", size.width, size.height)
        },
    );
    format!(
        "open {id} [{position}] zoom {} offset ({:.0}, {:.0}) shown {shown} image {phase}",
        format_percent(viewer.zoom_level_percent()),
        offset.x,
        offset.y,
    )
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => config::load_from_path(&path)
            .with_context(|| format!("reading settings from {}", path.display())),
        None => Ok(config::load().unwrap_or_default()),
    }
}

fn store_config(path: Option<&Path>, config: &Config) -> Result<()> {
    match path {
        Some(path) => config::save_to_path(config, path)
            .with_context(|| format!("writing settings to {}", path.display())),
        None => config::save(config).context("writing settings"),
    }
}

fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let save_config = args.contains("--save-config");
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let container = args
        .opt_value_from_fn("--container", parse_size)?
        .unwrap_or(DEFAULT_CONTAINER);
    let results_path: PathBuf = args
        .free_from_str()
        .context("missing RESULTS.toml (see --help)")?;
    let commands = args
        .finish()
        .into_iter()
        .map(|raw| {
            let raw = raw
                .into_string()
                .map_err(|raw| anyhow!("non UTF-8 argument {raw:?}"))?;
            parse_command(&raw).map(|command| (raw, command))
        })
        .collect::<Result<Vec<_>>>()?;

    let config = load_config(config_path.clone())?;
    if save_config {
        store_config(config_path.as_deref(), &config)?;
    }
    let mut app = App::new(config, HeadlessHost::default());
    app.load_from(&mut ResultFileSource::new(&results_path))
        .with_context(|| format!("loading {}", results_path.display()))?;
    app.update(Message::ContainerResized(container));
    println!(
        "{} results from {}",
        app.results().len(),
        results_path.display()
    );

    let probe = FsImageProbe;
    for (raw, command) in &commands {
        for message in messages(command) {
            dispatch(&mut app, &probe, message);
        }
        println!("{raw:<16} {}", status(&app));
        if let (Command::Open(_), Some(summary)) = (command, app.current_summary()) {
            println!(
                "{:<16} {} | {} | {} | {}",
                "",
                summary.title,
                summary.source_label,
                summary.dimensions.as_deref().unwrap_or("-"),
                summary.similarity.as_deref().unwrap_or("-"),
            );
        }
    }

    Ok(())
}
