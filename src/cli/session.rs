//! `vecta session`: line-oriented workbench shell.
//!
//! Each input line is one command. Failures are reported and the shell keeps
//! going; the session state is left as it was before the failed command.
//!
//! ```text
//! load PATH                          wheel original|modified X Y in|out
//! pan DX DY                          zoom in|out
//! reset                              optimize [PRECISION]
//! resize W [H]                       export [DIR]
//! state                              quit
//! ```

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::common::file_name;
use crate::config::VectaConfig;
use crate::logger::{status_error, status_info, status_success};
use crate::session::{Command, Effect, Session, SessionError};
use crate::utils::{mime, plural_count};
use crate::vector::optimize::MAX_PRECISION;
use crate::vector::resize::ResizeRequest;
use crate::viewport::Pane;
use crate::{debug, log};

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
enum Line {
    Session(Command),
    Load(PathBuf),
    Export(Option<PathBuf>),
    State,
    Quit,
    Empty,
}

/// Whether the shell keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run_session(script: Option<&Path>, config: &VectaConfig) -> Result<()> {
    let mut shell = Shell::new(config);
    match script {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            shell.run(BufReader::new(file), false)
        }
        None => {
            let interactive = io::stdin().is_terminal();
            if interactive {
                log!("session"; "type `quit` to leave");
            }
            shell.run(io::stdin().lock(), interactive)
        }
    }
}

struct Shell {
    session: Session,
    export_dir: PathBuf,
}

impl Shell {
    fn new(config: &VectaConfig) -> Self {
        Self {
            session: Session::new(config.session_settings()),
            export_dir: config.export.dir.clone(),
        }
    }

    fn run(&mut self, reader: impl BufRead, prompt: bool) -> Result<()> {
        let mut lines = reader.lines();
        loop {
            if prompt {
                print!("> ");
                io::stdout().flush()?;
            }
            let Some(line) = lines.next() else {
                return Ok(());
            };
            if self.execute(&line?) == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn execute(&mut self, input: &str) -> Flow {
        let line = match parse_line(input) {
            Ok(line) => line,
            Err(message) => {
                status_error("invalid command", &message);
                return Flow::Continue;
            }
        };
        debug!("session"; "{line:?}");

        let result = match line {
            Line::Empty => Ok(()),
            Line::Quit => return Flow::Quit,
            Line::State => {
                self.print_state();
                Ok(())
            }
            Line::Load(path) => self.load(&path),
            Line::Export(dir) => self.export(dir),
            Line::Session(command) => self.apply(command),
        };

        if let Err(err) = result {
            match err.downcast_ref::<SessionError>() {
                Some(session_err) => status_error(session_err.summary(), &session_err.to_string()),
                None => status_error("command failed", &format!("{err:#}")),
            }
        }
        Flow::Continue
    }

    fn load(&mut self, path: &Path) -> Result<()> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        self.apply(Command::Load {
            name: file_name(path),
            mime: Some(mime::from_path(path).to_string()),
            content,
        })
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        let effect = self.session.handle(command)?;
        match effect {
            Effect::Ignored => status_info("no document loaded, ignoring"),
            effect => status_success(&self.describe(&effect)),
        }
        Ok(())
    }

    fn describe(&self, effect: &Effect) -> String {
        match effect {
            Effect::Loaded(kind) => {
                let paths = self
                    .session
                    .document()
                    .and_then(|doc| doc.document().ok())
                    .map_or(0, |doc| doc.path_count());
                let name = self.session.document().map_or("", |doc| doc.name.as_str());
                format!("loaded {name} ({}, {})", kind.label(), plural_count(paths, "path"))
            }
            Effect::ViewChanged => {
                format!(
                    "view {}",
                    self.session.viewport().state(Pane::Original).css_transform()
                )
            }
            Effect::Optimized(stats) => format!(
                "optimized {} -> {} bytes ({:.1}% saved)",
                stats.original_bytes,
                stats.optimized_bytes,
                stats.saved_percent()
            ),
            Effect::Resized(request) => {
                format!("export size {}x{}", request.width, request.height)
            }
            Effect::Ignored => String::new(),
        }
    }

    fn export(&self, dir: Option<PathBuf>) -> Result<()> {
        let file = self.session.export()?;
        let dir = dir.unwrap_or_else(|| self.export_dir.clone());
        let path = file.write_to(&dir)?;
        status_success(&format!("exported {} ({})", path.display(), file.mime));
        Ok(())
    }

    fn print_state(&self) {
        let viewport = self.session.viewport();
        for pane in [Pane::Original, Pane::Modified] {
            println!("{:<9} {}", pane_label(pane), viewport.state(pane).css_transform());
        }
        match self.session.document() {
            Some(doc) => {
                println!("document  {} ({})", doc.name, doc.kind.label());
                println!("modified  {}", if doc.is_modified() { "yes" } else { "no" });
                if let Some(request) = doc.resize {
                    println!("resize    {}x{}", request.width, request.height);
                }
            }
            None => println!("document  none"),
        }
    }
}

const fn pane_label(pane: Pane) -> &'static str {
    match pane {
        Pane::Original => "original",
        Pane::Modified => "modified",
    }
}

// ============================================================================
// parsing
// ============================================================================

fn parse_line(input: &str) -> Result<Line, String> {
    let input = input.trim();
    if input.is_empty() || input.starts_with('#') {
        return Ok(Line::Empty);
    }

    let mut words = input.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(Line::Empty);
    };
    let args: Vec<&str> = words.collect();

    let line = match (name, args.as_slice()) {
        ("load", [path]) => Line::Load(PathBuf::from(path)),
        ("wheel", [pane, x, y, direction]) => Line::Session(Command::Wheel {
            pane: pane.parse()?,
            x: number(x)?,
            y: number(y)?,
            direction: direction.parse()?,
        }),
        ("pan", [dx, dy]) => Line::Session(Command::Pan {
            dx: number(dx)?,
            dy: number(dy)?,
        }),
        ("zoom", [direction]) => Line::Session(Command::ZoomStep(direction.parse()?)),
        ("reset", []) => Line::Session(Command::ResetView),
        ("optimize", []) => Line::Session(Command::Optimize { precision: None }),
        ("optimize", [raw]) => Line::Session(Command::Optimize {
            precision: Some(precision(raw)?),
        }),
        ("resize", [size]) => Line::Session(Command::Resize(ResizeRequest::square(pixels(size)?))),
        ("resize", [width, height]) => Line::Session(Command::Resize(ResizeRequest::new(
            pixels(width)?,
            pixels(height)?,
        ))),
        ("export", []) => Line::Export(None),
        ("export", [dir]) => Line::Export(Some(PathBuf::from(dir))),
        ("state", []) => Line::State,
        ("quit" | "exit", []) => Line::Quit,
        (
            "load" | "wheel" | "pan" | "zoom" | "reset" | "optimize" | "resize" | "export"
            | "state" | "quit" | "exit",
            _,
        ) => return Err(format!("wrong number of arguments for `{name}`")),
        _ => return Err(format!("unknown command `{name}`")),
    };
    Ok(line)
}

fn number(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("invalid number `{raw}`"))
}

fn precision(raw: &str) -> Result<u8, String> {
    raw.parse::<u8>()
        .ok()
        .filter(|&value| value <= MAX_PRECISION)
        .ok_or_else(|| format!("invalid precision `{raw}`, expected 0 to {MAX_PRECISION}"))
}

fn pixels(raw: &str) -> Result<u32, String> {
    raw.parse::<u32>()
        .ok()
        .filter(|&value| value > 0)
        .ok_or_else(|| format!("invalid size `{raw}`"))
}
