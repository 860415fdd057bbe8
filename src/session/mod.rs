//! Workbench session: the loaded document, both preview viewports and the
//! command handlers that drive them.
//!
//! Every user interaction is a [`Command`] applied through
//! [`Session::handle`]. Commands run to completion one at a time; a command
//! that fails leaves the session untouched.
//!
//! ```text
//! Load ──► LoadedDocument { original, modified } + viewports reset
//! Wheel / Pan / ZoomStep / ResetView ──► ViewportSync (ignored without a document)
//! Optimize ──► Optimizer(original) ──► modified
//! Resize ──► export size
//! ```

mod error;
mod source;

pub use error::SessionError;
pub use source::SourceKind;

use crate::export::{self, ExportFile, ExportSettings};
use crate::vector::resize::{ResizeRequest, display_markup};
use crate::vector::{ConvertError, OptimizeStats, Optimizer, UsvgOptimizer, VectorDocument, svg, to_svg};
use crate::viewport::{Pane, ViewportSync, ZoomDirection, ZoomSettings};

/// A document as shown in the two preview panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    /// File name the document was loaded from.
    pub name: String,
    pub kind: SourceKind,
    /// File content as loaded.
    pub source: String,
    /// SVG markup of the original pane.
    pub original: String,
    /// SVG markup of the modified pane.
    pub modified: String,
    /// Pixel size requested through the resize tool.
    pub resize: Option<ResizeRequest>,
}

impl LoadedDocument {
    /// Decode a file into a document, converting drawables to SVG.
    pub fn load(name: &str, mime_type: Option<&str>, content: String) -> Result<Self, SessionError> {
        let kind = SourceKind::detect(name, mime_type).ok_or_else(|| {
            SessionError::UnsupportedFormat {
                name: name.to_string(),
            }
        })?;

        let malformed = |source: ConvertError| SessionError::MalformedInput {
            name: name.to_string(),
            source,
        };

        let original = match kind {
            SourceKind::Svg => {
                // must be renderable: an <svg> root in well-formed markup
                display_markup(&content).map_err(malformed)?;
                content.clone()
            }
            SourceKind::VectorXml => to_svg(&content).map_err(malformed)?,
        };

        Ok(Self {
            name: name.to_string(),
            kind,
            source: content,
            modified: original.clone(),
            original,
            resize: None,
        })
    }

    /// Markup of a pane, sized to scale freely.
    pub fn display(&self, pane: Pane) -> Result<String, ConvertError> {
        match pane {
            Pane::Original => display_markup(&self.original),
            Pane::Modified => display_markup(&self.modified),
        }
    }

    /// Parsed model of the modified pane.
    pub fn document(&self) -> Result<VectorDocument, ConvertError> {
        svg::parse(&self.modified)
    }

    pub fn is_modified(&self) -> bool {
        self.original != self.modified
    }
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A file finished loading.
    Load {
        name: String,
        mime: Option<String>,
        content: String,
    },
    /// Mouse wheel over a pane at pointer position (`x`, `y`).
    Wheel {
        pane: Pane,
        x: f64,
        y: f64,
        direction: ZoomDirection,
    },
    /// Drag by (`dx`, `dy`) in either pane.
    Pan { dx: f64, dy: f64 },
    /// Toolbar zoom button.
    ZoomStep(ZoomDirection),
    ResetView,
    /// Run the optimizer; `None` uses the configured precision.
    Optimize { precision: Option<u8> },
    /// Choose the export pixel size.
    Resize(ResizeRequest),
}

/// What a handled command changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Loaded(SourceKind),
    ViewChanged,
    /// Nothing to act on (no document loaded).
    Ignored,
    Optimized(OptimizeStats),
    Resized(ResizeRequest),
}

/// Settings a session needs beyond zoom tuning.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub zoom: ZoomSettings,
    /// Optimizer precision when a command does not give one.
    pub precision: u8,
    pub export: ExportSettings,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            zoom: ZoomSettings::default(),
            precision: 3,
            export: ExportSettings::default(),
        }
    }
}

/// Explicit workbench context, owned by the hosting shell.
pub struct Session {
    document: Option<LoadedDocument>,
    viewport: ViewportSync,
    optimizer: Box<dyn Optimizer>,
    settings: SessionSettings,
}

impl Session {
    /// Session using the usvg optimizer.
    pub fn new(settings: SessionSettings) -> Self {
        Self::with_optimizer(settings, Box::new(UsvgOptimizer::default()))
    }

    pub fn with_optimizer(settings: SessionSettings, optimizer: Box<dyn Optimizer>) -> Self {
        Self {
            document: None,
            viewport: ViewportSync::new(settings.zoom),
            optimizer,
            settings,
        }
    }

    pub fn document(&self) -> Option<&LoadedDocument> {
        self.document.as_ref()
    }

    pub fn viewport(&self) -> &ViewportSync {
        &self.viewport
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Apply one command.
    pub fn handle(&mut self, command: Command) -> Result<Effect, SessionError> {
        match command {
            Command::Load {
                name,
                mime,
                content,
            } => self.load(&name, mime.as_deref(), content),
            Command::Wheel {
                pane,
                x,
                y,
                direction,
            } => Ok(self.on_view(|vp| vp.wheel_zoom(pane, x, y, direction))),
            Command::Pan { dx, dy } => Ok(self.on_view(|vp| vp.pan(dx, dy))),
            Command::ZoomStep(direction) => Ok(self.on_view(|vp| vp.step_zoom(direction))),
            Command::ResetView => Ok(self.on_view(ViewportSync::reset)),
            Command::Optimize { precision } => {
                self.optimize(precision.unwrap_or(self.settings.precision))
            }
            Command::Resize(request) => {
                let document = self.document.as_mut().ok_or(SessionError::NoDocument)?;
                if request.width == 0 || request.height == 0 {
                    return Err(SessionError::InvalidSize {
                        width: request.width,
                        height: request.height,
                    });
                }
                document.resize = Some(request);
                Ok(Effect::Resized(request))
            }
        }
    }

    /// Replace the current document; the old one stays on failure.
    fn load(&mut self, name: &str, mime: Option<&str>, content: String) -> Result<Effect, SessionError> {
        let document = LoadedDocument::load(name, mime, content)?;
        let kind = document.kind;
        self.document = Some(document);
        self.viewport.reset();
        Ok(Effect::Loaded(kind))
    }

    fn on_view(&mut self, transition: impl FnOnce(&mut ViewportSync)) -> Effect {
        if self.document.is_none() {
            return Effect::Ignored;
        }
        transition(&mut self.viewport);
        Effect::ViewChanged
    }

    /// Optimize the original markup into the modified pane.
    fn optimize(&mut self, precision: u8) -> Result<Effect, SessionError> {
        let document = self.document.as_mut().ok_or(SessionError::NoDocument)?;

        let optimized = self
            .optimizer
            .optimize(&document.original, precision)
            .map_err(SessionError::ExternalToolFailure)?;
        display_markup(&optimized)
            .map_err(|err| SessionError::ExternalToolFailure(err.into()))?;

        let stats = OptimizeStats::measure(&document.original, &optimized);
        document.modified = optimized;
        Ok(Effect::Optimized(stats))
    }

    /// Build the download for the current document.
    pub fn export(&self) -> Result<ExportFile, SessionError> {
        let document = self.document.as_ref().ok_or(SessionError::NoDocument)?;
        export::export(document, &self.settings.export).map_err(|source| SessionError::Export {
            name: document.name.clone(),
            source,
        })
    }
}
