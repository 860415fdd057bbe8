//! `vecta resize`: export at a fixed pixel size.

use anyhow::{Result, bail};

use super::args::ResizeArgs;
use super::optimize::load_into;
use crate::config::{ResizeConfig, VectaConfig};
use crate::log;
use crate::session::{Command, Session, SessionError};
use crate::vector::Viewport;
use crate::vector::resize::ResizeRequest;

pub fn run_resize(args: &ResizeArgs, config: &VectaConfig) -> Result<()> {
    let mut session = Session::new(config.session_settings());
    load_into(&mut session, &args.input)?;

    let document = session.document().ok_or(SessionError::NoDocument)?;
    let viewport = document
        .document()
        .map_err(|source| SessionError::MalformedInput {
            name: document.name.clone(),
            source,
        })?
        .viewport;

    let request = resolve_request(args, &config.resize, &viewport)?;
    session.handle(Command::Resize(request))?;

    let path = session.export()?.write_to(&config.export.dir)?;
    log!("resize"; "{}x{} -> {}", request.width, request.height, path.display());
    Ok(())
}

/// Turn the size flags into a request.
fn resolve_request(
    args: &ResizeArgs,
    config: &ResizeConfig,
    viewport: &Viewport,
) -> Result<ResizeRequest> {
    if let Some(size) = args.preset {
        if !config.is_preset(size) {
            bail!(
                "{size} is not a configured preset (available: {})",
                config
                    .presets
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        return Ok(ResizeRequest::square(size));
    }

    let request = match (args.width, args.height) {
        (Some(0), _) | (_, Some(0)) => bail!("width and height must be greater than 0"),
        (Some(width), Some(height)) => ResizeRequest::new(width, height),
        (Some(width), None) if config.keep_aspect => ResizeRequest::from_width(width, viewport),
        (None, Some(height)) if config.keep_aspect => ResizeRequest::from_height(height, viewport),
        (Some(size), None) | (None, Some(size)) => ResizeRequest::square(size),
        (None, None) => bail!("give --width, --height or --preset"),
    };
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn args(width: Option<u32>, height: Option<u32>, preset: Option<u32>) -> ResizeArgs {
        ResizeArgs {
            input: PathBuf::from("a.svg"),
            width,
            height,
            preset,
            keep_aspect: None,
            output: None,
        }
    }

    #[test]
    fn test_resolve_request() {
        let config = ResizeConfig::default();
        let wide = Viewport::sized(200.0, 100.0);

        let request = resolve_request(&args(Some(48), None, None), &config, &wide).unwrap();
        assert_eq!(request, ResizeRequest::new(48, 24));

        let request = resolve_request(&args(None, Some(24), None), &config, &wide).unwrap();
        assert_eq!(request, ResizeRequest::new(48, 24));

        let request = resolve_request(&args(Some(10), Some(30), None), &config, &wide).unwrap();
        assert_eq!(request, ResizeRequest::new(10, 30));

        let request = resolve_request(&args(None, None, Some(512)), &config, &wide).unwrap();
        assert_eq!(request, ResizeRequest::square(512));
    }

    #[test]
    fn test_resolve_request_without_aspect() {
        let config = ResizeConfig {
            keep_aspect: false,
            ..ResizeConfig::default()
        };
        let wide = Viewport::sized(200.0, 100.0);
        let request = resolve_request(&args(Some(48), None, None), &config, &wide).unwrap();
        assert_eq!(request, ResizeRequest::square(48));
    }

    #[test]
    fn test_resolve_request_errors() {
        let config = ResizeConfig::default();
        let square = Viewport::sized(1.0, 1.0);
        assert!(resolve_request(&args(None, None, None), &config, &square).is_err());
        assert!(resolve_request(&args(None, None, Some(100)), &config, &square).is_err());
        assert!(resolve_request(&args(Some(0), None, None), &config, &square).is_err());
    }

    #[test]
    fn test_run_resize() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("logo.svg");
        fs::write(
            &input,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 10"><path d="M0 0h20"/></svg>"#,
        )
        .unwrap();

        let mut config = VectaConfig::default();
        config.export.dir = dir.path().to_path_buf();
        let mut resize_args = args(Some(100), None, None);
        resize_args.input = input;

        run_resize(&resize_args, &config).unwrap();
        let out = fs::read_to_string(dir.path().join("logo_100x50.svg")).unwrap();
        assert!(out.contains(r#"width="100""#));
        assert!(out.contains(r#"height="50""#));
    }
}
