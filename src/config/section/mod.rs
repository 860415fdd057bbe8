//! Configuration section definitions.
//!
//! Each module corresponds to a section in `vecta.toml`:
//!
//! | Module     | TOML Section  | Purpose                              |
//! |------------|---------------|--------------------------------------|
//! | `viewport` | `[viewport]`  | Zoom factors and minimum scale       |
//! | `optimize` | `[optimize]`  | Optimizer precision                  |
//! | `export`   | `[export]`    | Output filename, directory, prolog   |
//! | `resize`   | `[resize]`    | Resize presets and aspect handling   |

mod export;
mod optimize;
mod resize;
mod viewport;

pub use export::ExportConfig;
pub use optimize::OptimizeConfig;
pub use resize::ResizeConfig;
pub use viewport::ViewportConfig;
