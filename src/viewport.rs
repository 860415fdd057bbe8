//! Synchronized zoom/pan state for the two preview panes.
//!
//! The original and modified panes each own a [`ViewportState`]. Every
//! transition mutates one state and then copies it verbatim into the other,
//! so both panes always show the same region.

/// Scale and translation applied to one preview pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ViewportState {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// CSS transform applied to the pane's content.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One of the two preview panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Original,
    Modified,
}

impl Pane {
    pub const fn other(self) -> Self {
        match self {
            Self::Original => Self::Modified,
            Self::Modified => Self::Original,
        }
    }
}

impl std::str::FromStr for Pane {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" | "o" => Ok(Self::Original),
            "modified" | "m" => Ok(Self::Modified),
            _ => Err(format!("unknown pane `{s}` (expected original|modified)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl std::str::FromStr for ZoomDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" | "+" => Ok(Self::In),
            "out" | "-" => Ok(Self::Out),
            _ => Err(format!("unknown zoom direction `{s}` (expected in|out)")),
        }
    }
}

/// Zoom tuning shared by both panes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    /// Scale multiplier per wheel notch.
    pub wheel_factor: f64,
    /// Scale multiplier per zoom button press.
    pub step_factor: f64,
    /// Lower bound for the scale.
    pub min_scale: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            wheel_factor: 1.1,
            step_factor: 1.2,
            min_scale: 0.1,
        }
    }
}

impl ZoomSettings {
    fn change(factor: f64, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::In => factor,
            ZoomDirection::Out => 1.0 / factor,
        }
    }

    fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min_scale)
    }
}

/// Mirrored viewport states of the original and modified panes.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportSync {
    original: ViewportState,
    modified: ViewportState,
    settings: ZoomSettings,
}

impl ViewportSync {
    pub fn new(settings: ZoomSettings) -> Self {
        Self {
            original: ViewportState::IDENTITY,
            modified: ViewportState::IDENTITY,
            settings,
        }
    }

    pub fn settings(&self) -> &ZoomSettings {
        &self.settings
    }

    pub fn state(&self, pane: Pane) -> ViewportState {
        match pane {
            Pane::Original => self.original,
            Pane::Modified => self.modified,
        }
    }

    fn state_mut(&mut self, pane: Pane) -> &mut ViewportState {
        match pane {
            Pane::Original => &mut self.original,
            Pane::Modified => &mut self.modified,
        }
    }

    /// Copy `pane`'s state into the other pane.
    fn mirror_from(&mut self, pane: Pane) {
        let state = self.state(pane);
        *self.state_mut(pane.other()) = state;
    }

    /// True when both panes hold identical state.
    pub fn in_sync(&self) -> bool {
        self.original == self.modified
    }

    /// Both panes back to identity (document load, reset view).
    pub fn reset(&mut self) {
        self.original = ViewportState::IDENTITY;
        self.modified = ViewportState::IDENTITY;
    }

    /// Zoom `pane` around the pointer so the point under the cursor stays
    /// put, then mirror the result.
    ///
    /// The translate is scaled by the ratio actually applied after clamping,
    /// not by the requested wheel factor. The two only differ at the minimum
    /// scale, where the requested factor would slide the content without
    /// zooming it.
    pub fn wheel_zoom(&mut self, pane: Pane, pointer_x: f64, pointer_y: f64, direction: ZoomDirection) {
        let settings = self.settings;
        let state = self.state_mut(pane);

        let old_scale = state.scale;
        let new_scale = settings.clamp(old_scale * ZoomSettings::change(settings.wheel_factor, direction));
        // equals the requested change unless the clamp kicked in
        let applied = new_scale / old_scale;

        state.scale = new_scale;
        state.translate_x = pointer_x - (pointer_x - state.translate_x) * applied;
        state.translate_y = pointer_y - (pointer_y - state.translate_y) * applied;

        self.mirror_from(pane);
    }

    /// Toolbar zoom: scale around the transform origin, translation kept.
    pub fn step_zoom(&mut self, direction: ZoomDirection) {
        let settings = self.settings;
        let state = self.state_mut(Pane::Modified);
        state.scale = settings.clamp(state.scale * ZoomSettings::change(settings.step_factor, direction));
        self.mirror_from(Pane::Modified);
    }

    /// Move both panes by the same delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let state = self.state_mut(Pane::Original);
        state.translate_x += dx;
        state.translate_y += dy;
        self.mirror_from(Pane::Original);
    }
}

impl Default for ViewportSync {
    fn default() -> Self {
        Self::new(ZoomSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Content coordinate shown at screen point `p` along one axis.
    fn content_at(p: f64, translate: f64, scale: f64) -> f64 {
        (p - translate) / scale
    }

    #[test]
    fn test_starts_at_identity() {
        let sync = ViewportSync::default();
        assert_eq!(sync.state(Pane::Original), ViewportState::IDENTITY);
        assert_eq!(sync.state(Pane::Modified), ViewportState::IDENTITY);
    }

    #[test]
    fn test_wheel_zoom_keeps_pointer_fixed() {
        let mut sync = ViewportSync::default();
        sync.pan(13.0, -7.0);
        let before = sync.state(Pane::Modified);
        let (px, py) = (120.0, 80.0);

        sync.wheel_zoom(Pane::Modified, px, py, ZoomDirection::In);
        let after = sync.state(Pane::Modified);

        assert!(close(after.scale, 1.1));
        assert!(close(
            content_at(px, before.translate_x, before.scale),
            content_at(px, after.translate_x, after.scale)
        ));
        assert!(close(
            content_at(py, before.translate_y, before.scale),
            content_at(py, after.translate_y, after.scale)
        ));
    }

    #[test]
    fn test_wheel_zoom_formula() {
        let mut sync = ViewportSync::default();
        sync.wheel_zoom(Pane::Original, 100.0, 50.0, ZoomDirection::In);
        let state = sync.state(Pane::Original);
        assert!(close(state.translate_x, 100.0 - 100.0 * 1.1));
        assert!(close(state.translate_y, 50.0 - 50.0 * 1.1));
    }

    #[test]
    fn test_zoom_in_then_out_restores() {
        let mut sync = ViewportSync::default();
        sync.wheel_zoom(Pane::Original, 40.0, 30.0, ZoomDirection::In);
        sync.wheel_zoom(Pane::Original, 40.0, 30.0, ZoomDirection::Out);
        let state = sync.state(Pane::Original);
        assert!(close(state.scale, 1.0));
        assert!(close(state.translate_x, 0.0));
        assert!(close(state.translate_y, 0.0));
    }

    #[test]
    fn test_zoom_in_then_out_elsewhere_moves_translate() {
        let mut sync = ViewportSync::default();
        sync.wheel_zoom(Pane::Original, 40.0, 30.0, ZoomDirection::In);
        sync.wheel_zoom(Pane::Original, 0.0, 0.0, ZoomDirection::Out);
        let state = sync.state(Pane::Original);
        assert!(close(state.scale, 1.0));
        assert!(!close(state.translate_x, 0.0));
    }

    #[test]
    fn test_panes_stay_in_sync() {
        let mut sync = ViewportSync::default();
        sync.wheel_zoom(Pane::Original, 10.0, 10.0, ZoomDirection::In);
        assert!(sync.in_sync());
        sync.wheel_zoom(Pane::Modified, 300.0, 5.0, ZoomDirection::Out);
        assert!(sync.in_sync());
        sync.pan(-4.0, 9.5);
        assert!(sync.in_sync());
        sync.step_zoom(ZoomDirection::In);
        assert!(sync.in_sync());
        sync.reset();
        assert!(sync.in_sync());
        assert_eq!(sync.state(Pane::Original), ViewportState::IDENTITY);
    }

    #[test]
    fn test_pan_moves_both() {
        let mut sync = ViewportSync::default();
        sync.pan(5.0, -3.0);
        sync.pan(1.0, 1.0);
        for pane in [Pane::Original, Pane::Modified] {
            let state = sync.state(pane);
            assert!(close(state.translate_x, 6.0));
            assert!(close(state.translate_y, -2.0));
            assert!(close(state.scale, 1.0));
        }
    }

    #[test]
    fn test_scale_never_below_minimum() {
        let mut sync = ViewportSync::default();
        for _ in 0..200 {
            sync.wheel_zoom(Pane::Original, 50.0, 50.0, ZoomDirection::Out);
            assert!(sync.state(Pane::Original).scale >= 0.1);
        }
        assert!(close(sync.state(Pane::Modified).scale, 0.1));

        for _ in 0..200 {
            sync.step_zoom(ZoomDirection::Out);
        }
        assert!(close(sync.state(Pane::Original).scale, 0.1));
    }

    #[test]
    fn test_clamped_zoom_does_not_drift() {
        let mut sync = ViewportSync::default();
        for _ in 0..100 {
            sync.wheel_zoom(Pane::Original, 50.0, 50.0, ZoomDirection::Out);
        }
        let settled = sync.state(Pane::Original);
        sync.wheel_zoom(Pane::Original, 50.0, 50.0, ZoomDirection::Out);
        let state = sync.state(Pane::Original);
        assert!(close(state.scale, settled.scale));
        assert!(close(state.translate_x, settled.translate_x));
        assert!(close(state.translate_y, settled.translate_y));
    }

    #[test]
    fn test_step_zoom_keeps_translate() {
        let mut sync = ViewportSync::default();
        sync.pan(10.0, 20.0);
        sync.step_zoom(ZoomDirection::In);
        let state = sync.state(Pane::Original);
        assert!(close(state.scale, 1.2));
        assert!(close(state.translate_x, 10.0));
        assert!(close(state.translate_y, 20.0));
    }

    #[test]
    fn test_css_transform() {
        let state = ViewportState {
            scale: 1.5,
            translate_x: -10.0,
            translate_y: 2.5,
        };
        assert_eq!(state.css_transform(), "translate(-10px, 2.5px) scale(1.5)");
    }

    #[test]
    fn test_parse_pane_and_direction() {
        assert_eq!("original".parse::<Pane>().unwrap(), Pane::Original);
        assert_eq!("m".parse::<Pane>().unwrap(), Pane::Modified);
        assert!("left".parse::<Pane>().is_err());
        assert_eq!("in".parse::<ZoomDirection>().unwrap(), ZoomDirection::In);
        assert_eq!("-".parse::<ZoomDirection>().unwrap(), ZoomDirection::Out);
        assert!("sideways".parse::<ZoomDirection>().is_err());
    }
}
