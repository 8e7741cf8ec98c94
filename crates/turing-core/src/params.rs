//! Gray-Scott reaction parameters.
//!
//! Parameters travel with every step call rather than living inside the
//! grid, so a driver can change them between frames (e.g. from a live
//! slider) without rebuilding anything.

use std::fmt;
use std::ops::RangeInclusive;

/// Feed/kill band in which the explicit update stays visually well-behaved.
///
/// Values outside the band are legal; the per-step clamp keeps every cell
/// bounded, but patterns tend to die out or saturate.
pub const STABLE_BAND: RangeInclusive<f32> = 0.01..=0.1;

/// The four scalars of the Gray-Scott model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReactionParams {
    /// Rate at which `A` is replenished towards 1.
    pub feed: f32,
    /// Rate at which `B` is removed.
    pub kill: f32,
    /// Diffusion rate of `A`.
    pub d_a: f32,
    /// Diffusion rate of `B`.
    pub d_b: f32,
}

impl ReactionParams {
    /// Default feed rate.
    pub const DEFAULT_FEED: f32 = 0.055;
    /// Default kill rate.
    pub const DEFAULT_KILL: f32 = 0.062;
    /// Default diffusion rate of `A`.
    pub const DEFAULT_D_A: f32 = 1.0;
    /// Default diffusion rate of `B`.
    pub const DEFAULT_D_B: f32 = 0.5;

    /// Create a parameter set from explicit values.
    pub fn new(feed: f32, kill: f32, d_a: f32, d_b: f32) -> Self {
        Self {
            feed,
            kill,
            d_a,
            d_b,
        }
    }

    /// Replace the feed rate.
    pub fn with_feed(mut self, feed: f32) -> Self {
        self.feed = feed;
        self
    }

    /// Replace the kill rate.
    pub fn with_kill(mut self, kill: f32) -> Self {
        self.kill = kill;
        self
    }

    /// Replace both diffusion rates.
    pub fn with_diffusion(mut self, d_a: f32, d_b: f32) -> Self {
        self.d_a = d_a;
        self.d_b = d_b;
        self
    }

    /// Whether feed and kill both lie inside [`STABLE_BAND`].
    pub fn is_in_stable_band(&self) -> bool {
        STABLE_BAND.contains(&self.feed) && STABLE_BAND.contains(&self.kill)
    }

    /// Whether every parameter is a finite number.
    pub fn is_finite(&self) -> bool {
        self.feed.is_finite()
            && self.kill.is_finite()
            && self.d_a.is_finite()
            && self.d_b.is_finite()
    }
}

impl Default for ReactionParams {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_FEED,
            Self::DEFAULT_KILL,
            Self::DEFAULT_D_A,
            Self::DEFAULT_D_B,
        )
    }
}

impl From<Preset> for ReactionParams {
    fn from(preset: Preset) -> Self {
        preset.params()
    }
}

/// Named feed/kill pairs that produce recognisable pattern families.
///
/// Diffusion rates are left at their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Preset {
    /// The slider defaults (`feed = 0.055`, `kill = 0.062`).
    Default,
    /// Dividing, cell-like blobs.
    Mitosis,
    /// Branching coral growth.
    Coral,
    /// Labyrinth stripes.
    Maze,
    /// Stable isolated spots.
    Spots,
    /// Long wandering worms.
    Worms,
    /// Travelling solitons.
    Solitons,
    /// Turbulent, never-settling patterns.
    Chaos,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 8] = [
        Preset::Default,
        Preset::Mitosis,
        Preset::Coral,
        Preset::Maze,
        Preset::Spots,
        Preset::Worms,
        Preset::Solitons,
        Preset::Chaos,
    ];

    /// `(feed, kill)` for this preset.
    pub fn feed_kill(self) -> (f32, f32) {
        match self {
            Preset::Default => (ReactionParams::DEFAULT_FEED, ReactionParams::DEFAULT_KILL),
            Preset::Mitosis => (0.028, 0.062),
            Preset::Coral => (0.037, 0.060),
            Preset::Maze => (0.029, 0.057),
            Preset::Spots => (0.035, 0.065),
            Preset::Worms => (0.078, 0.061),
            Preset::Solitons => (0.030, 0.062),
            Preset::Chaos => (0.026, 0.051),
        }
    }

    /// Full parameter set with default diffusion rates.
    pub fn params(self) -> ReactionParams {
        let (feed, kill) = self.feed_kill();
        ReactionParams::default().with_feed(feed).with_kill(kill)
    }

    /// Lower-case identifier, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Mitosis => "mitosis",
            Preset::Coral => "coral",
            Preset::Maze => "maze",
            Preset::Spots => "spots",
            Preset::Worms => "worms",
            Preset::Solitons => "solitons",
            Preset::Chaos => "chaos",
        }
    }

    /// Look a preset up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Preset> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_slider_positions() {
        let p = ReactionParams::default();
        assert_eq!(p.feed, 0.055);
        assert_eq!(p.kill, 0.062);
        assert_eq!(p.d_a, 1.0);
        assert_eq!(p.d_b, 0.5);
        assert!(p.is_in_stable_band());
    }

    #[test]
    fn every_preset_is_in_stable_band() {
        for preset in Preset::ALL {
            assert!(preset.params().is_in_stable_band(), "{preset} left the band");
        }
    }

    #[test]
    fn preset_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(Preset::from_name("plaid"), None);
    }

    #[test]
    fn out_of_band_is_detected() {
        assert!(!ReactionParams::default().with_feed(0.2).is_in_stable_band());
        assert!(!ReactionParams::default().with_kill(0.0).is_in_stable_band());
    }

    #[test]
    fn non_finite_is_detected() {
        assert!(ReactionParams::default().is_finite());
        assert!(!ReactionParams::default().with_feed(f32::NAN).is_finite());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn params_deserialize_with_defaults() {
        let p: ReactionParams = serde_json::from_str(r#"{"feed": 0.03}"#).unwrap();
        assert_eq!(p.feed, 0.03);
        assert_eq!(p.kill, ReactionParams::DEFAULT_KILL);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn preset_serializes_snake_case() {
        let s = serde_json::to_string(&Preset::Solitons).unwrap();
        assert_eq!(s, "\"solitons\"");
    }
}
