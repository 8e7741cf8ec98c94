//! The two chemical species of the Gray-Scott model.

use std::fmt;

/// Identifies one of the two concentration fields held by a grid.
///
/// `A` is the substrate that is fed into the system; `B` is the
/// autocatalyst that consumes it. Readout renders `B`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    /// Substrate chemical, `1.0` in the base steady state.
    A,
    /// Catalyst chemical, `0.0` in the base steady state.
    B,
}

impl Species {
    /// Both species, in storage order.
    pub const ALL: [Species; 2] = [Species::A, Species::B];

    /// Concentration of this species in the unseeded steady state.
    pub fn base_value(self) -> f32 {
        match self {
            Species::A => 1.0,
            Species::B => 0.0,
        }
    }

    /// Concentration written into a seeded cell.
    pub fn seeded_value(self) -> f32 {
        match self {
            Species::A => 0.0,
            Species::B => 1.0,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::A => write!(f, "A"),
            Species::B => write!(f, "B"),
        }
    }
}
