//! One generation of both concentration fields.

use turing_core::Species;

/// The `A` and `B` fields of a single generation, stored row-major.
///
/// Both vectors always have the same length; a `Generation` is only ever
/// created by [`Grid`](crate::Grid), which sizes them from its dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    a: Vec<f32>,
    b: Vec<f32>,
}

impl Generation {
    /// Allocate a generation in the base steady state (A=1, B=0).
    pub(crate) fn base(cell_count: usize) -> Self {
        Self {
            a: vec![Species::A.base_value(); cell_count],
            b: vec![Species::B.base_value(); cell_count],
        }
    }

    /// Reset both fields to the base steady state in place.
    pub(crate) fn fill_base(&mut self) {
        self.a.fill(Species::A.base_value());
        self.b.fill(Species::B.base_value());
    }

    /// Number of cells per field.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Whether the generation holds no cells. Never true for a valid grid.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Read-only view of one species.
    pub fn field(&self, species: Species) -> &[f32] {
        match species {
            Species::A => &self.a,
            Species::B => &self.b,
        }
    }

    /// Mutable view of one species.
    pub fn field_mut(&mut self, species: Species) -> &mut [f32] {
        match species {
            Species::A => &mut self.a,
            Species::B => &mut self.b,
        }
    }

    /// Both fields at once, for kernels that read A and B together.
    pub fn fields(&self) -> (&[f32], &[f32]) {
        (&self.a, &self.b)
    }

    /// Both fields mutably at once (split borrow).
    pub fn fields_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.a, &mut self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_generation_is_steady_state() {
        let g = Generation::base(6);
        assert_eq!(g.len(), 6);
        assert!(g.field(Species::A).iter().all(|&v| v == 1.0));
        assert!(g.field(Species::B).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn fill_base_resets_writes() {
        let mut g = Generation::base(4);
        g.field_mut(Species::B)[2] = 0.7;
        g.field_mut(Species::A)[0] = 0.1;
        g.fill_base();
        assert_eq!(g, Generation::base(4));
    }
}
