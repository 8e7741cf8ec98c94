//! The prelude is enough for the common paths.

use turing::prelude::*;

#[test]
fn low_level_pieces_compose() {
    let mut grid = Grid::new(20, 20).unwrap();
    grid.initialize();
    let metrics = GrayScott::new(Execution::Serial).step(&mut grid, &Preset::Spots.params(), 5);
    assert_eq!(metrics.iterations, 5);
    assert_eq!(grid.generation(), 5);

    let pixels = turing::render::render_to_vec(&grid);
    assert_eq!(pixels.len(), 20 * 20 * 4);
}

#[test]
fn errors_surface_through_facade() {
    assert!(matches!(
        ReactionDiffusion::new(0, 0),
        Err(ConfigError::ZeroDimension { .. })
    ));
    let sim = ReactionDiffusion::new(4, 4).unwrap();
    assert!(matches!(
        sim.render(&mut [0u8; 8], 16),
        Err(RenderError::BufferTooSmall { .. })
    ));
}
