//! Headless session loop.
//!
//! Demonstrates: build config → Session → drag the brush → frame →
//! switch preset → pause → reset.

use turing_bench::reference_profile;
use turing_core::{Preset, Species};
use turing_engine::Session;
use turing_stepper::Execution;

fn mean_b(session: &Session) -> f32 {
    let b = session.simulation().grid().field(Species::B);
    b.iter().sum::<f32>() / b.len() as f32
}

fn main() {
    println!("=== Turing Headless Session ===\n");

    let config = reference_profile(Execution::Auto);
    let stride = config.width as usize * 4;
    let mut pixels = vec![0u8; stride * config.height as usize];
    let mut session = Session::new(config).unwrap();

    println!("Phase 1: 200 frames, dragging across the canvas");
    for frame in 0..200i32 {
        if frame < 60 {
            session.inject(200 + frame * 5, 150 + frame * 3);
        }
        let metrics = session.frame(&mut pixels, stride).unwrap();
        if frame % 50 == 0 || frame == 199 {
            let step_us = metrics.step.as_ref().map_or(0, |s| s.total_us);
            println!(
                "  frame {:>3}: mean_b={:>8.5}, step={:>6}μs, render={:>6}μs",
                metrics.frame,
                mean_b(&session),
                step_us,
                metrics.render_us,
            );
        }
    }

    println!("\nPhase 2: switch to {} and run 100 frames", Preset::Mitosis);
    session.apply_preset(Preset::Mitosis);
    for _ in 0..100 {
        session.frame(&mut pixels, stride).unwrap();
    }
    println!("  mean_b={:.5}", mean_b(&session));

    println!("\nPhase 3: paused frames keep the field fixed");
    session.pause();
    let before = mean_b(&session);
    for _ in 0..10 {
        session.frame(&mut pixels, stride).unwrap();
    }
    println!("  mean_b before={before:.5}, after={:.5}", mean_b(&session));

    session.reset();
    session.resume();
    println!(
        "\nReset after {} frames: mean_b={:.5}",
        session.frames(),
        mean_b(&session)
    );
}
