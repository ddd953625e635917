//! # Terrain Report
//!
//! Generates one world and prints what a renderer would receive.
//!
//! ```bash
//! # Built-in defaults
//! terrain_report
//!
//! # From a config file
//! terrain_report world.toml
//! ```

use std::process::ExitCode;

use voxterra_procedural::{World, WorldConfig};

fn main() -> ExitCode {
    let config = match std::env::args_os().nth(1) {
        Some(path) => match WorldConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => WorldConfig::default(),
    };

    let mut world = match World::from_config(&config) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    world.generate();

    println!(
        "world: seed {} | {}x{}x{} | scale {} magnitude {} offset {}",
        config.seed,
        config.width,
        config.height,
        config.width,
        config.options.scale,
        config.options.magnitude,
        config.options.offset
    );

    println!();
    println!("cells by block type:");
    for (block, count) in world.census().iter().filter(|(_, count)| *count > 0) {
        println!("  {:<10} {count:>10}", block.properties().name);
    }

    let visible = world.visible_blocks();
    let solid = world.census().solid();
    let culled = solid - visible.count();
    println!();
    println!("visible instances: {} of {solid} solid ({culled} culled)", visible.count());
    for batch in visible.batches() {
        println!(
            "  {:<10} {:>10}  #{:06x}",
            batch.block.properties().name,
            batch.len(),
            batch.block.properties().color
        );
    }

    ExitCode::SUCCESS
}
