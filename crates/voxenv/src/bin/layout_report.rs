//! # Layout Report
//!
//! Builds an environment and prints what the renderer and the physics
//! engine would receive.
//!
//! Usage: `layout_report [config.toml]`
//!
//! Without a path the default 5x4x4 level with one agent is used.

use std::time::Instant;

use voxenv::core::VoxelState;
use voxenv::{Env, EnvConfig};

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match EnvConfig::from_toml_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {e}");
                std::process::exit(2);
            }
        },
        None => EnvConfig::default(),
    };

    let build_start = Instant::now();
    let env = match Env::new(config) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    let build_time = build_start.elapsed();

    let grid = env.grid();
    let count = |state: VoxelState| env.primitives().iter().filter(|p| p.state == state).count();
    let batches = env.instance_batches();
    let exit = env.exit_pad_coords();

    println!();
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                        LAYOUT REPORT                             ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();
    println!("┌─ LEVEL ──────────────────────────────────────────────────────────┐");
    println!("│ Extent:             {}", grid.extent());
    println!("│ Agents:             {}", env.config().num_agents);
    println!("│ Floor cells:        {}", grid.count_where(|s| *s == VoxelState::Floor));
    println!("│ Wall cells:         {}", grid.count_where(|s| *s == VoxelState::Wall));
    println!("│ Walkable cells:     {}", env.walkable_cells().count());
    println!("│ Build time:         {:.3} ms", build_time.as_secs_f64() * 1000.0);
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ PRIMITIVES ─────────────────────────────────────────────────────┐");
    println!("│ Floor boxes:        {}", count(VoxelState::Floor));
    println!("│ Wall boxes:         {}", count(VoxelState::Wall));
    for prim in env.primitives() {
        println!(
            "│   {:<6} {} .. {}",
            prim.state.name(),
            prim.bounds.min,
            prim.bounds.max
        );
    }
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ DRAW CALLS ─────────────────────────────────────────────────────┐");
    for batch in &batches {
        let [x, y, z] = batch.size;
        println!(
            "│ {x}x{y}x{z}: {} instances, {} bytes",
            batch.instance_count(),
            batch.as_bytes().len()
        );
    }
    println!("│ Collision volumes:  {}", env.collision_volumes().len());
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ EXIT ───────────────────────────────────────────────────────────┐");
    println!("│ Pad:                {} .. {}", exit.min, exit.max);
    println!("│ Cells:              {}", exit.cell_count());
    println!("│ Placed at:          {:?}", env.exit_instance().translation);
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();
    println!("✅ LAYOUT OK");
}
