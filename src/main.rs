/*

    Frustum culling over a JSON scene of bounding boxes.

    Usage: cull <scene>.json [wireframe.json]

    Logs which objects survive the camera frustum and, if a second
    path is given, writes the visible boxes' debug wireframe there
    as a flat JSON array of x y z w floats.

    @date: Oct, 2025

*/

use std::{env, time::Instant};
use tracing::{info, warn, error, debug};

use fury_bounds::json_parser::parse_scene_json;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let (json_path, wireframe_path) = match args.len() {
        1 => {
            warn!("No arguments were provided, setting default scene path...");
            ("./scenes/simple_cull.json".to_string(), None)
        }
        2 => (args[1].clone(), None),
        3 => (args[1].clone(), Some(args[2].clone())),
        _ => {
            error!("Usage: {} <scene>.json [wireframe.json]", args[0]);
            std::process::exit(1);
        }
    };

    // Parse JSON
    info!("Loading scene from {}...", json_path);
    let root = parse_scene_json(&json_path).map_err(|e| {
        error!("Failed to load scene: {}", e);
        Box::<dyn std::error::Error>::from(e)
    })?;
    let mut scene = root.scene;
    scene.setup();
    debug!("Scene is setup successfully.\n {:#?}", scene);
    let scene = scene; // Shadow mutability before culling

    let start = Instant::now();
    let report = scene.cull();
    info!(
        "Culled in {:?}: {} visible {:?}, {} culled {:?}",
        start.elapsed(), report.visible.len(), report.visible, report.culled.len(), report.culled
    );
    match &report.scene_bounds {
        Some(bounds) => info!("Scene bounds: min {} max {} center {}", bounds.min(), bounds.max(), bounds.center()),
        None => warn!("Scene has no geometry"),
    }

    if let Some(path) = wireframe_path {
        let count = report.write_wireframe(&path).map_err(|e| {
            error!("Failed to write wireframe: {}", e);
            Box::<dyn std::error::Error>::from(e)
        })?;
        info!("Wrote {} wireframe vertices to {}", count, path);
    }

    info!("Finished execution.");
    Ok(())
}
