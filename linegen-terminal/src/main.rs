/// LineGen Terminal Demo
///
/// Draws one wireframe primitive, or runs the falling-box collision scene.
/// Usage: linegen-terminal [cube|pyramid|column|sphere|cylinder|drop] [--config path]
/// Controls:
///   - WASD / Arrow Keys: Rotate the shape
///   - E/R: Roll rotation
///   - Q/ESC: Quit

use std::env;
use std::io;
use std::path::Path;

use linegen_core::ShapeKind;
use linegen_terminal::config::Config;
use linegen_terminal::{Scene, TerminalApp};

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut scene_name: Option<String> = None;
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("--config expects a path");
                    return usage(&args[0]);
                }
                config_path = Some(args[i + 1].clone());
                i += 2;
            }
            name => {
                scene_name = Some(name.to_string());
                i += 1;
            }
        }
    }

    let config = match config_path {
        Some(path) => Config::load(Path::new(&path)).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, format!("Failed to load config: {}", e))
        })?,
        None => Config::default(),
    };

    let scene = match scene_name.as_deref() {
        None | Some("drop") => Scene::Drop(config.drop_scene()),
        Some("cube") => Scene::Shape(config.shape_scene(ShapeKind::Cube)),
        Some("pyramid") => Scene::Shape(config.shape_scene(ShapeKind::Pyramid)),
        Some("column") => Scene::Shape(config.shape_scene(ShapeKind::RectangularColumn)),
        Some("sphere") => Scene::Shape(config.shape_scene(ShapeKind::Sphere)),
        Some("cylinder") => Scene::Shape(config.shape_scene(ShapeKind::Cylinder)),
        Some(other) => {
            eprintln!("Unknown scene: {}", other);
            return usage(&args[0]);
        }
    };

    let mut app = TerminalApp::new(scene, config.pinhole_camera(), config.camera.zoom)?;
    app.run()
}

fn usage(program: &str) -> io::Result<()> {
    eprintln!(
        "Usage: {} [cube|pyramid|column|sphere|cylinder|drop] [--config path]",
        program
    );
    Err(io::Error::new(io::ErrorKind::InvalidInput, "bad arguments"))
}
