/// Terminal frontend for the wireframe scenes
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use linegen_core::{DropScene, PinholeCamera, ShapeScene};

pub mod config;
pub mod renderer;

pub use renderer::LineRasterizer;

// demo spin per frame, in degrees
const SPIN_X: f32 = 0.6;
const SPIN_Y: f32 = 0.9;

/// Scene driven by the frame loop
pub enum Scene {
    Shape(ShapeScene),
    Drop(DropScene),
}

impl Scene {
    fn frame(&mut self, camera: &PinholeCamera, sink: &mut LineRasterizer, dt: f32, now: Instant) {
        match self {
            Scene::Shape(shape) => {
                shape.orientation.spin(SPIN_X, SPIN_Y, 0.0);
                shape.frame(camera, sink);
            }
            Scene::Drop(drop) => drop.frame(camera, sink, dt, now),
        }
    }
}

/// Main application struct for the terminal renderer
pub struct TerminalApp {
    scene: Scene,
    camera: PinholeCamera,
    renderer: LineRasterizer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene, camera: PinholeCamera, zoom: f32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            scene,
            camera,
            renderer: LineRasterizer::new(width as usize, height as usize, zoom),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target
        let mut last_update = Instant::now();

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Advance and render the scene with the real elapsed time
            let now = Instant::now();
            let dt = (now - last_update).as_secs_f32();
            last_update = now;
            self.render(dt, now)?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                    return Ok(());
                }
                _ => {}
            }

            // Rotation controls only apply to the single-shape scene
            if let Scene::Shape(shape) = &mut self.scene {
                match code {
                    KeyCode::Char('w') | KeyCode::Up => shape.orientation.spin(6.0, 0.0, 0.0),
                    KeyCode::Char('s') | KeyCode::Down => shape.orientation.spin(-6.0, 0.0, 0.0),
                    KeyCode::Char('a') | KeyCode::Left => shape.orientation.spin(0.0, -6.0, 0.0),
                    KeyCode::Char('d') | KeyCode::Right => shape.orientation.spin(0.0, 6.0, 0.0),
                    KeyCode::Char('e') => shape.orientation.spin(0.0, 0.0, 6.0),
                    KeyCode::Char('r') => shape.orientation.spin(0.0, 0.0, -6.0),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn render(&mut self, dt: f32, now: Instant) -> io::Result<()> {
        self.renderer.clear();
        self.scene.frame(&self.camera, &mut self.renderer, dt, now);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let status = match &self.scene {
            Scene::Shape(_) => format!(
                "LineGen | FPS: {:.1} | Controls: WASD/Arrows=Rotate E/R=Roll Q=Quit",
                self.fps
            ),
            Scene::Drop(drop) => format!(
                "LineGen | FPS: {:.1} | y: {:+.2} v: {:+.2}{} | Q=Quit",
                self.fps,
                drop.position().y,
                drop.velocity(),
                if drop.in_contact() { " | contact" } else { "" }
            ),
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
