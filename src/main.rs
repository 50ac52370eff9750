use std::error::Error;
use std::time::{Duration, Instant};

use flux::display::{Display, InputEvent, RenderTarget};
use flux::util::FrameTimer;
use flux::{
    import_world, parse_world, Color, Config, Degree, Gradient, GradientBuilder, GradientSampler,
    IndexedBuffer, PaletteTarget, PixelTarget, Point, PointSampler, Poly, PolyRasterizer,
    RayMarcher, WorldWolf,
};
use sdl2::keyboard::Keycode;

/// Shown when no `--world` file is given: a walled room with two pillars
const DEMO_WORLD: &str = "\
1,100,0,0,159,1
2,140,0,98,159,99
3,180,158,0,159,99
4,220,70,30,75,35
5,120,40,60,44,64
";

/// Highlight slot for picked-out sampler points
const HIGHLIGHT: u8 = 255;

const MOVE_STEP: f64 = 2.0;
const TURN_STEP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Poly,
    World,
}

struct Camera {
    x: f64,
    y: f64,
    heading: f64,
}

impl Camera {
    fn walk(&mut self, distance: f64) {
        let radians = Degree(self.heading).to_radians().0;
        self.x = (self.x + radians.cos() * distance).max(0.0);
        self.y = (self.y + radians.sin() * distance).max(0.0);
    }

    fn turn(&mut self, degrees: f64) {
        self.heading = (self.heading + degrees).rem_euclid(360.0);
    }

    fn position(&self) -> Point {
        Point::new(self.x as u32, self.y as u32)
    }
}

fn print_help() {
    let defaults = Config::default();
    println!("Usage: flux [OPTIONS]");
    println!();
    println!("Options:");
    println!(
        "  --width W, -w W       Framebuffer width (default: {})",
        defaults.width
    );
    println!(
        "  --height H, -h H      Framebuffer height (default: {})",
        defaults.height
    );
    println!(
        "  --scale S, -s S       Window pixels per framebuffer pixel (default: {})",
        defaults.scale
    );
    println!("  --world FILE          Load a world file (id,color,x1,y1,x2,y2 per line)");
    println!("  --config FILE         Load settings from a JSON file");
    println!("  --no-vsync            Disable VSync for uncapped framerate");
    println!("  --help                Show this help message");
}

/// Palette layout: 0 black, 1..100 red to blue ramp, 100..255 wall ramp,
/// 255 highlight white. Returns the red to blue ramp.
fn setup_palette(buffer: &mut IndexedBuffer) -> Gradient {
    buffer.set_palette_color(0, Color::BLACK);
    buffer.set_palette_color(1, Color::rgb(63, 0, 0));
    buffer.set_palette_color(2, Color::rgb(0, 63, 0));
    buffer.set_palette_color(HIGHLIGHT, Color::rgb(63, 63, 63));

    let mut builder = GradientBuilder::new(buffer);
    let ramp = builder.create_gradient(Color::rgb(63, 0, 0), Color::rgb(0, 0, 63), 100, 1);
    builder.create_gradient(Color::rgb(60, 56, 40), Color::rgb(10, 12, 20), 255, 100);
    ramp
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run().map_err(|e| {
        log::error!("{}", e);
        e
    })
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }
    let config = Config::from_args(&args)?;
    let (width, height) = (config.width, config.height);

    let (mut display, texture_creator) =
        Display::with_options("flux", width, height, config.scale, config.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut buffer = IndexedBuffer::with_size(width, height);

    let ramp = setup_palette(&mut buffer);
    let gradient_sampler = GradientSampler::new(ramp)?;

    let ramp_poly = Poly::new(vec![
        Point::new(0, 0),
        Point::new(width / 4, height / 4),
        Point::new(width / 8, height / 12),
        Point::new(0, 0),
    ])?;
    let marked_poly = Poly::new(vec![
        Point::new(width / 2, height / 2),
        Point::new(width * 7 / 8, height / 2),
        Point::new(width * 3 / 4, height * 7 / 8),
        Point::new(width / 2, height / 2),
    ])?;
    let point_sampler = PointSampler::new(
        50,
        HIGHLIGHT,
        marked_poly.sampler_points.values().copied().collect(),
    );

    let world = match &config.world {
        Some(path) => import_world(path)?,
        None => {
            let world: WorldWolf = parse_world(DEMO_WORLD)?;
            log::info!("no world file given, using built-in demo ({} objects)", world.len());
            world
        },
    };

    let mut camera = Camera {
        x: 20.0,
        y: 50.0,
        heading: 0.0,
    };
    let mut view = View::Poly;
    let mut timer = FrameTimer::new(60);
    let mut debug = false;
    let mut last_report = Instant::now();

    println!("=== flux ===");
    println!(
        "Resolution: {}x{} at {}x scale, {} objects in world",
        width,
        height,
        config.scale,
        world.len()
    );
    println!("Use --help for command line options.");
    println!("Controls:");
    println!("  Tab        - Toggle polygon / world view");
    println!("  Up/Down    - Move camera forward / back");
    println!("  Left/Right - Turn camera (also A/D)");
    println!("  F          - Toggle frame time logging");
    println!("  Escape     - Quit");

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Tab => {
                        view = match view {
                            View::Poly => View::World,
                            View::World => View::Poly,
                        };
                        log::info!("view: {:?}", view);
                    },
                    Keycode::F => {
                        debug = !debug;
                        timer.clear_window();
                        last_report = Instant::now();
                        log::info!("frame time logging {}", if debug { "on" } else { "off" });
                    },
                    Keycode::Up => camera.walk(MOVE_STEP),
                    Keycode::Down => camera.walk(-MOVE_STEP),
                    Keycode::Left | Keycode::A => camera.turn(-TURN_STEP),
                    Keycode::Right | Keycode::D => camera.turn(TURN_STEP),
                    _ => {},
                },
                InputEvent::KeyUp(_) => {},
            }
        }

        timer.time(|| {
            buffer.fill_back(0);
            match view {
                View::Poly => {
                    let mut polys = PolyRasterizer::new(&mut buffer);
                    polys.draw_poly(&ramp_poly, &gradient_sampler);
                    polys.draw_poly(&marked_poly, &point_sampler);
                },
                View::World => {
                    RayMarcher::with_config(&mut buffer, config.march).render_world(
                        &world,
                        camera.position(),
                        Degree(camera.heading),
                    );
                },
            }
        });

        if debug && last_report.elapsed() >= Duration::from_secs(1) {
            if let Some(stats) = timer.stats() {
                log::info!(
                    "render {:.2}ms avg ({:.0} fps, {:.2} min, {:.2} max) over {} frames, \
                     {:.2}ms overall",
                    stats.avg_ms,
                    stats.fps(),
                    stats.min_ms,
                    stats.max_ms,
                    stats.frames,
                    timer.overall_avg_ms()
                );
            }
            timer.clear_window();
            last_report = Instant::now();
        }

        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
