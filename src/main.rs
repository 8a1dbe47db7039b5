use log::{error, info};
use retrodraw::display::{InputEvent, RenderTarget, Window};
use retrodraw::{draw, BlendLaw, Color, ColorInput, Noise, Palette, Pen, Surface, SurfaceConfig};
use sdl2::keyboard::Keycode;

const CONFIG_PATH: &str = "retrodraw.json";

/// Parse command line arguments and return (config path, scale, vsync)
fn parse_args() -> (String, u32, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut config = CONFIG_PATH.to_owned();
    let mut scale = 3;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config.clone_from(&args[i + 1]);
                    i += 1;
                }
            },
            "--scale" | "-s" => {
                if i + 1 < args.len() {
                    if let Ok(s) = args[i + 1].parse::<u32>() {
                        scale = s;
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: retrodraw-demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --config PATH, -c PATH  Surface config (default: {CONFIG_PATH})");
                println!("  --scale N, -s N         Window magnification (default: 3)");
                println!("  --no-vsync              Disable VSync");
                println!("  --help                  Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (config, scale, vsync)
}

/// One of every primitive, laid out for a 320x200 surface
fn draw_scene(surface: &mut Surface) -> retrodraw::Result<()> {
    let sky = ColorInput::Index(1);
    let sun = ColorInput::Index(2);
    let grass = ColorInput::Index(3);
    let cloud = ColorInput::from("white");

    draw::rect(surface, 0, 0, 320, 140, Some(&sky))?;
    draw::rect(surface, 0, 140, 320, 60, Some(&grass))?;
    draw::circle(surface, 260, 40, 24, Some(&sun))?;
    draw::arc(surface, 260, 40, 32, 200, 340)?;
    draw::ellipse(surface, 90, 60, 40, 14, Some(&cloud))?;
    draw::ellipse(surface, 130, 50, 28, 10, Some(&cloud))?;

    for step in 0..16 {
        let x = 20 + step * 18;
        draw::line(surface, x, 199, 160, 150)?;
    }
    for step in 0..40 {
        draw::pset(surface, 8 + step * 8, 12 + (step * 37) % 40)?;
    }
    Ok(())
}

fn default_palette() -> Palette {
    Palette::with_colors([
        Color::rgb(40, 60, 140),
        Color::rgb(255, 200, 40),
        Color::rgb(30, 120, 50),
    ])
}

fn next_pen(pen: Pen) -> Pen {
    match pen {
        Pen::Point => Pen::Square(2),
        Pen::Square(_) => Pen::Circle(3),
        Pen::Circle(_) => Pen::Point,
    }
}

fn main() -> Result<(), String> {
    env_logger::init();
    let (config_path, scale, vsync) = parse_args();

    let mut config = SurfaceConfig::load(&config_path).unwrap_or_else(|e| {
        info!("no usable config at {config_path} ({e}), using defaults");
        SurfaceConfig {
            palette: default_palette(),
            ..SurfaceConfig::default()
        }
    });
    let mut surface = config.build().map_err(|e| e.to_string())?;

    let (mut window, texture_creator) = Window::new(
        "retrodraw",
        surface.width(),
        surface.height(),
        scale,
        vsync,
    )?;
    let mut target =
        RenderTarget::with_size(&texture_creator, surface.width(), surface.height())?;

    println!("=== retrodraw ===");
    println!("Controls:");
    println!("  P      - Cycle pen (point, square, circle)");
    println!("  B      - Toggle blend law");
    println!("  N      - Toggle noise");
    println!("  C      - Clear");
    println!("  Space  - Redraw");
    println!("  S      - Save config");
    println!("  Escape - Quit");

    if let Err(e) = draw_scene(&mut surface) {
        error!("scene failed: {e}");
    }

    'main: loop {
        let mut redraw = false;

        for event in window.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::P => {
                        config.pen = next_pen(config.pen);
                        surface.set_pen(config.pen);
                        redraw = true;
                    },
                    Keycode::B => {
                        config.blend = match config.blend {
                            BlendLaw::Normal => BlendLaw::Alpha,
                            BlendLaw::Alpha => BlendLaw::Normal,
                        };
                        surface.set_blend(config.blend);
                        redraw = true;
                    },
                    Keycode::N => {
                        config.noise = match config.noise {
                            Some(_) => None,
                            None => Some(Noise::Shared(40.0)),
                        };
                        surface.set_noise(config.noise);
                        redraw = true;
                    },
                    Keycode::C => surface.clear(),
                    Keycode::Space => redraw = true,
                    Keycode::S => match config.save(&config_path) {
                        Ok(()) => println!("Config saved to {config_path}"),
                        Err(e) => error!("save failed: {e}"),
                    },
                    _ => {},
                },
            }
        }

        if redraw {
            surface.clear();
            if let Err(e) = draw_scene(&mut surface) {
                error!("scene failed: {e}");
            }
        }

        let mut presenter = window.presenter(&mut target);
        if surface.tick(&mut presenter) {
            continue;
        }
        // auto-render off: present on demand
        if surface.is_dirty() && !surface.scheduler().auto_render() {
            surface.render(&mut presenter);
        }
        std::thread::sleep(std::time::Duration::from_millis(16));
    }

    Ok(())
}
