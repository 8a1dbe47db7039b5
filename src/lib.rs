//! Pixel-accurate software rasterizer for retro-style games.
//!
//! A [`Surface`] owns an RGBA pixel buffer and the current [`DrawState`]
//! (pen, blend law, colors, palette, noise). The commands in [`draw`] turn
//! shapes into pixel writes; every write goes through the pen, the noise
//! jitter and the blend law, in that order, and marks the surface dirty.
//! Dirty surfaces repaint at most once per host [`Surface::tick`].
//!
//! ```
//! use retrodraw::{draw, Color, ColorInput, Palette, Surface};
//!
//! let mut surface = Surface::new(10, 10);
//! surface.set_palette(Palette::with_colors([Color::RED]));
//! draw::rect(&mut surface, 2, 2, 4, 4, Some(&ColorInput::Index(1)))?;
//! assert_eq!(surface.get_pixel_safe(3, 3), Some(Color::RED));
//! # Ok::<(), retrodraw::DrawError>(())
//! ```

pub mod blend;
pub mod color;
pub mod config;
pub mod display;
pub mod draw;
pub mod error;
pub mod noise;
pub mod palette;
pub mod pen;
pub mod raster;
pub mod util;

pub use blend::BlendLaw;
pub use color::{parse_color, Color, ColorInput};
pub use config::{RenderMode, SurfaceConfig};
pub use display::{DrawState, PixelBuffer, Presenter, RenderScheduler, Surface};
pub use error::{ConfigError, DrawError, Result};
pub use noise::Noise;
pub use palette::Palette;
pub use pen::{Pen, PenShape, MAX_PEN_SIZE};
pub use raster::{PixelRenderer, ShapeRenderer};
pub use util::{RandomSource, Rng};
