//! Surface configuration files.
//!
//! A config is plain JSON:
//!
//! ```json
//! {
//!   "width": 320,
//!   "height": 200,
//!   "pen": { "shape": "square", "size": 2 },
//!   "blend": "alpha",
//!   "palette": ["#000", "red", [0, 128, 255]],
//!   "color": 2,
//!   "noise": 12.0,
//!   "seed": 7
//! }
//! ```
//!
//! Every field is optional. `color` accepts any color form, palette indices
//! included (resolved against `palette` when the surface is built).

use std::fs;
use std::path::Path;
use std::rc::Rc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::blend::BlendLaw;
use crate::color::{Color, ColorInput};
use crate::display::Surface;
use crate::error::{ConfigError, DrawError};
use crate::noise::Noise;
use crate::palette::Palette;
use crate::pen::Pen;
use crate::raster::{PixelRenderer, ShapeRenderer};
use crate::util::Rng;

pub const DEFAULT_WIDTH: u32 = 320;
pub const DEFAULT_HEIGHT: u32 = 200;

/// Which renderer a surface dispatches its shapes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Pixel,
    /// Anti-aliased shapes; the host supplies the renderer
    Smooth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub mode: RenderMode,
    pub pen: Pen,
    pub blend: BlendLaw,
    pub color: ColorInput,
    pub palette: Palette,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise: Option<Noise>,
    /// Fixed noise seed; omitted means clock-seeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub auto_render: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode: RenderMode::Pixel,
            pen: Pen::Point,
            blend: BlendLaw::Normal,
            color: Color::WHITE.into(),
            palette: Palette::new(),
            noise: None,
            seed: None,
            auto_render: true,
        }
    }
}

impl SurfaceConfig {
    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        info!("saved surface config to {}", path.as_ref().display());
        Ok(())
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&json)?;
        info!("loaded surface config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Build a pixel-mode surface. Fails for smooth mode, which needs
    /// [`build_with`](Self::build_with).
    pub fn build(&self) -> Result<Surface, ConfigError> {
        self.build_with(None)
    }

    /// Build a surface, using `smooth` as the renderer when the config asks
    /// for smooth mode
    pub fn build_with(
        &self,
        smooth: Option<Rc<dyn ShapeRenderer>>,
    ) -> Result<Surface, ConfigError> {
        let renderer: Rc<dyn ShapeRenderer> = match (self.mode, smooth) {
            (RenderMode::Pixel, _) => Rc::new(PixelRenderer),
            (RenderMode::Smooth, Some(renderer)) => renderer,
            (RenderMode::Smooth, None) => {
                return Err(DrawError::invalid_parameter(
                    "configure",
                    "smooth mode needs a host-supplied renderer",
                )
                .into());
            },
        };

        let mut surface = Surface::with_renderer(self.width, self.height, renderer);
        surface.set_palette(self.palette.clone());
        surface.set_color(&self.color)?;
        surface.set_pen(self.pen);
        surface.set_blend(self.blend);
        surface.set_noise(self.noise);
        surface.set_auto_render(self.auto_render);
        if let Some(seed) = self.seed {
            surface.set_random_source(Box::new(Rng::new(seed)));
        }
        Ok(surface)
    }
}
