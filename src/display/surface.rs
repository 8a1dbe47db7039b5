//! Drawing surface: retained pixels, draw state and dirty tracking.

use std::rc::Rc;

use log::{debug, trace};

use super::{PixelBuffer, Presenter, RenderScheduler};
use crate::blend::BlendLaw;
use crate::color::{parse_color, Color, ColorInput};
use crate::error::{DrawError, Result};
use crate::noise::Noise;
use crate::palette::Palette;
use crate::pen::Pen;
use crate::raster::{PixelRenderer, ShapeRenderer};
use crate::util::{RandomSource, Rng};

/// Pen, blend law, colors and noise applied by every drawing command.
///
/// Replaced field by field through the [`Surface`] setters; the rasterizer
/// only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub pen: Pen,
    pub blend: BlendLaw,
    pub color: Color,
    pub palette: Palette,
    pub noise: Option<Noise>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            pen: Pen::Point,
            blend: BlendLaw::Normal,
            color: Color::WHITE,
            palette: Palette::new(),
            noise: None,
        }
    }
}

/// A raster target plus everything needed to draw into it.
///
/// `canvas` holds the last presented frame. Writes go to the `image_data`
/// working copy, pulled lazily from the canvas and pushed back on render.
pub struct Surface {
    canvas: PixelBuffer,
    image_data: Option<PixelBuffer>,
    dirty: bool,
    scheduler: RenderScheduler,
    state: DrawState,
    rng: Box<dyn RandomSource>,
    renderer: Rc<dyn ShapeRenderer>,
}

impl Surface {
    /// Transparent pixel-mode surface with auto-render on
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_renderer(width, height, Rc::new(PixelRenderer))
    }

    /// Surface whose shapes go through a host-supplied renderer (e.g. a smooth one)
    pub fn with_renderer(width: u32, height: u32, renderer: Rc<dyn ShapeRenderer>) -> Self {
        Self {
            canvas: PixelBuffer::with_size(width, height),
            image_data: None,
            dirty: false,
            scheduler: RenderScheduler::default(),
            state: DrawState::default(),
            rng: Box::new(Rng::default()),
            renderer,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn scheduler(&self) -> &RenderScheduler {
        &self.scheduler
    }

    pub(crate) fn renderer(&self) -> Rc<dyn ShapeRenderer> {
        Rc::clone(&self.renderer)
    }

    // ========================================================================
    // Draw State
    // ========================================================================

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn set_state(&mut self, state: DrawState) {
        self.state = state;
    }

    pub fn set_pen(&mut self, pen: Pen) {
        self.state.pen = pen;
    }

    pub fn set_blend(&mut self, blend: BlendLaw) {
        self.state.blend = blend;
    }

    /// Set the foreground color from any color form, palette indices included
    pub fn set_color(&mut self, input: &ColorInput) -> Result<()> {
        self.state.color = self.resolve_draw_color(input, "set_color")?;
        Ok(())
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.state.palette = palette;
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.state.palette
    }

    pub fn set_noise(&mut self, noise: Option<Noise>) {
        self.state.noise = noise;
    }

    /// Replace the jitter source, e.g. with a seeded [`Rng`] for reproducible output
    pub fn set_random_source(&mut self, rng: Box<dyn RandomSource>) {
        self.rng = rng;
    }

    pub fn set_auto_render(&mut self, enabled: bool) {
        self.scheduler.set_auto_render(enabled);
    }

    // ========================================================================
    // Color Resolution
    // ========================================================================

    /// Resolve a color argument for command `op`.
    ///
    /// Integers index the palette and must lie in `[0, len)`; every other
    /// form goes through [`parse_color`].
    pub fn resolve_draw_color(&self, input: &ColorInput, op: &'static str) -> Result<Color> {
        match *input {
            ColorInput::Index(index) => usize::try_from(index)
                .ok()
                .and_then(|i| self.state.palette.get(i))
                .ok_or(DrawError::ColorOutOfRange {
                    op,
                    index,
                    len: self.state.palette.len(),
                }),
            _ => parse_color(input).map_err(|e| e.with_op(op)),
        }
    }

    // ========================================================================
    // Pixel Primitives
    // ========================================================================

    /// Working copy of the raster, pulled from the canvas on first use
    pub fn image_data(&mut self) -> &mut PixelBuffer {
        let canvas = &self.canvas;
        self.image_data.get_or_insert_with(|| {
            trace!("pulling image data from canvas");
            canvas.clone()
        })
    }

    /// Drop the working copy; the next access pulls from the canvas again
    pub fn reset_image_data(&mut self) {
        self.image_data = None;
    }

    /// Read one pixel, `None` off-surface
    pub fn get_pixel_safe(&self, x: i32, y: i32) -> Option<Color> {
        self.image_data
            .as_ref()
            .unwrap_or(&self.canvas)
            .get_pixel(x, y)
    }

    /// Write one pixel through noise and the blend law. Off-surface writes are dropped.
    pub fn set_pixel_safe(&mut self, x: i32, y: i32, color: Color) {
        if !self.canvas.in_bounds(x, y) {
            return;
        }
        let color = match self.state.noise {
            Some(noise) => noise.apply(color, self.rng.as_mut()),
            None => color,
        };
        let blend = self.state.blend;
        let data = self.image_data();
        if let Some(existing) = data.get_pixel(x, y) {
            data.set_pixel(x, y, blend.apply(existing, color));
        }
        self.mark_dirty();
    }

    /// Stamp the active pen at `(x, y)`
    pub fn plot(&mut self, x: i32, y: i32, color: Color) {
        let pen = self.state.pen;
        pen.for_each_pixel(x, y, |px, py| self.set_pixel_safe(px, py, color));
    }

    // ========================================================================
    // Dirty Tracking
    // ========================================================================

    /// Flag the surface as changed and arm one repaint if auto-render is on
    pub fn mark_dirty(&mut self) {
        if self.dirty {
            return;
        }
        self.dirty = true;
        self.scheduler.schedule();
    }

    /// Drain the tick: fire the armed repaint, if any. Returns whether it fired.
    pub fn tick(&mut self, presenter: &mut dyn Presenter) -> bool {
        if !self.scheduler.take() {
            return false;
        }
        self.render(presenter);
        true
    }

    /// Push the working copy to the canvas and present it. Disarms any pending repaint.
    pub fn render(&mut self, presenter: &mut dyn Presenter) {
        if let Some(data) = &self.image_data {
            self.canvas.copy_from(data);
        }
        presenter.present(&self.canvas);
        self.dirty = false;
        self.scheduler.cancel();
        debug!("surface rendered ({}x{})", self.width(), self.height());
    }

    /// Clear the whole surface to transparent and invalidate the image data cache
    pub fn clear(&mut self) {
        self.canvas.clear(Color::TRANSPARENT);
        self.reset_image_data();
        self.mark_dirty();
    }

    /// Clear a region to transparent. The image data cache stays valid.
    pub fn clear_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.image_data()
            .fill_rect(x, y, width, height, Color::TRANSPARENT);
        self.mark_dirty();
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("dirty", &self.dirty)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
