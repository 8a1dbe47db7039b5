//! SDL2 window that presents surface frames.

use log::{info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::WindowContext;
use sdl2::EventPump;

use super::{PixelBuffer, Presenter};

pub struct Window {
    canvas: Canvas<sdl2::video::Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
}

/// Streaming texture the frame bytes are uploaded into
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
}

impl Window {
    /// Open a window showing a `width`x`height` surface magnified `scale` times
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
        scale: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let scale = scale.max(1);

        let window = video_subsystem
            .window(title, width * scale, height * scale)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;
        info!("window open: {width}x{height} at {scale}x");

        Ok((
            Self {
                canvas,
                event_pump,
                width,
                height,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Upload `frame` and flip. The frame must match the target's size.
    pub fn present(
        &mut self,
        target: &mut RenderTarget,
        frame: &PixelBuffer,
    ) -> Result<(), String> {
        if (frame.width(), frame.height()) != (target.width, target.height) {
            return Err(format!(
                "frame is {}x{}, render target is {}x{}",
                frame.width(),
                frame.height(),
                target.width,
                target.height
            ));
        }
        target
            .texture
            .update(None, frame.as_bytes(), (frame.width() * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    /// Borrow this window as the repaint hook for [`Surface::tick`](super::Surface::tick)
    pub fn presenter<'w, 'a>(
        &'w mut self,
        target: &'w mut RenderTarget<'a>,
    ) -> WindowPresenter<'w, 'a> {
        WindowPresenter {
            window: self,
            target,
        }
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyDown(k)),
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        // ABGR8888 is R,G,B,A in memory on little-endian hosts
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ABGR8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }
}

/// A window plus its render target, usable as a [`Presenter`]
pub struct WindowPresenter<'w, 'a> {
    window: &'w mut Window,
    target: &'w mut RenderTarget<'a>,
}

impl Presenter for WindowPresenter<'_, '_> {
    fn present(&mut self, frame: &PixelBuffer) {
        if let Err(e) = self.window.present(self.target, frame) {
            warn!("present failed: {e}");
        }
    }
}
