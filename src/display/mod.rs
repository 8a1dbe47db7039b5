mod pixel_buffer;
mod scheduler;
mod surface;
#[cfg(feature = "sdl")]
mod window;

pub use pixel_buffer::PixelBuffer;
pub use scheduler::{Presenter, RenderScheduler};
pub use surface::{DrawState, Surface};
#[cfg(feature = "sdl")]
pub use window::{InputEvent, RenderTarget, Window, WindowPresenter};
