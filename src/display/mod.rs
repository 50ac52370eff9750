//! SDL2 window that shows an [`IndexedBuffer`], scaled up by an integer factor

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use crate::buffer::IndexedBuffer;
use crate::error::{FluxError, Result};

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    /// Resolved RGBA bytes of the last presented frame
    frame: Vec<u8>,
}

/// Streaming texture at the logical framebuffer size
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
    KeyUp(Keycode),
}

fn sdl_error(e: impl ToString) -> FluxError {
    FluxError::Display(e.to_string())
}

impl Display {
    /// Open a `width * scale` by `height * scale` window.
    /// vsync=true: locked to monitor refresh
    /// vsync=false: uncapped framerate
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        scale: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>)> {
        let sdl_context = sdl2::init().map_err(sdl_error)?;
        let video_subsystem = sdl_context.video().map_err(sdl_error)?;

        let window = video_subsystem
            .window(title, width * scale, height * scale)
            .position_centered()
            .build()
            .map_err(sdl_error)?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(sdl_error)?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(sdl_error)?;

        log::info!(
            "window {}x{} ({}x{} logical, vsync {})",
            width * scale,
            height * scale,
            width,
            height,
            vsync
        );

        Ok((
            Self {
                canvas,
                event_pump,
                frame: Vec::new(),
            },
            texture_creator,
        ))
    }

    /// Resolve the buffer through its palette and show it.
    ///
    /// Fails if any pixel references a palette slot that was never set.
    pub fn present(&mut self, target: &mut RenderTarget, buffer: &IndexedBuffer) -> Result<()> {
        if (buffer.width(), buffer.height()) != (target.width, target.height) {
            return Err(FluxError::Display(format!(
                "buffer is {}x{} but render target is {}x{}",
                buffer.width(),
                buffer.height(),
                target.width,
                target.height
            )));
        }

        buffer.to_rgba(&mut self.frame)?;
        target
            .texture
            .update(None, &self.frame, (target.width * 4) as usize)
            .map_err(sdl_error)?;

        self.canvas.copy(&target.texture, None, None).map_err(sdl_error)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyDown(k)),
                Event::KeyUp {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyUp(k)),
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
    ) -> Result<Self> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(sdl_error)?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }
}
