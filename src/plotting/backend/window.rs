//! Shows a chart in a desktop window using SDL2
//!
//! The chart is drawn with the plotters backend into a [`Frame`], uploaded once as a texture,
//! and redrawn on every window event until the window is closed. [`PlotBackend::finalize`]
//! blocks until then.
//!
//! Needs a display. There is no fallback: without one, opening the window fails with
//! [`Error::Sdl`] or [`Error::Window`].
use std::ops::Range;

use plotters::style::RGBAColor;
use sdl2::{
    event::{Event, WindowEvent},
    pixels::PixelFormatEnum,
    render::{TextureValueError, UpdateTextureError},
    video::WindowBuildError,
    IntegerOrSdlError,
};

use crate::{
    plotting::{
        plotters::{self as bitmap, Chart, Frame},
        PlotBackend, PlotOptions,
    },
    value::Value,
};

/// Root for the window backend: where the chart will be shown
#[derive(Debug, Clone, Default)]
pub struct Window {
    title: String,
}
impl Window {
    /// A window with the given title bar text
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Draws the chart into an in-memory frame and shows it in a window
pub struct Backend {
    window: Window,
    size: (u32, u32),
    chart: Chart,
}
impl PlotBackend for Backend {
    type Error = Error;
    type Color = RGBAColor;
    type Root = Window;

    fn next_color(&mut self) -> Self::Color {
        self.chart.next_color()
    }

    fn new_plot<T: Value>(
        root: Self::Root,
        options: &PlotOptions<T>,
        x_range: Range<T>,
        y_range: Range<T>,
    ) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        Ok(Self {
            window: root,
            size: options.size,
            chart: Chart::new(options, x_range, y_range)?,
        })
    }

    fn add_line<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: &str,
        width: u32,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        Ok(self.chart.add_line(data, label, width, color)?)
    }

    fn finalize(self) -> Result<(), Self::Error> {
        let mut frame = Frame::new(self.size);
        {
            let root = frame.root()?;
            self.chart.draw(root.as_ref())?;
        }

        show(&frame, &self.window.title)
    }
}

/// Show a frame in a window and block until the user closes it
///
/// # Errors
/// Returns an error if there is no display, or the window or its texture cannot be created
pub fn show(frame: &Frame, title: &str) -> Result<(), Error> {
    let (width, height) = frame.size();

    let sdl_context = sdl2::init().map_err(Error::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;
    let window = video_subsystem
        .window(title, width, height)
        .position_centered()
        .build()?;

    let mut canvas = window.into_canvas().present_vsync().build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator.create_texture_static(PixelFormatEnum::RGB24, width, height)?;
    texture.update(None, frame.pixels(), frame.pitch())?;

    let mut event_pump = sdl_context.event_pump().map_err(Error::Sdl)?;
    log::info!("Showing '{title}' ({width}x{height}) until the window is closed");
    loop {
        canvas.clear();
        canvas.copy(&texture, None, None).map_err(Error::Sdl)?;
        canvas.present();

        match event_pump.wait_event() {
            Event::Quit { .. }
            | Event::Window {
                win_event: WindowEvent::Close,
                ..
            } => break,
            _ => {}
        }
    }

    log::debug!("Window '{title}' closed");
    Ok(())
}

/// Error occurring while showing a chart in a window
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Drawing the chart failed
    #[error(transparent)]
    Plot(#[from] bitmap::Error),

    /// SDL reported an error, usually because no display is available
    #[error("SDL error: {0}")]
    Sdl(String),

    /// The window could not be opened
    #[error("Could not open window: {0}")]
    Window(#[from] WindowBuildError),

    /// The window has no usable renderer
    #[error("Could not create renderer: {0}")]
    Canvas(#[from] IntegerOrSdlError),

    /// The chart texture could not be created
    #[error("Could not create texture: {0}")]
    Texture(#[from] TextureValueError),

    /// The chart pixels could not be uploaded
    #[error("Could not upload chart: {0}")]
    Upload(#[from] UpdateTextureError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Waveform;

    #[test]
    fn test_new_plot_keeps_title_and_size() {
        let wave = Waveform::<f64>::sample(10).unwrap();
        let options = PlotOptions::comparison();
        let mut plot = Backend::new_plot(
            Window::new("title"),
            &options,
            0.0..std::f64::consts::PI,
            -0.05..1.05,
        )
        .unwrap();
        let color = plot.next_color();
        plot.add_line(&wave.primary_points(), "sin(x)", 2, color)
            .unwrap();

        assert_eq!(plot.window.title, "title");
        assert_eq!(plot.size, (1000, 600));
    }

    #[test]
    fn test_plot_errors_pass_through() {
        let err = Backend::new_plot(
            Window::default(),
            &PlotOptions::<f64>::default(),
            f64::NAN..0.0,
            0.0..1.0,
        )
        .err()
        .unwrap();
        assert!(matches!(err, Error::Plot(bitmap::Error::Range(_))));
    }
}
