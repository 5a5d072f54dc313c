//! Plotting backend using the `plotters` crate
//!
//! Everything is coerced to `f64` for plotting purposes.
//!
//! Uses the bitmap backend, either over a PNG file ([`Root::new`]) or over an
//! in-memory [`Frame`] ([`Frame::root`]).
//!
//! sans-serif font is included for use in plots.
//! - Copyright 2003 by Bitstream, Inc. (DejaVu changes are in the public domain)
use std::{ops::Range, path::Path};

use plotters::{coord::Shift, prelude::*};

use crate::{
    plotting::{palette::ColorSource, PlotBackend, PlotOptions},
    value::{CoordExt, Value},
};

const FONT_BYTES: &[u8] = include_bytes!("DejaVuSans.ttf");
const MAX_LBL_WIDTH: usize = 120;

/// Register the built-in font with plotters as `sans-serif`
///
/// [`Backend`] does this before every plot, so text never depends on the fonts installed on the host.
///
/// # Errors
/// Returns an error if the built-in font was corrupted somehow
pub fn register_font() -> Result<(), Error> {
    plotters::style::register_font("sans-serif", FontStyle::Normal, FONT_BYTES)
        .map_err(|_| Error::Font)
}

/// A drawing area root for plotters
pub struct Root<'a>(DrawingArea<BitMapBackend<'a>, Shift>);
impl<'a> AsRef<DrawingArea<BitMapBackend<'a>, Shift>> for Root<'a> {
    fn as_ref(&self) -> &DrawingArea<BitMapBackend<'a>, Shift> {
        &self.0
    }
}
impl<'a> Root<'a> {
    /// Create a new drawing area root for plotters
    ///
    /// Will create a PNG file at the given path with the given size once the plot is finalized
    ///
    /// # Errors
    /// Returns an error if the drawing area cannot be cleared
    pub fn new(path: &'a Path, size: (u32, u32)) -> Result<Self, Error> {
        Self::blank(BitMapBackend::new(path, size))
    }

    /// Create a drawing area root over a raw RGB buffer, 3 bytes per pixel, row-major
    ///
    /// # Errors
    /// Returns an error if the buffer is too small for `size`, or cannot be cleared
    pub fn from_buffer(buffer: &'a mut [u8], size: (u32, u32)) -> Result<Self, Error> {
        let needed = Frame::byte_len(size);
        if buffer.len() < needed {
            return Err(Error::BufferSize {
                needed,
                actual: buffer.len(),
            });
        }

        Self::blank(BitMapBackend::with_buffer(buffer, size))
    }

    fn blank(backend: BitMapBackend<'a>) -> Result<Self, Error> {
        let root = IntoDrawingArea::into_drawing_area(backend);
        root.fill(&WHITE)?;
        Ok(Self(root))
    }
}

/// An owned RGB pixel buffer a chart can be drawn into
///
/// ```rust
/// use sinecmp::plotting::plotters::Frame;
///
/// let frame = Frame::new((4, 2));
/// assert_eq!(frame.pixels().len(), 4 * 2 * 3);
/// assert_eq!(frame.pitch(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<u8>,
    size: (u32, u32),
}
impl Frame {
    /// Bytes used for one pixel
    pub const BYTES_PER_PIXEL: usize = 3;

    /// A black frame of the given size in pixels
    #[must_use]
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            pixels: vec![0; Self::byte_len(size)],
            size,
        }
    }

    /// Drawing area root over this frame's pixels
    ///
    /// # Errors
    /// Returns an error if the frame cannot be cleared
    pub fn root(&mut self) -> Result<Root<'_>, Error> {
        Root::from_buffer(&mut self.pixels, self.size)
    }

    /// Width and height in pixels
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Raw RGB bytes, row-major
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes in one row
    #[must_use]
    pub fn pitch(&self) -> usize {
        self.size.0 as usize * Self::BYTES_PER_PIXEL
    }

    /// Colour of the pixel at `(x, y)`, if it is inside the frame
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.size.0 || y >= self.size.1 {
            return None;
        }

        let i = y as usize * self.pitch() + x as usize * Self::BYTES_PER_PIXEL;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    fn byte_len((w, h): (u32, u32)) -> usize {
        w as usize * h as usize * Self::BYTES_PER_PIXEL
    }
}

/// A line waiting to be drawn
struct PendingLine {
    data: Vec<(f64, f64)>,
    label: String,
    style: ShapeStyle,
}

/// Everything needed to draw a chart, independent of where it is drawn
///
/// Series are collected as they are added and drawn in [`Chart::draw`], after the mesh,
/// so the grid sits behind the lines.
pub(crate) struct Chart {
    palette: ColorSource<RGBAColor>,
    lines: Vec<PendingLine>,

    title: String,
    x_label: Option<String>,
    y_label: Option<String>,
    x_range: Range<f64>,
    y_range: Range<f64>,

    hide_legend: bool,
    show_grid: bool,
}
impl Chart {
    pub(crate) fn new<T: Value>(
        options: &PlotOptions<T>,
        x_range: Range<T>,
        y_range: Range<T>,
    ) -> Result<Self, Error> {
        //
        // T(Range) -> f64(Range)
        let x_range = axis(cast(x_range.start)?, cast(x_range.end)?)?;
        let y_range = axis(cast(y_range.start)?, cast(y_range.end)?)?;

        let palette = ColorSource::new(vec![
            BLUE.into(),
            RGBColor(255, 165, 0).into(), // Orange
            GREEN.into(),
            RED.into(),
            MAGENTA.into(),
            CYAN.into(),
            BLACK.into(),
            RGBColor(128, 0, 128).into(), // Purple
        ]);

        Ok(Self {
            palette,
            lines: Vec::new(),

            title: options.title.clone(),
            x_label: options.x_label.clone(),
            y_label: options.y_label.clone(),
            x_range,
            y_range,

            hide_legend: options.hide_legend,
            show_grid: options.show_grid,
        })
    }

    pub(crate) fn next_color(&mut self) -> RGBAColor {
        self.palette.next_color().unwrap_or_else(|| BLACK.into())
    }

    pub(crate) fn add_line<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: &str,
        width: u32,
        color: RGBAColor,
    ) -> Result<(), Error> {
        let data = data.as_f64().map_err(|_| Error::Cast)?;
        let (lo, hi) = (self.y_range.start, self.y_range.end);
        let data = data
            .into_iter()
            .map(|(x, y)| (x, y.max(lo).min(hi)))
            .collect();

        //
        // Shorten label and add [...] if too long
        let label = if label.chars().count() > MAX_LBL_WIDTH {
            let mut s: String = label.chars().take(MAX_LBL_WIDTH - 3).collect();
            s.push_str("...");
            s
        } else {
            label.to_string()
        };

        self.lines.push(PendingLine {
            data,
            label,
            style: ShapeStyle::from(color).stroke_width(width),
        });
        Ok(())
    }

    pub(crate) fn draw(self, root: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<(), Error> {
        register_font()?;

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60);

        if !self.title.is_empty() {
            builder.caption(&self.title, (FontFamily::SansSerif, 24).into_font());
        }

        let mut chart = builder.build_cartesian_2d(self.x_range.clone(), self.y_range.clone())?;

        //
        // Mesh and axes
        let tick_format = |v: &f64| format!("{v:.2}");
        let mut mesh = chart.configure_mesh();
        mesh.label_style((FontFamily::SansSerif, 14))
            .x_label_formatter(&tick_format)
            .y_label_formatter(&tick_format);

        if !self.show_grid {
            mesh.disable_mesh();
        }

        if let Some(x_label) = &self.x_label {
            mesh.x_desc(x_label);
        }

        if let Some(y_label) = &self.y_label {
            mesh.y_desc(y_label);
        }

        mesh.draw()?;

        //
        // Series
        for line in self.lines {
            let style = line.style;
            chart
                .draw_series(LineSeries::new(line.data, style))?
                .label(line.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }

        if !self.hide_legend {
            //
            // Legend
            chart
                .configure_series_labels()
                .label_font((FontFamily::SansSerif, 14))
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .position(SeriesLabelPosition::UpperRight)
                .draw()?;
        }

        root.present()?;
        Ok(())
    }
}

/// Plotters backend for plotting
///
/// Draws onto a [`Root`], which is either a PNG file or a [`Frame`].
pub struct Backend<'root> {
    root: Root<'root>,
    chart: Chart,
}
impl<'root> PlotBackend for Backend<'root> {
    type Error = Error;
    type Color = RGBAColor;
    type Root = Root<'root>;

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
        let chart = Chart::new(options, x_range, y_range)?;
        Ok(Self { root, chart })
    }

    fn add_line<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: &str,
        width: u32,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.chart.add_line(data, label, width, color)
    }

    fn finalize(self) -> Result<(), Self::Error> {
        self.chart.draw(self.root.as_ref())
    }
}

fn cast<T: Value>(value: T) -> Result<f64, Error> {
    num_traits::cast(value).ok_or(Error::Cast)
}

/// Finite axis bounds in ascending order
fn axis(a: f64, b: f64) -> Result<Range<f64>, Error> {
    if !a.is_finite() || !b.is_finite() {
        return Err(Error::Range(a..b));
    }

    Ok(if a <= b { a..b } else { b..a })
}

/// Error occurring during plotting
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error drawing the plot
    #[error("Error drawing plot: {0}")]
    Draw(#[from] DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>),

    /// Error casting a value
    #[error("A value could not be represented as f64")]
    Cast,

    /// The built-in font could not be loaded
    #[error("The built-in font could not be loaded")]
    Font,

    /// An axis bound was NaN or infinite
    #[error("Axis range {0:?} is not finite")]
    Range(Range<f64>),

    /// A pixel buffer was too small for the requested size
    #[error("Pixel buffer holds {actual} bytes, {needed} are needed")]
    BufferSize {
        /// Bytes required for the requested size
        needed: usize,

        /// Bytes actually available
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render_comparison, Waveform};

    const WHITE_PX: [u8; 3] = [255, 255, 255];
    const BLUE_PX: [u8; 3] = [0, 0, 255];
    const ORANGE_PX: [u8; 3] = [255, 165, 0];

    fn render(options: PlotOptions<f64>) -> Frame {
        let wave = Waveform::<f64>::sample(100).unwrap();
        let mut frame = Frame::new(options.size);
        let root = frame.root().unwrap();
        render_comparison::<Backend, _>(root, &wave, options).unwrap();
        frame
    }

    fn count(frame: &Frame, pred: impl Fn([u8; 3]) -> bool) -> usize {
        frame
            .pixels()
            .chunks_exact(Frame::BYTES_PER_PIXEL)
            .filter(|px| pred([px[0], px[1], px[2]]))
            .count()
    }

    #[test]
    fn test_frame_geometry() {
        let frame = Frame::new((1000, 600));
        assert_eq!(frame.size(), (1000, 600));
        assert_eq!(frame.pixels().len(), 1000 * 600 * 3);
        assert_eq!(frame.pixel(999, 599), Some([0, 0, 0]));
        assert_eq!(frame.pixel(1000, 0), None);
        assert_eq!(frame.pixel(0, 600), None);
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buffer = vec![0; 10];
        let err = Root::from_buffer(&mut buffer, (4, 4)).err().unwrap();
        assert!(matches!(
            err,
            Error::BufferSize {
                needed: 48,
                actual: 10
            }
        ));
    }

    #[test]
    fn test_comparison_draws_both_series() {
        let frame = render(PlotOptions::comparison());
        assert_eq!(frame.size(), (1000, 600));

        // Margin stays background, lines use the first two palette colours
        assert_eq!(frame.pixel(0, 0), Some(WHITE_PX));
        assert_eq!(frame.pixel(999, 599), Some(WHITE_PX));
        assert!(count(&frame, |px| px == BLUE_PX) > 100, "sin(x) line missing");
        assert!(count(&frame, |px| px == ORANGE_PX) > 100, "sin(x)^4 line missing");
    }

    #[test]
    fn test_grid_and_legend_are_drawn() {
        let full = render(PlotOptions::comparison());
        let no_grid = render(PlotOptions {
            show_grid: false,
            ..PlotOptions::comparison()
        });
        let no_legend = render(PlotOptions {
            hide_legend: true,
            ..PlotOptions::comparison()
        });

        let ink = |f: &Frame| count(f, |px| px != WHITE_PX);
        assert!(ink(&full) > ink(&no_grid), "grid should add pixels");
        assert_ne!(full, no_legend, "legend should change the picture");
    }

    #[test]
    fn test_axis_labels_are_drawn() {
        let labelled = render(PlotOptions::comparison());
        let bare = render(PlotOptions {
            x_label: None,
            y_label: None,
            ..PlotOptions::comparison()
        });
        assert_ne!(labelled, bare);
    }

    #[test]
    fn test_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison.png");

        let wave = Waveform::<f64>::sample(50).unwrap();
        let options = PlotOptions::comparison();
        let root = Root::new(&path, options.size).unwrap();
        render_comparison::<Backend, _>(root, &wave, options).unwrap();

        let decoder = png::Decoder::new(std::fs::File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 1000);
        assert_eq!(reader.info().height, 600);
    }

    #[test]
    fn test_inverted_range_is_reordered() {
        let mut frame = Frame::new((200, 120));
        let options = PlotOptions::<f64> {
            size: (200, 120),
            ..Default::default()
        };

        let root = frame.root().unwrap();
        let mut plot = Backend::new_plot(root, &options, 0.0..1.0, 1.0..-1.0).unwrap();
        assert_eq!(plot.chart.y_range, -1.0..1.0);

        let color = plot.next_color();
        plot.add_line(&[(0.0, 0.5), (1.0, 3.0)], "line", 1, color)
            .unwrap();
        assert_eq!(plot.chart.lines[0].data, vec![(0.0, 0.5), (1.0, 1.0)]);
        plot.finalize().unwrap();
    }

    #[test]
    fn test_non_finite_range_fails() {
        let mut frame = Frame::new((200, 120));
        let root = frame.root().unwrap();
        let err = Backend::new_plot(root, &PlotOptions::default(), 0.0..1.0, f64::NAN..1.0)
            .err()
            .unwrap();
        assert!(matches!(err, Error::Range(_)));
    }

    #[test]
    fn test_long_label_truncated() {
        let mut chart = Chart::new(&PlotOptions::<f64>::default(), 0.0..1.0, 0.0..1.0).unwrap();
        let color = chart.next_color();
        chart
            .add_line(&[(0.0, 0.0)], &"x".repeat(200), 1, color)
            .unwrap();
        assert_eq!(chart.lines[0].label.len(), MAX_LBL_WIDTH);
        assert!(chart.lines[0].label.ends_with("..."));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::Cast.to_string(), "A value could not be represented as f64");
        assert_eq!(
            Error::Range(0.0..f64::INFINITY).to_string(),
            "Axis range 0.0..inf is not finite"
        );
    }
}
