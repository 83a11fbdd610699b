use std::future::Future;

use crate::color::Color;
use crate::error::SurfaceError;
use crate::Point;

/// Pen applied to every segment rendered after it is set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenSettings {
    pub width: f32,
    pub color: Color,
}

impl PenSettings {
    pub const MIN_WIDTH: f32 = 1.0;
    pub const MAX_WIDTH: f32 = 100.0;

    /// Clamps a width into the pen range; non-finite widths are rejected.
    pub fn clamp_width(width: f32) -> Option<f32> {
        width
            .is_finite()
            .then(|| width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH))
    }

    /// Parses the value of a range input.
    pub fn parse_width(value: &str) -> Option<f32> {
        value.trim().parse::<f32>().ok().and_then(Self::clamp_width)
    }
}

/// A 2D raster the drawing controller renders into and snapshots.
///
/// Segments are stroked with round joins and caps. Decoding a snapshot is
/// asynchronous in the browser, so it is exposed as a future that does not
/// borrow the surface; the controller composites the result when it resolves.
pub trait Surface {
    type Image;
    type Decode: Future<Output = Result<Self::Image, SurfaceError>> + 'static;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Paints the whole surface with `color`.
    fn fill(&mut self, color: Color);

    fn stroke_segment(&mut self, from: Point, to: Point, pen: &PenSettings);

    /// Encodes the current pixels as a PNG data URL.
    fn to_data_url(&self) -> Result<String, SurfaceError>;

    fn decode(&self, data_url: &str) -> Self::Decode;

    /// Draws a decoded snapshot at the origin over the current pixels.
    fn composite(&mut self, image: &Self::Image);
}
