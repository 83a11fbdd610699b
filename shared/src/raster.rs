use std::future::{ready, Ready};

use tiny_skia::{
    ColorU8, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

use crate::color::Color;
use crate::error::SurfaceError;
use crate::snapshot::{decode_png_data_url, encode_png_data_url};
use crate::surface::{PenSettings, Surface};
use crate::Point;

/// Software surface backed by a `tiny-skia` pixmap.
///
/// Renders with the same stroke model as `CanvasRenderingContext2d`
/// (round caps and joins, anti-aliased) and snapshots to the same PNG data
/// URLs, so it stands in for the browser canvas outside a page.
#[derive(Clone)]
pub struct RasterSurface {
    pixmap: Pixmap,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap = Pixmap::new(width, height).ok_or(SurfaceError::Allocation { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn from_data_url(data_url: &str) -> Result<Self, SurfaceError> {
        Ok(Self {
            pixmap: decode_pixmap(data_url)?,
        })
    }

    /// Demultiplied RGBA at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU8> {
        self.pixmap.pixel(x, y).map(|pixel| pixel.demultiply())
    }

    pub fn is_uniform(&self, color: Color) -> bool {
        let expected = to_skia(color).premultiply().to_color_u8();
        self.pixmap.pixels().iter().all(|pixel| *pixel == expected)
    }

    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl Surface for RasterSurface {
    type Image = Pixmap;
    type Decode = Ready<Result<Pixmap, SurfaceError>>;

    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn fill(&mut self, color: Color) {
        self.pixmap.fill(to_skia(color));
    }

    fn stroke_segment(&mut self, from: Point, to: Point, pen: &PenSettings) {
        let mut paint = Paint::default();
        paint.set_color(to_skia(pen.color));
        paint.anti_alias = true;

        // A zero-length segment still leaves a round dot, as on a canvas.
        if from == to {
            if let Some(dot) = PathBuilder::from_circle(to.x, to.y, pen.width / 2.0) {
                self.pixmap
                    .fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
            }
            return;
        }

        let mut path_builder = PathBuilder::new();
        path_builder.move_to(from.x, from.y);
        path_builder.line_to(to.x, to.y);
        let Some(path) = path_builder.finish() else {
            return;
        };
        let stroke = Stroke {
            width: pen.width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn to_data_url(&self) -> Result<String, SurfaceError> {
        let png = self
            .pixmap
            .encode_png()
            .map_err(|error| SurfaceError::Encode(error.to_string()))?;
        Ok(encode_png_data_url(&png))
    }

    fn decode(&self, data_url: &str) -> Self::Decode {
        ready(decode_pixmap(data_url))
    }

    fn composite(&mut self, image: &Pixmap) {
        self.pixmap.draw_pixmap(
            0,
            0,
            image.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}

fn decode_pixmap(data_url: &str) -> Result<Pixmap, SurfaceError> {
    let png = decode_png_data_url(data_url)?;
    Pixmap::decode_png(&png).map_err(|error| SurfaceError::Decode(error.to_string()))
}

fn to_skia(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 0xff)
}

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;
