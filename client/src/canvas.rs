use std::future::Future;
use std::pin::Pin;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use quicknote_shared::{Color, PenSettings, Point, Surface, SurfaceError};

use crate::util::describe_js_error;

pub type DecodeFuture = Pin<Box<dyn Future<Output = Result<HtmlImageElement, SurfaceError>>>>;

/// The popup's `<canvas>` as a drawing surface.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;
    type Decode = DecodeFuture;

    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.fill_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn stroke_segment(&mut self, from: Point, to: Point, pen: &PenSettings) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&pen.color.to_hex());
        ctx.set_line_join("round");
        ctx.set_line_cap("round");
        ctx.set_line_width(f64::from(pen.width));
        ctx.begin_path();
        ctx.move_to(f64::from(from.x), f64::from(from.y));
        ctx.line_to(f64::from(to.x), f64::from(to.y));
        ctx.stroke();
    }

    fn to_data_url(&self) -> Result<String, SurfaceError> {
        self.canvas
            .to_data_url()
            .map_err(|error| SurfaceError::Encode(describe_js_error(&error)))
    }

    fn decode(&self, data_url: &str) -> DecodeFuture {
        Box::pin(decode_image(data_url.to_string()))
    }

    fn composite(&mut self, image: &HtmlImageElement) {
        if let Err(error) = self.ctx.draw_image_with_html_image_element(image, 0.0, 0.0) {
            log::warn!("could not draw saved drawing: {}", describe_js_error(&error));
        }
    }
}

async fn decode_image(data_url: String) -> Result<HtmlImageElement, SurfaceError> {
    let image =
        HtmlImageElement::new().map_err(|error| SurfaceError::Decode(describe_js_error(&error)))?;
    image.set_src(&data_url);
    JsFuture::from(image.decode())
        .await
        .map_err(|error| SurfaceError::Decode(describe_js_error(&error)))?;
    Ok(image)
}
