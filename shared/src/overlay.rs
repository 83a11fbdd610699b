use crate::color::Color;
use crate::surface::PenSettings;

/// Placement of the cursor-following pen preview, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayBox {
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub color: Color,
}

/// Positions the pen preview centred on the pointer, or `None` when it
/// should be hidden because drawing mode is off.
pub fn pen_overlay(
    client_x: f64,
    client_y: f64,
    pen: &PenSettings,
    drawing_active: bool,
) -> Option<OverlayBox> {
    if !drawing_active {
        return None;
    }
    let size = f64::from(pen.width);
    let half = size / 2.0;
    Some(OverlayBox {
        left: client_x - half,
        top: client_y - half,
        size,
        color: pen.color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centres_box_on_pointer() {
        let pen = PenSettings {
            width: 10.0,
            color: Color::rgb(0xff, 0, 0),
        };
        let overlay = pen_overlay(100.0, 50.0, &pen, true).unwrap();
        assert_eq!(
            overlay,
            OverlayBox {
                left: 95.0,
                top: 45.0,
                size: 10.0,
                color: Color::rgb(0xff, 0, 0),
            }
        );
    }

    #[test]
    fn hidden_outside_drawing_mode() {
        let pen = PenSettings {
            width: 5.0,
            color: Color::BLACK,
        };
        assert_eq!(pen_overlay(10.0, 10.0, &pen, false), None);
    }
}
