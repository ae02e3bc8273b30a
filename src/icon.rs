use image::{ImageBuffer, Rgba};

/// The pixel buffer an icon is drawn into before it is written out.
pub type Canvas = ImageBuffer<Rgba<u8>, Vec<u8>>;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const BORDER: Rgba<u8> = Rgba([0, 0, 0, 255]);
const BORDER_WIDTH: u32 = 2;
const HIGHLIGHT_INSET: u32 = 4;
const HIGHLIGHT_BOOST: u8 = 30;

/// Inclusive pixel rectangle, `(x0, y0)` top-left to `(x1, y1)` bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Rect {
    /// The square `inset` pixels in from each edge of a `size`x`size` canvas.
    pub fn inset(size: u32, inset: u32) -> Self {
        let (size, inset) = (i64::from(size), i64::from(inset));
        Self {
            x0: inset,
            y0: inset,
            x1: size - 1 - inset,
            y1: size - 1 - inset,
        }
    }

    /// Distance from `(x, y)` to the nearest edge, 0 on the edge itself.
    /// `None` if the point lies outside the rectangle.
    fn ring(&self, x: i64, y: i64) -> Option<i64> {
        if x < self.x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return None;
        }
        Some((x - self.x0).min(self.x1 - x).min(y - self.y0).min(self.y1 - y))
    }
}

/// Draws `rect` onto the canvas. The outline occupies the `width` outermost
/// rings of the rectangle; the fill covers the rest. Pixels are replaced,
/// not blended, and anything off the canvas is clipped.
pub fn draw_rectangle(
    canvas: &mut Canvas,
    rect: Rect,
    fill: Option<Rgba<u8>>,
    outline: Option<Rgba<u8>>,
    width: u32,
) {
    let width = i64::from(width);
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let Some(ring) = rect.ring(i64::from(x), i64::from(y)) else {
            continue;
        };
        let color = if ring < width { outline } else { fill };
        if let Some(color) = color {
            *pixel = color;
        }
    }
}

/// Lighter shade of `base` used for the inner outline. Alpha is always opaque.
pub fn highlight_color(base: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, _] = base.0;
    Rgba([
        r.saturating_add(HIGHLIGHT_BOOST),
        g.saturating_add(HIGHLIGHT_BOOST),
        b.saturating_add(HIGHLIGHT_BOOST),
        255,
    ])
}

/// Renders a placeholder item icon: a `base`-colored square with a black
/// border and a highlight ring just inside it.
pub fn render_item_icon(base: Rgba<u8>, size: u32) -> Canvas {
    let mut canvas = Canvas::from_pixel(size, size, TRANSPARENT);
    draw_rectangle(
        &mut canvas,
        Rect::inset(size, 1),
        Some(base),
        Some(BORDER),
        BORDER_WIDTH,
    );
    draw_rectangle(
        &mut canvas,
        Rect::inset(size, HIGHLIGHT_INSET),
        None,
        Some(highlight_color(base)),
        1,
    );
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Rgba<u8> = Rgba([139, 90, 43, 255]);

    #[test]
    fn highlight_brightens_each_channel() {
        assert_eq!(highlight_color(BASE), Rgba([169, 120, 73, 255]));
    }

    #[test]
    fn highlight_clamps_at_white() {
        assert_eq!(
            highlight_color(Rgba([255, 215, 0, 255])),
            Rgba([255, 245, 30, 255])
        );
        assert_eq!(
            highlight_color(Rgba([230, 226, 240, 255])),
            Rgba([255, 255, 255, 255])
        );
    }

    #[test]
    fn highlight_is_opaque_even_for_translucent_base() {
        assert_eq!(highlight_color(Rgba([10, 20, 30, 0])).0[3], 255);
    }

    #[test]
    fn icon_layers_by_ring() {
        let icon = render_item_icon(BASE, 32);
        assert_eq!(icon.dimensions(), (32, 32));

        // Outermost ring stays transparent.
        for i in 0..32 {
            for (x, y) in [(i, 0), (i, 31), (0, i), (31, i)] {
                assert_eq!(icon.get_pixel(x, y).0[3], 0, "({x}, {y})");
            }
        }

        assert_eq!(*icon.get_pixel(1, 1), BORDER);
        assert_eq!(*icon.get_pixel(2, 15), BORDER);
        assert_eq!(*icon.get_pixel(30, 30), BORDER);
        assert_eq!(*icon.get_pixel(15, 29), BORDER);

        assert_eq!(*icon.get_pixel(3, 3), BASE);
        assert_eq!(*icon.get_pixel(28, 10), BASE);

        let highlight = highlight_color(BASE);
        assert_eq!(*icon.get_pixel(4, 4), highlight);
        assert_eq!(*icon.get_pixel(27, 27), highlight);
        assert_eq!(*icon.get_pixel(16, 4), highlight);
        assert_eq!(*icon.get_pixel(4, 20), highlight);

        assert_eq!(*icon.get_pixel(5, 5), BASE);
        assert_eq!(*icon.get_pixel(16, 16), BASE);
        assert_eq!(*icon.get_pixel(26, 26), BASE);
    }

    #[test]
    fn drawn_square_is_fully_opaque() {
        let icon = render_item_icon(BASE, 32);
        for y in 1..=30 {
            for x in 1..=30 {
                assert_eq!(icon.get_pixel(x, y).0[3], 255, "({x}, {y})");
            }
        }
    }

    #[test]
    fn outline_only_rectangle_keeps_interior() {
        let mut canvas = Canvas::from_pixel(8, 8, TRANSPARENT);
        draw_rectangle(&mut canvas, Rect::inset(8, 1), None, Some(BORDER), 1);
        assert_eq!(*canvas.get_pixel(1, 1), BORDER);
        assert_eq!(*canvas.get_pixel(6, 3), BORDER);
        assert_eq!(*canvas.get_pixel(3, 3), TRANSPARENT);
        assert_eq!(*canvas.get_pixel(0, 0), TRANSPARENT);
    }

    #[test]
    fn inverted_rectangle_draws_nothing() {
        let mut canvas = Canvas::from_pixel(4, 4, TRANSPARENT);
        draw_rectangle(&mut canvas, Rect::inset(4, 3), Some(BASE), Some(BORDER), 1);
        assert!(canvas.pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn rectangle_is_clipped_to_canvas() {
        let mut canvas = Canvas::from_pixel(4, 4, TRANSPARENT);
        let rect = Rect { x0: -2, y0: -2, x1: 1, y1: 1 };
        draw_rectangle(&mut canvas, rect, Some(BASE), None, 0);
        assert_eq!(*canvas.get_pixel(0, 0), BASE);
        assert_eq!(*canvas.get_pixel(1, 1), BASE);
        assert_eq!(*canvas.get_pixel(2, 2), TRANSPARENT);
    }
}
