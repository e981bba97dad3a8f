//! PNG line chart of movie counts per year

use image::{ImageFormat, Rgb, RgbImage};
use movies_catalog::YearCount;
use std::io::Cursor;

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 800;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);
const SERIES: Rgb<u8> = Rgb([31, 119, 180]);
const LABEL: Rgb<u8> = Rgb([60, 60, 60]);

const MARGIN_LEFT: i64 = 110;
const MARGIN_RIGHT: i64 = 50;
const MARGIN_TOP: i64 = 70;
const MARGIN_BOTTOM: i64 = 90;

const Y_TICKS: usize = 5;
const MARKER_RADIUS: i64 = 6;
const TEXT_SCALE: i64 = 2;
const TITLE_SCALE: i64 = 3;

const TITLE: &str = "MOVIES BY YEAR";
const X_AXIS_LABEL: &str = "YEAR";
const Y_AXIS_LABEL: &str = "NUMBER OF MOVIES";

const GLYPH_WIDTH: i64 = 5;
const GLYPH_HEIGHT: i64 = 7;

/// 5x7 bitmap for `c`, one row per entry, MSB on the left
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        _ => return None,
    };
    Some(rows)
}

/// Mapping from data space to pixel space
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    points: usize,
    y_max: usize,
}

impl Layout {
    pub fn new(counts: &[YearCount]) -> Self {
        let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
        Self {
            points: counts.len(),
            y_max: nice_ceiling(max),
        }
    }

    pub fn y_max(&self) -> usize {
        self.y_max
    }

    fn plot_width(&self) -> i64 {
        i64::from(WIDTH) - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height(&self) -> i64 {
        i64::from(HEIGHT) - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn bottom(&self) -> i64 {
        MARGIN_TOP + self.plot_height()
    }

    /// Pixel position of the `index`-th point with value `count`
    pub fn point(&self, index: usize, count: usize) -> (i64, i64) {
        let x = if self.points <= 1 {
            MARGIN_LEFT + self.plot_width() / 2
        } else {
            MARGIN_LEFT + self.plot_width() * index as i64 / (self.points as i64 - 1)
        };
        let y = self.bottom() - self.plot_height() * count as i64 / self.y_max as i64;
        (x, y)
    }
}

/// Smallest 1/2/5 x 10^n multiple of `Y_TICKS` that covers `max`
fn nice_ceiling(max: usize) -> usize {
    let raw_step = max.div_ceil(Y_TICKS).max(1);
    let mut magnitude = 1;
    while magnitude * 10 <= raw_step {
        magnitude *= 10;
    }
    let step = [1, 2, 5, 10]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw_step)
        .unwrap_or(10 * magnitude);
    step * Y_TICKS
}

/// Render `counts` (ascending by year) as a PNG
pub fn render_png(counts: &[YearCount]) -> Result<Vec<u8>, image::ImageError> {
    let layout = Layout::new(counts);
    let mut canvas = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);
    let right = i64::from(WIDTH) - MARGIN_RIGHT;
    let bottom = layout.bottom();

    let title_x = (i64::from(WIDTH) - text_width(TITLE, TITLE_SCALE)) / 2;
    draw_text(&mut canvas, title_x, 20, TITLE, TITLE_SCALE, LABEL);

    // horizontal grid and y labels
    let step = layout.y_max() / Y_TICKS;
    for tick in 0..=Y_TICKS {
        let value = tick * step;
        let (_, y) = layout.point(0, value);
        draw_line(&mut canvas, (MARGIN_LEFT, y), (right, y), GRID);
        let label = value.to_string();
        let x = MARGIN_LEFT - 12 - text_width(&label, TEXT_SCALE);
        draw_text(&mut canvas, x, y - GLYPH_HEIGHT * TEXT_SCALE / 2, &label, TEXT_SCALE, LABEL);
    }

    // vertical grid and year labels
    for (index, c) in counts.iter().enumerate() {
        let (x, _) = layout.point(index, 0);
        draw_line(&mut canvas, (x, MARGIN_TOP), (x, bottom), GRID);
        let label = c.year.to_string();
        let label_x = x - text_width(&label, TEXT_SCALE) / 2;
        draw_text(&mut canvas, label_x, bottom + 16, &label, TEXT_SCALE, LABEL);
    }

    let x_label_x = MARGIN_LEFT + (right - MARGIN_LEFT - text_width(X_AXIS_LABEL, TEXT_SCALE)) / 2;
    draw_text(&mut canvas, x_label_x, bottom + 50, X_AXIS_LABEL, TEXT_SCALE, LABEL);
    let y_label_bottom = (MARGIN_TOP + bottom + text_width(Y_AXIS_LABEL, TEXT_SCALE)) / 2;
    draw_text_vertical(&mut canvas, 20, y_label_bottom, Y_AXIS_LABEL, TEXT_SCALE, LABEL);

    draw_line(&mut canvas, (MARGIN_LEFT, MARGIN_TOP), (MARGIN_LEFT, bottom), AXIS);
    draw_line(&mut canvas, (MARGIN_LEFT, bottom), (right, bottom), AXIS);

    let points: Vec<(i64, i64)> = counts
        .iter()
        .enumerate()
        .map(|(index, c)| layout.point(index, c.count))
        .collect();

    for pair in points.windows(2) {
        draw_thick_line(&mut canvas, pair[0], pair[1], SERIES);
    }
    for (&(x, y), c) in points.iter().zip(counts) {
        fill_circle(&mut canvas, x, y, MARKER_RADIUS, SERIES);
        let label = c.count.to_string();
        draw_text(
            &mut canvas,
            x - text_width(&label, TEXT_SCALE) / 2,
            y - MARKER_RADIUS - 8 - GLYPH_HEIGHT * TEXT_SCALE,
            &label,
            TEXT_SCALE,
            LABEL,
        );
    }

    let mut png = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

fn put(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && x < i64::from(canvas.width()) && y < i64::from(canvas.height()) {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line
fn draw_line(canvas: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(canvas, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn draw_thick_line(canvas: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    for offset in -1..=1 {
        draw_line(canvas, (from.0, from.1 + offset), (to.0, to.1 + offset), color);
        draw_line(canvas, (from.0 + offset, from.1), (to.0 + offset, to.1), color);
    }
}

fn fill_circle(canvas: &mut RgbImage, cx: i64, cy: i64, radius: i64, color: Rgb<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put(canvas, cx + dx, cy + dy, color);
            }
        }
    }
}

fn text_width(text: &str, scale: i64) -> i64 {
    let n = text.chars().count() as i64;
    if n == 0 {
        0
    } else {
        n * (GLYPH_WIDTH + 1) * scale - scale
    }
}

/// Calls `plot` with the offset of every lit pixel in `text`, left to right
///
/// Unknown characters (including spaces) are left blank but still advance.
fn for_each_text_pixel(text: &str, scale: i64, mut plot: impl FnMut(i64, i64)) {
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let left = i as i64 * (GLYPH_WIDTH + 1) * scale;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        plot(left + col * scale + sx, row as i64 * scale + sy);
                    }
                }
            }
        }
    }
}

/// Draw `text` with its top-left corner at (x, y)
fn draw_text(canvas: &mut RgbImage, x: i64, y: i64, text: &str, scale: i64, color: Rgb<u8>) {
    for_each_text_pixel(text, scale, |dx, dy| put(canvas, x + dx, y + dy, color));
}

/// Draw `text` rotated a quarter turn counterclockwise, reading bottom to top
/// from (x, bottom)
fn draw_text_vertical(
    canvas: &mut RgbImage,
    x: i64,
    bottom: i64,
    text: &str,
    scale: i64,
    color: Rgb<u8>,
) {
    for_each_text_pixel(text, scale, |dx, dy| put(canvas, x + dy, bottom - dx, color));
}
