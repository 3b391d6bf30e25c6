use image::{Rgba, RgbaImage};

/// 3x5 bitmap glyphs for the station-name charset (`[a-z0-9_]`), one `u8`
/// of 3 low bits per row, MSB-left.
fn glyph(c: char) -> Option<[u8; 5]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b010, 0b001],
        'R' => [0b110, 0b101, 0b110, 0b110, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _ => return None,
    };
    Some(rows)
}

/// Pixel width of `text` at the given scale, including the background pad.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * 4 * scale + 4
}

pub const TEXT_HEIGHT_GLYPHS: u32 = 5;

/// Draws `text` at (x, y): a filled background box with the glyphs on top.
/// Unknown characters render as a filled block. Pixels falling outside the
/// canvas are dropped.
pub fn draw_text(img: &mut RgbaImage, text: &str, x: i64, y: i64, scale: u32, fg: Rgba<u8>, bg: Rgba<u8>) {
    let width = text_width(text, scale) as i64;
    let height = (TEXT_HEIGHT_GLYPHS * scale) as i64 + 4;

    for dy in 0..height {
        for dx in 0..width {
            put_pixel_checked(img, x + dx - 2, y + dy - 2, bg);
        }
    }

    let mut cursor = x;
    for c in text.chars() {
        let rows = glyph(c).unwrap_or([0b111; 5]);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..3u8 {
                if bits & (0b100 >> col) != 0 {
                    for dy in 0..scale as i64 {
                        for dx in 0..scale as i64 {
                            put_pixel_checked(
                                img,
                                cursor + col as i64 * scale as i64 + dx,
                                y + row as i64 * scale as i64 + dy,
                                fg,
                            );
                        }
                    }
                }
            }
        }
        cursor += 4 * scale as i64;
    }
}

pub fn put_pixel_checked(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}
