use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::domain::network::Network;
use crate::domain::schedule::Assignment;
use crate::error::Result;
use crate::render::font::{draw_text, put_pixel_checked};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 800;
const MARGIN: i64 = 50;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LIGHT_GRAY: Rgba<u8> = Rgba([200, 200, 200, 255]);
const GRAY: Rgba<u8> = Rgba([100, 100, 100, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// Per-train route tints, reused round-robin.
const TRAIN_COLORS: [Rgba<u8>; 4] = [
    Rgba([255, 0, 0, 255]),
    Rgba([0, 255, 0, 255]),
    Rgba([255, 165, 0, 255]),
    Rgba([255, 0, 255, 255]),
];

/// Renders the network and the committed routes as a PNG.
///
/// Display coordinates are scaled into a fixed canvas, y growing upwards.
/// Purely cosmetic output; the scheduling result is unaffected by anything
/// in here.
pub fn draw_network(network: &Network, assignments: &[Assignment], out: &Path) -> Result<()> {
    let mut img = RgbaImage::from_pixel(WIDTH, HEIGHT, WHITE);

    let max_x = network.stations().map(|s| s.x).max().unwrap_or(0).max(1);
    let max_y = network.stations().map(|s| s.y).max().unwrap_or(0).max(1);
    let scale = (((WIDTH as i64 - MARGIN * 2) / max_x).min((HEIGHT as i64 - MARGIN * 2) / max_y) - 1).max(1);

    let place = |x: i64, y: i64| -> (i64, i64) { (MARGIN + x * scale, HEIGHT as i64 - MARGIN - y * scale) };

    draw_grid(&mut img, (scale / 2).max(1));
    draw_axes(&mut img);

    for station in network.stations() {
        let (x1, y1) = place(station.x, station.y);
        for neighbor in &station.connections {
            if let Some(other) = network.station(neighbor) {
                let (x2, y2) = place(other.x, other.y);
                draw_line(&mut img, x1, y1, x2, y2, GRAY);
            }
        }
    }

    for assignment in assignments {
        let color = TRAIN_COLORS[(assignment.train - 1) % TRAIN_COLORS.len()];
        for pair in assignment.route.stations().windows(2) {
            if let (Some(from), Some(to)) = (network.station(&pair[0]), network.station(&pair[1])) {
                let (x1, y1) = place(from.x, from.y);
                let (x2, y2) = place(to.x, to.y);
                draw_line(&mut img, x1, y1, x2, y2, color);
            }
        }
    }

    for station in network.stations() {
        let (x, y) = place(station.x, station.y);
        draw_disc(&mut img, x, y, 5, BLUE);
        draw_text(&mut img, &station.name, x + 12, y - 10, 2, WHITE, BLUE);
    }

    img.save(out)?;
    log::info!("network rendering written to {}", out.display());
    Ok(())
}

fn draw_grid(img: &mut RgbaImage, step: i64) {
    let (right, bottom) = (WIDTH as i64 - MARGIN, HEIGHT as i64 - MARGIN);
    let mut x = MARGIN;
    while x <= right {
        draw_line(img, x, MARGIN, x, bottom, LIGHT_GRAY);
        x += step;
    }
    let mut y = MARGIN;
    while y <= bottom {
        draw_line(img, MARGIN, y, right, y, LIGHT_GRAY);
        y += step;
    }
}

fn draw_axes(img: &mut RgbaImage) {
    let (right, bottom) = (WIDTH as i64 - MARGIN, HEIGHT as i64 - MARGIN);
    draw_line(img, MARGIN, bottom, right, bottom, BLACK);
    draw_line(img, MARGIN, MARGIN, MARGIN, bottom, BLACK);
}

fn draw_disc(img: &mut RgbaImage, cx: i64, cy: i64, r: i64, color: Rgba<u8>) {
    for dx in -r..=r {
        for dy in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put_pixel_checked(img, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Bresenham line.
fn draw_line(img: &mut RgbaImage, mut x1: i64, mut y1: i64, x2: i64, y2: i64, color: Rgba<u8>) {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        put_pixel_checked(img, x1, y1, color);
        if x1 == x2 && y1 == y2 {
            return;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x1 += sx;
        }
        if e2 < dx {
            err += dx;
            y1 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::route::Route;

    #[test]
    fn renders_a_small_network_to_disk() {
        let mut network = Network::new("test");
        network.add_station("west_end", 0, 0).unwrap();
        network.add_station("east_end", 3, 2).unwrap();
        network.add_connection("west_end", "east_end").unwrap();

        let assignments = vec![Assignment {
            train: 1,
            route: Route::new(vec!["west_end".to_string(), "east_end".to_string()]),
            delay: 0,
        }];

        let out = std::env::temp_dir().join(format!("train_dispatch_render_{}.png", std::process::id()));
        draw_network(&network, &assignments, &out).unwrap();

        assert!(out.metadata().unwrap().len() > 0);
        let _ = std::fs::remove_file(&out);
    }
}
