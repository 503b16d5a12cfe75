use std::f32::consts::PI;
use std::fmt;

use super::canvas::{Canvas, Ink};
use super::shapes::{draw_lightning, line_width, margin, Cloud, Sun};

/// Weather conditions the display has a glyph for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
}

impl IconKind {
    /// Every kind, in the order icons are generated.
    pub const ALL: [IconKind; 8] = [
        IconKind::Clear,
        IconKind::PartlyCloudy,
        IconKind::Cloudy,
        IconKind::Fog,
        IconKind::Drizzle,
        IconKind::Rain,
        IconKind::Snow,
        IconKind::Thunderstorm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IconKind::Clear => "clear",
            IconKind::PartlyCloudy => "partly_cloudy",
            IconKind::Cloudy => "cloudy",
            IconKind::Fog => "fog",
            IconKind::Drizzle => "drizzle",
            IconKind::Rain => "rain",
            IconKind::Snow => "snow",
            IconKind::Thunderstorm => "thunderstorm",
        }
    }

    pub fn file_name(self, size: u32) -> String {
        format!("{}_{}x{}.png", self.name(), size, size)
    }

    /// Draws this glyph onto a blank `canvas`.
    pub fn draw(self, canvas: &mut Canvas) {
        let s = canvas.size() as f32;
        let size = canvas.size();
        let lw = line_width(size, 3.0);

        match self {
            IconKind::Clear => {
                let radius = (s / 2.0 - margin(size)) * 0.38;
                Sun::new(s / 2.0, s / 2.0, radius, lw).draw(canvas);
            }
            IconKind::PartlyCloudy => {
                // Sun first so the cloud covers it
                Sun::new(s * 0.62, s * 0.30, s * 0.16, lw)
                    .with_ray_outer(1.8)
                    .draw(canvas);
                Cloud::new(s * 0.45, s * 0.58, s * 0.72, s * 0.48, lw).draw(canvas);
            }
            IconKind::Cloudy => {
                Cloud::new(s * 0.55, s * 0.38, s * 0.60, s * 0.42, lw).draw(canvas);
                Cloud::new(s * 0.42, s * 0.55, s * 0.70, s * 0.48, lw).draw(canvas);
            }
            IconKind::Fog => draw_fog(canvas, lw),
            IconKind::Drizzle => {
                Cloud::new(s * 0.50, s * 0.38, s * 0.70, s * 0.42, lw).draw(canvas);
                draw_drizzle(canvas);
            }
            IconKind::Rain => {
                Cloud::new(s * 0.50, s * 0.35, s * 0.70, s * 0.40, lw).draw(canvas);
                draw_rain(canvas);
            }
            IconKind::Snow => {
                Cloud::new(s * 0.50, s * 0.35, s * 0.70, s * 0.40, lw).draw(canvas);
                draw_snow(canvas);
            }
            IconKind::Thunderstorm => {
                Cloud::new(s * 0.50, s * 0.32, s * 0.74, s * 0.42, lw).draw(canvas);
                draw_lightning(canvas, s * 0.48, s * 0.55, s * 0.90, s * 0.30, Ink::Red);
            }
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const FOG_SEGMENTS: u32 = 12;

fn draw_fog(canvas: &mut Canvas, lw: f32) {
    let size = canvas.size();
    let s = size as f32;
    let m = margin(size);
    let x_left = m + s * 0.10;
    let x_right = s - m - s * 0.10;
    let seg_w = (x_right - x_left) / FOG_SEGMENTS as f32;

    for y_base in [s * 0.32, s * 0.50, s * 0.68] {
        // One full sine period across the line
        let points: Vec<(f32, f32)> = (0..=FOG_SEGMENTS)
            .map(|k| {
                let x = x_left + k as f32 * seg_w;
                let phase = k as f32 * PI / (FOG_SEGMENTS as f32 / 2.0);
                (x, y_base + phase.sin() * s * 0.02)
            })
            .collect();
        canvas.polyline(&points, Ink::Black, lw);
    }
}

fn draw_drizzle(canvas: &mut Canvas) {
    let s = canvas.size() as f32;
    let r = (s * 0.025).round_ties_even().max(1.0);
    let row = s * 0.66;
    let second_row = row + s * 0.10;

    let dots = [
        (s * 0.32, row),
        (s * 0.50, row),
        (s * 0.68, row),
        (s * 0.40, second_row),
        (s * 0.58, second_row),
    ];
    for (x, y) in dots {
        canvas.fill_ellipse([x - r, y - r, x + r, y + r], Ink::Black);
    }
}

fn draw_rain(canvas: &mut Canvas) {
    let size = canvas.size();
    let s = size as f32;
    let width = line_width(size, 2.0);
    let length = s * 0.12;
    let columns = [s * 0.30, s * 0.45, s * 0.60, s * 0.75];

    for row in 0..2 {
        let y = s * 0.62 + row as f32 * s * 0.12;
        // Second row is one streak shorter
        let count = if row == 0 { columns.len() } else { columns.len() - 1 };
        for &x in &columns[..count] {
            canvas.line((x, y), (x - s * 0.03, y + length), Ink::Black, width);
        }
    }
}

fn draw_snow(canvas: &mut Canvas) {
    let size = canvas.size();
    let s = size as f32;
    let r = (s * 0.04).round_ties_even().max(2.0);
    let width = line_width(size, 1.5);

    let flakes = [
        (s * 0.30, s * 0.66),
        (s * 0.50, s * 0.64),
        (s * 0.70, s * 0.66),
        (s * 0.38, s * 0.78),
        (s * 0.58, s * 0.80),
    ];
    for (fx, fy) in flakes {
        // Three crossing strokes give six arms
        for degrees in [0.0f32, 60.0, 120.0] {
            let (sin, cos) = degrees.to_radians().sin_cos();
            let (dx, dy) = (cos * r, sin * r);
            canvas.line((fx - dx, fy - dy), (fx + dx, fy + dy), Ink::Black, width);
        }
    }
}
