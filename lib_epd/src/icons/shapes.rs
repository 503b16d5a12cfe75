use std::f32::consts::PI;

use super::canvas::{Canvas, Ink};
use crate::constants::REFERENCE_SIZE;

/// Scales `base` from the 120px layout, rounding half to even.
fn scaled(base: f32, size: u32) -> f32 {
    (base * size as f32 / REFERENCE_SIZE as f32).round_ties_even()
}

/// Stroke width for an icon of `size` pixels, scaled from `base` at 120px.
pub fn line_width(size: u32, base: f32) -> f32 {
    scaled(base, size).max(1.0)
}

/// Distance kept from the icon edge.
pub fn margin(size: u32) -> f32 {
    scaled(5.0, size).max(2.0)
}

/// Cloud bumps as (centre dx, centre dy, rx, ry), fractions of the cloud's
/// width and height.
const CLOUD_BUMPS: [(f32, f32, f32, f32); 3] = [
    (-0.20, -0.10, 0.28, 0.30), // left
    (0.05, -0.25, 0.32, 0.35),  // centre, tallest
    (0.28, -0.05, 0.24, 0.25),  // right
];

#[derive(Debug, Clone, Copy)]
pub struct Cloud {
    pub cx: f32,
    pub cy: f32,
    pub w: f32,
    pub h: f32,
    pub outline: Ink,
    pub fill: Ink,
    pub lw: f32,
}

impl Cloud {
    pub fn new(cx: f32, cy: f32, w: f32, h: f32, lw: f32) -> Self {
        Self {
            cx,
            cy,
            w,
            h,
            outline: Ink::Black,
            fill: Ink::White,
            lw,
        }
    }

    fn bump_boxes(&self) -> impl Iterator<Item = [f32; 4]> + '_ {
        CLOUD_BUMPS.iter().map(move |&(bx, by, brx, bry)| {
            let ex = self.cx + self.w * bx;
            let ey = self.cy + self.h * by;
            let erx = self.w * brx;
            let ery = self.h * bry;
            [ex - erx, ey - ery, ex + erx, ey + ery]
        })
    }

    /// Draws the cloud over whatever is already on the canvas.
    ///
    /// Primitives are opaque and cannot be unioned, so the order below is
    /// what hides the seams: fill everything, outline the bumps, refill the
    /// body to cover bump outlines inside it, then stroke the body's edges.
    pub fn draw(&self, canvas: &mut Canvas) {
        let Cloud {
            cx,
            cy,
            w,
            h,
            outline,
            fill,
            lw,
        } = *self;

        let left = cx - w * 0.45;
        let right = cx + w * 0.45;
        let top = cy + h * 0.05;
        let bottom = cy + h * 0.40;

        for bbox in self.bump_boxes() {
            canvas.fill_ellipse(bbox, fill);
        }
        canvas.fill_rect([left, top, right, bottom], fill);

        for bbox in self.bump_boxes() {
            canvas.stroke_ellipse(bbox, outline, lw);
        }

        canvas.fill_rect([left + lw, top, right - lw, bottom - lw], fill);

        canvas.line((left, bottom), (right, bottom), outline, lw);
        canvas.line((left, top + h * 0.05), (left, bottom), outline, lw);
        canvas.line((right, top + h * 0.05), (right, bottom), outline, lw);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sun {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub color: Ink,
    pub lw: f32,
    pub rays: u32,
    pub ray_inner: f32,
    pub ray_outer: f32,
}

impl Sun {
    pub fn new(cx: f32, cy: f32, radius: f32, lw: f32) -> Self {
        Self {
            cx,
            cy,
            radius,
            color: Ink::Red,
            lw,
            rays: 8,
            ray_inner: 1.35,
            ray_outer: 1.75,
        }
    }

    pub fn with_ray_outer(mut self, ray_outer: f32) -> Self {
        self.ray_outer = ray_outer;
        self
    }

    /// Circle outline plus rays evenly spaced at `2π / rays`.
    pub fn draw(&self, canvas: &mut Canvas) {
        let Sun {
            cx,
            cy,
            radius,
            color,
            lw,
            ..
        } = *self;

        canvas.stroke_ellipse(
            [cx - radius, cy - radius, cx + radius, cy + radius],
            color,
            lw,
        );

        for i in 0..self.rays {
            let angle = 2.0 * PI * i as f32 / self.rays as f32;
            let (sin, cos) = angle.sin_cos();
            let inner = radius * self.ray_inner;
            let outer = radius * self.ray_outer;
            canvas.line(
                (cx + cos * inner, cy + sin * inner),
                (cx + cos * outer, cy + sin * outer),
                color,
                lw,
            );
        }
    }
}

/// Zigzag bolt outline, as fractions of (width, span) relative to
/// (cx, top).
const BOLT_POINTS: [(f32, f32); 6] = [
    (0.10, 0.0),
    (-0.15, 0.45),
    (0.10, 0.40),
    (-0.05, 1.0),
    (0.15, 0.55),
    (-0.10, 0.60),
];

pub fn lightning_points(cx: f32, top: f32, bottom: f32, width: f32) -> Vec<(f32, f32)> {
    let span = bottom - top;
    BOLT_POINTS
        .iter()
        .map(|&(fx, fy)| (cx + width * fx, top + span * fy))
        .collect()
}

pub fn draw_lightning(canvas: &mut Canvas, cx: f32, top: f32, bottom: f32, width: f32, color: Ink) {
    canvas.fill_polygon(&lightning_points(cx, top, bottom, width), color);
}
