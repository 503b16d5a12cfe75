use image::RgbaImage;
use tiny_skia::{
    FillRule, LineCap, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use super::RenderError;

/// The three colors an icon is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    White,
    Black,
    Red,
}

impl Ink {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Ink::White => [255, 255, 255],
            Ink::Black => [0, 0, 0],
            Ink::Red => [255, 0, 0],
        }
    }

    fn paint(self) -> Paint<'static> {
        let [r, g, b] = self.rgb();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        // Hard edges only; the panel cannot show intermediate shades
        paint.anti_alias = false;
        paint
    }
}

/// Square drawing surface, white on creation.
///
/// Bounding boxes are `[left, top, right, bottom]` in pixel coordinates.
/// Shapes with an empty or inverted box are skipped.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(size: u32) -> Result<Self, RenderError> {
        let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::InvalidSize(size))?;
        pixmap.fill(tiny_skia::Color::WHITE);
        Ok(Self { pixmap })
    }

    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn fill_ellipse(&mut self, bbox: [f32; 4], ink: Ink) {
        let Some(rect) = to_rect(bbox) else {
            return;
        };
        if let Some(path) = PathBuilder::from_oval(rect) {
            self.pixmap.fill_path(
                &path,
                &ink.paint(),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Outlines an ellipse with the stroke kept inside `bbox`.
    pub fn stroke_ellipse(&mut self, bbox: [f32; 4], ink: Ink, width: f32) {
        let half = width / 2.0;
        let [l, t, r, b] = bbox;
        let Some(rect) = to_rect([l + half, t + half, r - half, b - half]) else {
            return;
        };
        if let Some(path) = PathBuilder::from_oval(rect) {
            self.pixmap.stroke_path(
                &path,
                &ink.paint(),
                &stroke(width),
                Transform::identity(),
                None,
            );
        }
    }

    pub fn fill_rect(&mut self, bbox: [f32; 4], ink: Ink) {
        if let Some(rect) = to_rect(bbox) {
            self.pixmap
                .fill_rect(rect, &ink.paint(), Transform::identity(), None);
        }
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), ink: Ink, width: f32) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0, from.1);
        pb.line_to(to.0, to.1);

        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &ink.paint(),
                &stroke(width),
                Transform::identity(),
                None,
            );
        }
    }

    /// Draws consecutive points as one segment per pair.
    pub fn polyline(&mut self, points: &[(f32, f32)], ink: Ink, width: f32) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], ink, width);
        }
    }

    pub fn fill_polygon(&mut self, points: &[(f32, f32)], ink: Ink) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let mut pb = PathBuilder::new();
        pb.move_to(first.0, first.1);
        for p in rest {
            pb.line_to(p.0, p.1);
        }
        pb.close();

        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(
                &path,
                &ink.paint(),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Hands the pixels over as an `image` buffer.
    ///
    /// Every ink is opaque, so tiny-skia's premultiplied storage is already
    /// plain RGBA.
    pub fn into_image(self) -> Result<RgbaImage, RenderError> {
        let size = self.size();
        RgbaImage::from_raw(size, size, self.pixmap.take()).ok_or(RenderError::BufferMismatch)
    }
}

fn to_rect(bbox: [f32; 4]) -> Option<Rect> {
    let [l, t, r, b] = bbox;
    if r <= l || b <= t {
        return None;
    }
    Rect::from_ltrb(l, t, r, b)
}

fn stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Butt,
        ..Stroke::default()
    }
}
