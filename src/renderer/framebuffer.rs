//! Software render target
//!
//! Row-major RGBA8 pixels. Shapes are clipped to the buffer and a pixel is
//! covered when its center falls inside the shape.

use std::io::{self, Write};

use glam::Vec2;

use super::{Renderer, Rgba};
use crate::sim::Rect;

pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Binary PPM (P6); alpha is dropped
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let rgb: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b])
            .collect();
        out.write_all(&rgb)
    }

    /// Pixel index range whose centers lie in [start, end); empty when end < start
    fn span(start: f32, end: f32, limit: usize) -> (usize, usize) {
        let lo = ((start - 0.5).ceil().max(0.0) as usize).min(limit);
        let hi = ((end - 0.5).ceil().max(0.0) as usize).min(limit);
        (lo, hi.max(lo))
    }
}

impl Renderer for Framebuffer {
    fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let (x0, x1) = Self::span(rect.left(), rect.right(), self.width);
        let (y0, y1) = Self::span(rect.top(), rect.bottom(), self.height);
        for y in y0..y1 {
            let row = y * self.width;
            self.pixels[row + x0..row + x1].fill(color);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (x0, x1) = Self::span(center.x - radius, center.x + radius, self.width);
        let (y0, y1) = Self::span(center.y - radius, center.y + radius, self.height);
        let r2 = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if p.distance_squared(center) <= r2 {
                    self.pixels[y * self.width + x] = color;
                }
            }
        }
    }
}
