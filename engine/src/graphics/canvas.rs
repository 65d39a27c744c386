use crate::error::Result;
use crate::geometry::{intersection::clip_rect, rect, Dimension, Point};
use crate::graphics::tiles::{ColorRGBA, TilePainter};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Paints tiles into an in-memory RGBA image
#[derive(Debug)]
pub struct ImageCanvas {
    image: RgbaImage,
}

impl ImageCanvas {
    pub fn new(size: Dimension, clear: ColorRGBA) -> Self {
        ImageCanvas {
            image: RgbaImage::from_pixel(size.width, size.height, to_rgba(clear)),
        }
    }

    pub fn size(&self) -> Dimension {
        Dimension {
            width: self.image.width(),
            height: self.image.height(),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorRGBA> {
        if x < self.image.width() && y < self.image.height() {
            let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
            Some(ColorRGBA(r, g, b, a))
        } else {
            None
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        log::info!("Wrote image \"{}\"", path.display());
        Ok(())
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl TilePainter for ImageCanvas {
    fn paint_tile(&mut self, center: Point, color: ColorRGBA, size: u32) {
        let half = (size / 2) as i32;
        let tile = rect(center.x - half, center.y - half, size, size);

        let Some(visible) = clip_rect(tile, self.size()) else {
            log::trace!("tile at {} is outside the canvas", center);
            return;
        };

        let pixel = to_rgba(color);
        for y in visible.y..visible.y + visible.h as i32 {
            for x in visible.x..visible.x + visible.w as i32 {
                self.image.put_pixel(x as u32, y as u32, pixel);
            }
        }
    }
}

fn to_rgba(ColorRGBA(r, g, b, a): ColorRGBA) -> Rgba<u8> {
    Rgba([r, g, b, a])
}
