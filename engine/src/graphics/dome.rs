use crate::error::Result;
use crate::geometry::{point, Dimension, Point};
use crate::graphics::{
    ellipse, midpoint,
    tiles::{ColorRGBA, GridRenderer, Palette, RenderConfig, TileMapper, TilePainter},
};
use itertools::Itertools;
use serde::Serialize;

/// Which shapes to draw and how big they are, in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomeDimensions {
    pub circle: bool,
    pub ellipse: bool,
    pub radius: i32,
    pub width: i32,
    pub height: i32,
}

/// Tile coordinates of the drawn shapes, relative to each shape's own origin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomePlan {
    pub circle: Option<ShapePlan>,
    pub ellipse: Option<ShapePlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapePlan {
    pub points: Vec<(i32, i32)>,
    /// Tile painted as the center marker
    pub center: (i32, i32),
    /// Number of tiles per row, see the constructors for which rows
    pub rows: Vec<usize>,
    /// Grid position of the shape's origin
    #[serde(skip)]
    pub offset: Point,
}

impl ShapePlan {
    /// Circle centered on the origin. Rows describe a single octet, starting
    /// at the top row.
    pub fn circle(radius: i32) -> Result<Self> {
        let octet = midpoint::circle_octet(radius)?;
        let octet_ys = octet.iter().map(|p| p.y).collect::<Vec<i32>>();
        let points = midpoint::circle_points_from_octet(&octet);

        Ok(ShapePlan {
            points: points.iter().map(|p| (p.x, p.y)).collect(),
            center: (0, 0),
            rows: midpoint::octet_row_runs(&octet_ys),
            offset: Point::ZERO,
        })
    }

    /// Ellipse with its bounding rectangle's corner at the origin. Rows count
    /// the tiles of the whole ellipse, bottom row first.
    pub fn ellipse(height: i32, width: i32) -> Result<Self> {
        let points = ellipse::ellipse_points(height, width)?;
        let rows_by_y = points.iter().map(|p| p.y).sorted().group_by(|y| *y);
        let rows = rows_by_y.into_iter().map(|(_, row)| row.count()).collect();

        Ok(ShapePlan {
            points: points.iter().map(|p| (p.x, p.y)).collect(),
            center: (width / 2, height / 2),
            rows,
            offset: Point::ZERO,
        })
    }

    fn at(self, offset: Point) -> Self {
        ShapePlan { offset, ..self }
    }

    /// Number of outline tiles that land outside a grid of the given size
    pub fn tiles_outside(&self, grid: Dimension) -> usize {
        let inside = |tile: i32, offset: i32, length: u32| {
            (0..i64::from(length)).contains(&(i64::from(tile) + i64::from(offset)))
        };

        self.points
            .iter()
            .filter(|(x, y)| {
                !(inside(*x, self.offset.x, grid.width) && inside(*y, self.offset.y, grid.height))
            })
            .count()
    }

    /// Pixel centers of the outline tiles followed by the center marker
    fn pixels(
        &self,
        mapper: TileMapper,
        line: ColorRGBA,
        marker: ColorRGBA,
    ) -> Result<Vec<(Point, ColorRGBA)>> {
        let (cx, cy) = self.center;
        self.points
            .iter()
            .map(|&(x, y)| (point(x, y), line))
            .chain(std::iter::once((point(cx, cy), marker)))
            .map(|(tile, color)| Ok((mapper.to_pixel(tile, self.offset)?, color)))
            .collect()
    }
}

fn paint_pixels(painter: &mut impl TilePainter, pixels: &[(Point, ColorRGBA)], size: u32) {
    for &(center, color) in pixels {
        painter.paint_tile(center, color, size);
    }
}

fn warn_if_clipped(name: &str, shape: &ShapePlan, grid: Dimension) {
    let outside = shape.tiles_outside(grid);
    if outside > 0 {
        log::warn!(
            "{} of {} {} tiles lie outside the {}x{} grid",
            outside,
            shape.points.len(),
            name,
            grid.width,
            grid.height
        );
    }
}

/// Computes the requested shapes and paints them over the background grid.
///
/// Both shapes and all of their pixel positions are computed before
/// anything is painted, so an error leaves the painter untouched.
pub fn draw_dome(
    painter: &mut impl TilePainter,
    config: &RenderConfig,
    palette: &Palette,
    dome: &DomeDimensions,
) -> Result<DomePlan> {
    let grid_width = config.grid.width as i32;
    let grid_height = config.grid.height as i32;
    let mapper = config.mapper();

    let circle = if dome.circle {
        let center = point(grid_width.div_euclid(2), grid_height.div_euclid(2));
        Some(ShapePlan::circle(dome.radius)?.at(center))
    } else {
        None
    };

    let ellipse = if dome.ellipse {
        // sizes are validated, so the subtraction stays in range
        let plan = ShapePlan::ellipse(dome.height, dome.width)?;
        let corner = point(
            (grid_width - dome.width).div_euclid(2),
            (grid_height - dome.height).div_euclid(2),
        );
        Some(plan.at(corner))
    } else {
        None
    };

    let circle_pixels = match &circle {
        Some(circle) => circle.pixels(mapper, palette.circle_line, palette.circle_center)?,
        None => Vec::new(),
    };
    let ellipse_pixels = match &ellipse {
        Some(ellipse) => ellipse.pixels(mapper, palette.ellipse_line, palette.ellipse_center)?,
        None => Vec::new(),
    };

    GridRenderer::draw(painter, config, palette)?;
    if let Some(circle) = &circle {
        warn_if_clipped("circle", circle, config.grid);
        paint_pixels(painter, &circle_pixels, config.tile_size);
        log::debug!(
            "painted circle of radius {} with {} tiles",
            dome.radius,
            circle.points.len()
        );
    }
    if let Some(ellipse) = &ellipse {
        warn_if_clipped("ellipse", ellipse, config.grid);
        paint_pixels(painter, &ellipse_pixels, config.tile_size);
        log::debug!(
            "painted {}x{} ellipse with {} tiles",
            dome.width,
            dome.height,
            ellipse.points.len()
        );
    }

    Ok(DomePlan { circle, ellipse })
}
