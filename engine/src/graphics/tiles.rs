use crate::error::{Error, Result};
use crate::geometry::{point, Dimension, Point};

/// rgba
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRGBA(pub u8, pub u8, pub u8, pub u8);

impl ColorRGBA {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorRGBA(r, g, b, 255)
    }
}

/// Colors used when painting a dome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub clear: ColorRGBA,
    pub background_tile: ColorRGBA,
    pub circle_line: ColorRGBA,
    pub ellipse_line: ColorRGBA,
    pub circle_center: ColorRGBA,
    pub ellipse_center: ColorRGBA,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            clear: ColorRGBA::rgb(0x00, 0x00, 0x00),
            background_tile: ColorRGBA::rgb(0xff, 0xff, 0xff),
            circle_line: ColorRGBA::rgb(0x00, 0x00, 0x00),
            ellipse_line: ColorRGBA::rgb(0x99, 0x99, 0x99),
            circle_center: ColorRGBA::rgb(0xd0, 0x00, 0x00),
            ellipse_center: ColorRGBA::rgb(0x00, 0x00, 0xd0),
        }
    }
}

/// Something that can fill a single square tile
pub trait TilePainter {
    /// Fill a `size` wide square centered on the pixel position `center`
    fn paint_tile(&mut self, center: Point, color: ColorRGBA, size: u32);
}

/// Tile grid layout derived from the canvas size and zoom level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Pixel distance between two neighbouring tile centers
    pub tile_spacing: u32,
    /// Painted size of a tile, one pixel less than the spacing when the grid
    /// lines are shown
    pub tile_size: u32,
    /// Grid size in tiles
    pub grid: Dimension,
    pub canvas: Dimension,
    pub show_grid: bool,
}

impl RenderConfig {
    /// Pixel positions are `i32`, so the spacing and the canvas size must
    /// not exceed `i32::MAX`.
    pub fn new(canvas: Dimension, tile_spacing: u32, show_grid: bool) -> Result<Self> {
        if tile_spacing == 0 || tile_spacing > i32::MAX as u32 {
            return Err(Error::InvalidArgument(format!(
                "tile spacing must be between 1 and {} pixels, got {}",
                i32::MAX,
                tile_spacing
            )));
        }
        if canvas.width > i32::MAX as u32 || canvas.height > i32::MAX as u32 {
            return Err(Error::InvalidArgument(format!(
                "canvas {}x{} is too large",
                canvas.width, canvas.height
            )));
        }

        Ok(RenderConfig {
            tile_spacing,
            tile_size: tile_size(tile_spacing, show_grid),
            grid: Dimension {
                width: tiles_across(canvas.width, tile_spacing),
                height: tiles_across(canvas.height, tile_spacing),
            },
            canvas,
            show_grid,
        })
    }

    pub fn with_zoom(self, tile_spacing: u32) -> Result<Self> {
        RenderConfig::new(self.canvas, tile_spacing, self.show_grid)
    }

    pub fn with_canvas(self, canvas: Dimension) -> Result<Self> {
        RenderConfig::new(canvas, self.tile_spacing, self.show_grid)
    }

    pub fn with_grid(self, show_grid: bool) -> Self {
        RenderConfig {
            tile_size: tile_size(self.tile_spacing, show_grid),
            show_grid,
            ..self
        }
    }

    pub fn mapper(&self) -> TileMapper {
        TileMapper {
            spacing: self.tile_spacing as i32,
        }
    }
}

fn tile_size(tile_spacing: u32, show_grid: bool) -> u32 {
    if show_grid {
        tile_spacing - 1
    } else {
        tile_spacing
    }
}

/// Number of tiles fitting in `length` pixels, rounded to nearest
fn tiles_across(length: u32, tile_spacing: u32) -> u32 {
    let (length, tile_spacing) = (u64::from(length), u64::from(tile_spacing));
    ((2 * length + tile_spacing) / (2 * tile_spacing)) as u32
}

/// Converts tile coordinates to the pixel position of the tile's center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileMapper {
    pub spacing: i32,
}

impl TileMapper {
    /// Fails when the tile lies too far out to have an `i32` pixel position
    pub fn to_pixel(&self, coord: Point, center_offset: Point) -> Result<Point> {
        let to_pixel_axis = |tile: i32, offset: i32| {
            tile.checked_add(offset)?
                .checked_mul(self.spacing)?
                .checked_add(self.spacing / 2)
        };

        match (
            to_pixel_axis(coord.x, center_offset.x),
            to_pixel_axis(coord.y, center_offset.y),
        ) {
            (Some(x), Some(y)) => Ok(point(x, y)),
            _ => Err(Error::InvalidArgument(format!(
                "tile {} offset by {} is out of pixel range at spacing {}",
                coord, center_offset, self.spacing
            ))),
        }
    }

    pub fn paint(
        &self,
        painter: &mut impl TilePainter,
        coord: Point,
        center_offset: Point,
        color: ColorRGBA,
        size: u32,
    ) -> Result<()> {
        painter.paint_tile(self.to_pixel(coord, center_offset)?, color, size);
        Ok(())
    }
}

pub struct GridRenderer;

impl GridRenderer {
    /// Paint every tile of the grid in the background color. Nothing is
    /// painted if the far corner tile has no pixel position.
    pub fn draw(
        painter: &mut impl TilePainter,
        config: &RenderConfig,
        palette: &Palette,
    ) -> Result<()> {
        let mapper = config.mapper();
        let (width, height) = (config.grid.width as i32, config.grid.height as i32);
        if width > 0 && height > 0 {
            mapper.to_pixel(point(width - 1, height - 1), Point::ZERO)?;
        }

        for x in 0..width {
            for y in 0..height {
                mapper.paint(
                    painter,
                    point(x, y),
                    Point::ZERO,
                    palette.background_tile,
                    config.tile_size,
                )?;
            }
        }
        log::trace!("painted {}x{} background tiles", width, height);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::geometry::dimension;

    /// Remembers every painted tile instead of drawing it
    #[derive(Debug, Default)]
    pub(crate) struct RecordingPainter {
        pub tiles: Vec<(Point, ColorRGBA, u32)>,
    }

    impl TilePainter for RecordingPainter {
        fn paint_tile(&mut self, center: Point, color: ColorRGBA, size: u32) {
            self.tiles.push((center, color, size));
        }
    }

    #[test]
    fn grid_dimensions_are_rounded() {
        let config = RenderConfig::new(dimension(800, 600), 40, true).unwrap();
        assert_eq!(config.grid, dimension(20, 15));
        assert_eq!(config.tile_size, 39);

        // 830 / 40 = 20.75, 610 / 40 = 15.25
        let config = RenderConfig::new(dimension(830, 610), 40, true).unwrap();
        assert_eq!(config.grid, dimension(21, 15));
    }

    #[parameterized(length = { 0, 5, 10, 15, 19 }, expected = { 0, 1, 1, 2, 2 })]
    fn half_tiles_round_up(length: u32, expected: u32) {
        assert_eq!(tiles_across(length, 10), expected);
    }

    #[parameterized(
        canvas = {
            dimension(800, 600),
            dimension(800, 600),
            dimension(800, 600),
            dimension(i32::MAX as u32 + 1, 600),
            dimension(800, u32::MAX)
        },
        spacing = { 0, i32::MAX as u32 + 1, u32::MAX, 40, 40 }
    )]
    fn out_of_range_layout_is_rejected(canvas: Dimension, spacing: u32) {
        assert!(matches!(
            RenderConfig::new(canvas, spacing, true),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn largest_layout_is_accepted() {
        let max = i32::MAX as u32;

        let config = RenderConfig::new(dimension(max, max), max, false).unwrap();

        assert_eq!(config.grid, dimension(1, 1));
        assert_eq!(config.mapper().spacing, i32::MAX);
    }

    #[test]
    fn zooming_recomputes_grid() {
        let config = RenderConfig::new(dimension(800, 600), 40, true).unwrap();

        let zoomed = config.with_zoom(20).unwrap();

        assert_eq!(zoomed.grid, dimension(40, 30));
        assert_eq!(zoomed.tile_size, 19);
        assert_eq!(zoomed.canvas, config.canvas);
    }

    #[test]
    fn resizing_recomputes_grid() {
        let config = RenderConfig::new(dimension(800, 600), 40, false).unwrap();

        let resized = config.with_canvas(dimension(400, 400)).unwrap();

        assert_eq!(resized.grid, dimension(10, 10));
        assert_eq!(resized.tile_size, 40);
    }

    #[test]
    fn hiding_grid_lines_fills_whole_spacing() {
        let config = RenderConfig::new(dimension(800, 600), 40, true).unwrap();

        let hidden = config.with_grid(false);
        assert_eq!(hidden.tile_size, 40);
        assert_eq!(hidden.grid, config.grid);

        assert_eq!(hidden.with_grid(true), config);
    }

    #[test]
    fn tile_coordinates_map_to_tile_centers() {
        let mapper = TileMapper { spacing: 40 };

        assert_eq!(mapper.to_pixel(point(0, 0), Point::ZERO).unwrap(), point(20, 20));
        assert_eq!(mapper.to_pixel(point(2, -1), Point::ZERO).unwrap(), point(100, -20));
        assert_eq!(mapper.to_pixel(point(-1, 1), point(10, 7)).unwrap(), point(380, 340));
    }

    #[parameterized(
        coord = { point(3000, 0), point(0, -3000), point(i32::MAX, 0), point(2147, 0) },
        offset = { Point::ZERO, Point::ZERO, point(1, 0), Point::ZERO }
    )]
    fn far_tiles_have_no_pixel_position(coord: Point, offset: Point) {
        let mapper = TileMapper { spacing: 1_000_000 };
        let mut painter = RecordingPainter::default();

        let result = mapper.paint(&mut painter, coord, offset, ColorRGBA::rgb(0, 0, 0), 1);

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(painter.tiles.is_empty());
    }

    #[test]
    fn last_tile_in_pixel_range_is_mapped() {
        let mapper = TileMapper { spacing: 1_000_000 };

        // 2147 * 1_000_000 + 500_000 > i32::MAX
        let last = mapper.to_pixel(point(2146, -2147), Point::ZERO).unwrap();

        assert_eq!(last, point(2_146_500_000, -2_146_500_000));
    }

    #[test]
    fn grid_paints_every_tile_once() {
        let config = RenderConfig::new(dimension(120, 80), 40, true).unwrap();
        let mut painter = RecordingPainter::default();

        GridRenderer::draw(&mut painter, &config, &Palette::default()).unwrap();

        let centers = painter.tiles.iter().map(|t| t.0).collect::<Vec<Point>>();
        assert_eq!(
            centers,
            [
                point(20, 20),
                point(20, 60),
                point(60, 20),
                point(60, 60),
                point(100, 20),
                point(100, 60),
            ]
        );
        for (_, color, size) in &painter.tiles {
            assert_eq!(*color, Palette::default().background_tile);
            assert_eq!(*size, 39);
        }
    }

    #[test]
    fn largest_grid_stays_in_pixel_range() {
        let max = i32::MAX as u32;
        let config = RenderConfig::new(dimension(max, max), 1_000_000_000, true).unwrap();
        let mut painter = RecordingPainter::default();

        GridRenderer::draw(&mut painter, &config, &Palette::default()).unwrap();

        assert_eq!(config.grid, dimension(2, 2));
        assert_eq!(painter.tiles.len(), 4);
        assert_eq!(painter.tiles[3].0, point(1_500_000_000, 1_500_000_000));
    }
}
