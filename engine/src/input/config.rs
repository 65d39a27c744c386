use std::path::{Path, PathBuf};

use configparser::ini::Ini;
use log::LevelFilter;

use crate::error::{Error, Result};
use crate::geometry::{dimension, Dimension};
use crate::graphics::{dome::DomeDimensions, tiles::RenderConfig};

pub struct ProgramConfig {
    pub canvas: Dimension,
    pub tile_spacing: u32,
    pub show_grid: bool,
    pub dome: DomeDimensions,
    pub image_path: PathBuf,
    pub plan_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    config: Ini,
    path: PathBuf,
}

impl ProgramConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = Ini::new();
        if path.exists() {
            config.load(path).map_err(Error::Config)?;
        }

        let log_level = match config.get("Log", "Level") {
            Some(level) => level
                .parse()
                .map_err(|_| Error::Config(format!("unknown log level \"{}\"", level)))?,
            None => LevelFilter::Info,
        };

        Ok(ProgramConfig {
            canvas: dimension(
                get_u32(&config, "Canvas", "Width", 800)?,
                get_u32(&config, "Canvas", "Height", 600)?,
            ),
            tile_spacing: get_u32(&config, "Grid", "Spacing", 40)?,
            show_grid: get_bool(&config, "Grid", "Show", true)?,
            dome: DomeDimensions {
                circle: get_bool(&config, "Dome", "Circle", true)?,
                ellipse: get_bool(&config, "Dome", "Ellipse", true)?,
                radius: get_i32(&config, "Dome", "Radius", 6)?,
                width: get_i32(&config, "Dome", "Width", 10)?,
                height: get_i32(&config, "Dome", "Height", 6)?,
            },
            image_path: config
                .get("Output", "Image")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dome.png")),
            plan_path: config.get("Output", "Plan").map(PathBuf::from),
            log_level,
            config,
            path: PathBuf::from(path),
        })
    }

    pub fn render_config(&self) -> Result<RenderConfig> {
        RenderConfig::new(self.canvas, self.tile_spacing, self.show_grid)
    }

    pub fn write_to_disk(&mut self) -> Result<()> {
        let values = [
            ("Canvas", "Width", Some(self.canvas.width.to_string())),
            ("Canvas", "Height", Some(self.canvas.height.to_string())),
            ("Grid", "Spacing", Some(self.tile_spacing.to_string())),
            ("Grid", "Show", Some(self.show_grid.to_string())),
            ("Dome", "Circle", Some(self.dome.circle.to_string())),
            ("Dome", "Ellipse", Some(self.dome.ellipse.to_string())),
            ("Dome", "Radius", Some(self.dome.radius.to_string())),
            ("Dome", "Width", Some(self.dome.width.to_string())),
            ("Dome", "Height", Some(self.dome.height.to_string())),
            ("Output", "Image", Some(self.image_path.display().to_string())),
            ("Log", "Level", Some(self.log_level.to_string())),
        ];
        for (section, key, value) in values {
            self.config.set(section, key, value);
        }
        if let Some(plan_path) = &self.plan_path {
            self.config
                .set("Output", "Plan", Some(plan_path.display().to_string()));
        }

        self.config.write(&self.path)?;
        log::debug!("Saved config to \"{}\"", self.path.display());
        Ok(())
    }
}

fn get_bool(config: &Ini, section: &str, key: &str, default: bool) -> Result<bool> {
    let value = config.getbool(section, key).map_err(Error::Config)?;
    Ok(value.unwrap_or(default))
}

fn get_u32(config: &Ini, section: &str, key: &str, default: u32) -> Result<u32> {
    match config.getuint(section, key).map_err(Error::Config)? {
        Some(value) => u32::try_from(value)
            .map_err(|_| Error::Config(format!("[{}] {} is too large", section, key))),
        None => Ok(default),
    }
}

fn get_i32(config: &Ini, section: &str, key: &str, default: i32) -> Result<i32> {
    match config.getint(section, key).map_err(Error::Config)? {
        Some(value) => i32::try_from(value)
            .map_err(|_| Error::Config(format!("[{}] {} is out of range", section, key))),
        None => Ok(default),
    }
}
