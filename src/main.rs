use engine::{
    graphics::{canvas::ImageCanvas, dome, tiles::Palette},
    input::config::ProgramConfig,
    Error, Result,
};
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "domegen.ini";

fn init_logging() {
    simple_logger::SimpleLogger::new()
        .init()
        .expect("logger is only initialized once");
}

fn init_config(args: &[String]) -> Result<ProgramConfig> {
    let path = match args.iter().position(|arg| arg == "--config") {
        Some(index) => PathBuf::from(flag_value(args, index)?),
        None => PathBuf::from(DEFAULT_CONFIG_PATH),
    };
    let mut config = ProgramConfig::from_file(&path)?;
    apply_args(&mut config, args)?;

    log::set_max_level(config.log_level);
    Ok(config)
}

/// Command line flags override whatever the config file says
fn apply_args(config: &mut ProgramConfig, args: &[String]) -> Result<()> {
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--config" => index += 1,
            "--radius" => {
                config.dome.radius = parse_flag(args, index)?;
                index += 1;
            }
            "--width" => {
                config.dome.width = parse_flag(args, index)?;
                index += 1;
            }
            "--height" => {
                config.dome.height = parse_flag(args, index)?;
                index += 1;
            }
            "--zoom" => {
                config.tile_spacing = parse_flag(args, index)?;
                index += 1;
            }
            "--no-circle" => config.dome.circle = false,
            "--no-ellipse" => config.dome.ellipse = false,
            "--no-grid" => config.show_grid = false,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "unknown argument \"{}\"",
                    other
                )))
            }
        }
        index += 1;
    }
    Ok(())
}

fn flag_value(args: &[String], index: usize) -> Result<&str> {
    args.get(index + 1)
        .map(String::as_str)
        .ok_or_else(|| Error::InvalidArgument(format!("{} needs a value", args[index])))
}

fn parse_flag<T: std::str::FromStr>(args: &[String], index: usize) -> Result<T> {
    let value = flag_value(args, index)?;
    value.parse().map_err(|_| {
        Error::InvalidArgument(format!("bad value \"{}\" for {}", value, args[index]))
    })
}

fn run(config: &ProgramConfig) -> Result<()> {
    let render_config = config.render_config()?;
    let palette = Palette::default();
    log::info!(
        "Drawing dome on a {}x{} grid of {} pixel tiles",
        render_config.grid.width,
        render_config.grid.height,
        render_config.tile_spacing
    );

    let mut canvas = ImageCanvas::new(render_config.canvas, palette.clear);
    let plan = dome::draw_dome(&mut canvas, &render_config, &palette, &config.dome)?;
    canvas.save(&config.image_path)?;

    if let Some(plan_path) = &config.plan_path {
        std::fs::write(plan_path, serde_json::to_string_pretty(&plan)?)?;
        log::info!("Wrote plan \"{}\"", plan_path.display());
    }

    Ok(())
}

fn main() {
    /* Initialize */
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = match init_config(&args) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(2);
        }
    };

    /* Draw */
    if let Err(err) = run(&config) {
        log::error!("{}", err);
        std::process::exit(1);
    }

    if let Err(err) = config.write_to_disk() {
        log::warn!("Could not save config: {}", err);
    }
}
