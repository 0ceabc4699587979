use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use isoffice_engine::logging::{init_logging, LoggingConfig};
use isoffice_scene::{export_tile_textures, Application, OfficeConfig};

/// Isometric office viewer.
///
/// Wheel zooms around the pointer, right or middle drag pans, `+` / `-` / `0`
/// step and reset the zoom, Escape or Q quits.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Window title
    #[arg(long, default_value = "isoffice")]
    title: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Starting zoom, within the camera limits
    #[arg(long)]
    zoom: Option<f32>,

    /// Log filter in env_logger syntax; falls back to RUST_LOG
    #[arg(long, env = "ISOFFICE_LOG")]
    log: Option<String>,

    /// Write the floor and carpet tile sprites as PNGs into DIR and exit
    #[arg(long, value_name = "DIR")]
    export_textures: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log,
        ..LoggingConfig::default()
    });

    let config = OfficeConfig::default();

    if let Some(dir) = cli.export_textures {
        let written = export_tile_textures(&config.palette, config.tile, &dir)?;
        log::info!("exported {} tile textures to {}", written.len(), dir.display());
        return Ok(());
    }

    let mut app = Application::new()
        .title(cli.title)
        .size(cli.width, cli.height)
        .config(config)
        .on_ready(|scene| {
            let camera = scene.camera();
            log::info!("office ready at zoom {:.2}", camera.zoom());
        });

    if let Some(zoom) = cli.zoom {
        app = app.zoom(zoom);
    }

    app.run()
}
