mod script;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use terra_camera::Camera;
use terra_common::{ConfigError, ViewerConfig};
use terra_render::{DebugTextRenderer, FrameTransforms, Projection, Renderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "terra-cli", about = "Headless tools for the terra viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file; defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the starting camera
    Info,
    /// Print the effective configuration as YAML
    Config {
        /// Config file to load and validate instead of the global --config
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Replay a flight script and print the resulting camera and matrices
    Fly {
        /// Steps such as "forward=0.5 look=10,-5 right=0.25"
        #[arg(short, long, default_value = "")]
        steps: String,
        /// Print the camera state as JSON instead of the text dump
        #[arg(long)]
        json: bool,
    },
}

/// Load `path` if given, otherwise fall back to the defaults.
fn load_config(path: Option<&Path>) -> Result<ViewerConfig, ConfigError> {
    match path {
        Some(path) => ViewerConfig::load(path),
        None => Ok(ViewerConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("terra-cli v{}", env!("CARGO_PKG_VERSION"));
            let camera = Camera::from_config(&config.camera);
            let p = camera.position();
            println!(
                "camera: position=({:.2}, {:.2}, {:.2}) yaw={:.1} pitch={:.1}",
                p.x,
                p.y,
                p.z,
                camera.yaw(),
                camera.pitch()
            );
            println!(
                "projection: fov={:.0} near={} far={}",
                config.projection.fov_y_degrees, config.projection.near, config.projection.far
            );
        }
        Commands::Config { path } => {
            let config = match path {
                Some(path) => load_config(Some(&path))?,
                None => config,
            };
            print!("{}", config.to_yaml()?);
        }
        Commands::Fly { steps, json } => {
            let steps = script::parse(&steps)?;
            let mut camera = Camera::from_config(&config.camera);
            script::run(&mut camera, &steps);
            tracing::info!(steps = steps.len(), "flight complete");

            if json {
                println!("{}", serde_json::to_string_pretty(&camera.state())?);
            } else {
                let projection = Projection::new(
                    &config.projection,
                    config.window.width,
                    config.window.height,
                );
                let frame = FrameTransforms::new(&camera, &projection);
                print!("{}", DebugTextRenderer::new().render(&frame, &camera));
            }
        }
    }

    Ok(())
}
