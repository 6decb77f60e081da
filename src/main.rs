//! Popover placement CLI
//!
//! Usage:
//!   popover-placement [OPTIONS] [SCENE]
//!
//! Options:
//!   -p, --placement <SPEC>  Placement string, e.g. "bottom-left" or "auto top"
//!   -a, --anchor <ID>       Anchor element id
//!   -t, --target <ID>       Panel element id
//!   -c, --config <FILE>     Placement configuration (TOML format)
//!   -f, --format <FORMAT>   Output format: text or toml
//!   -d, --debug             Log placement decisions to stderr
//!   -h, --help              Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use popover_placement::{place_in_scene, Error, Placement, PlacementConfig, Request, Scene};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Toml,
}

#[derive(Parser)]
#[command(name = "popover-placement")]
#[command(about = "Compute popover panel and arrow coordinates for a scene")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    scene: Option<PathBuf>,

    /// Placement string, overriding the scene's `placement`
    #[arg(short, long)]
    placement: Option<String>,

    /// Anchor element id, overriding the scene's `anchor`
    #[arg(short, long)]
    anchor: Option<String>,

    /// Panel element id, overriding the scene's `target`
    #[arg(short, long)]
    target: Option<String>,

    /// Placement configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Debug mode: log offset-parent, flip and placement decisions
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => match PlacementConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => PlacementConfig::default(),
    };

    // Read scene
    let source = match &cli.scene {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let scene = match Scene::from_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let request = Request {
        anchor: cli.anchor,
        target: cli.target,
        placement: cli.placement,
    };

    match place_in_scene(&scene, &request, &config) {
        Ok(placement) => match render(&placement, cli.format) {
            Ok(output) => print!("{}", output),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Err(Error::Placement(e)) => {
            eprint!("{}", e.format("placement"));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn render(placement: &Placement, format: Format) -> Result<String, toml::ser::Error> {
    match format {
        Format::Text => {
            let [axis_class, placement_class] = placement.resolved.css_classes();
            Ok(format!(
                "placement: {}\nclasses: {} {}\n{}\n",
                placement.resolved, axis_class, placement_class, placement.result
            ))
        }
        Format::Toml => toml::to_string(placement),
    }
}
