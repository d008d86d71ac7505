//! Lumen - Triangle mesh ingestion for the Lumen renderer
//!
//! Loads either the built-in reference scene or an external mesh file and
//! reports (or exports) the resulting triangle list.

mod settings;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glam::Vec3;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use lumen_core::{Aabb, Triangle};
use settings::Settings;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Load renderer geometry from the reference scene or a mesh file", long_about = None)]
struct Cli {
    /// Settings file (default: ~/.config/lumen/settings.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the built-in reference scene
    Scene {
        /// Write the triangles to this file as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Load a mesh file and rescale it into the target volume
    Load {
        /// Mesh file to read
        mesh: PathBuf,
        /// Texture to color faces from (default: loader.default_texture)
        #[arg(short, long)]
        texture: Option<PathBuf>,
        /// Min corner of the target volume, as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        min: Option<Vec3>,
        /// Max corner of the target volume, as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        max: Option<Vec3>,
        /// Write the triangles to this file as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Print the effective settings as TOML
    Config {
        /// Also write them to the settings file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (settings, source) = Settings::load(cli.config.as_deref());

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(settings.logging.level())
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    source.log();

    match cli.command {
        Commands::Scene { json } => {
            let triangles = lumen_scene::load_reference_scene();
            report("reference scene", &triangles);
            if let Some(path) = json {
                export_json(&path, &triangles)?;
            }
        }
        Commands::Load {
            mesh,
            texture,
            min,
            max,
            json,
        } => {
            let texture = texture
                .or_else(|| settings.loader.default_texture.clone())
                .context("No texture given and loader.default_texture is not set")?;

            let defaults = settings.loader.target();
            let target = Aabb::new(min.unwrap_or(defaults.min), max.unwrap_or(defaults.max));

            let (triangles, stats) = lumen_assets::load_mesh_with_stats(&mesh, &texture, target)
                .with_context(|| format!("Failed to load mesh {}", mesh.display()))?;
            info!(
                "{} texture coordinates, {} faces skipped",
                stats.tex_coords, stats.skipped
            );

            report(&mesh.display().to_string(), &triangles);
            if let Some(path) = json {
                export_json(&path, &triangles)?;
            }
        }
        Commands::Config { write } => {
            print!("{}", toml::to_string_pretty(&settings)?);
            if write {
                let path = match cli.config {
                    Some(path) => path,
                    None => Settings::default_path()
                        .context("Could not determine config directory")?,
                };
                settings.save(&path)?;
            }
        }
    }

    Ok(())
}

/// Print a one-line summary of a triangle list
fn report(name: &str, triangles: &[Triangle]) {
    let bounds = Aabb::from_points(
        triangles
            .iter()
            .flat_map(|t| t.vertices())
            .map(|v| v.truncate()),
    );
    if bounds.is_empty() {
        println!("{}: no triangles", name);
    } else {
        println!(
            "{}: {} triangles, bounds {:?} .. {:?}",
            name,
            triangles.len(),
            bounds.min.to_array(),
            bounds.max.to_array()
        );
    }
}

fn export_json(path: &Path, triangles: &[Triangle]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), triangles)?;
    info!("Wrote {} triangles to {}", triangles.len(), path.display());
    Ok(())
}

/// Parse `x,y,z` into a vector
fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got '{}'", s));
    };
    let parse = |v: &str| v.parse::<f32>().map_err(|e| format!("'{}': {}", v, e));
    Ok(Vec3::new(parse(*x)?, parse(*y)?, parse(*z)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vec3_accepts_triples() {
        assert_eq!(parse_vec3("1,-2.5, 3").unwrap(), Vec3::new(1.0, -2.5, 3.0));
    }

    #[test]
    fn parse_vec3_rejects_bad_input() {
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,2,3,4").is_err());
        assert!(parse_vec3("a,b,c").is_err());
    }

    #[test]
    fn cli_parses_load_command() {
        let cli = Cli::try_parse_from([
            "lumen", "load", "bunny.obj", "-t", "fur.png", "--min", "-2,-2,-2", "--max", "2,2,2",
        ])
        .unwrap();
        match cli.command {
            Commands::Load {
                mesh,
                texture,
                min,
                max,
                json,
            } => {
                assert_eq!(mesh, PathBuf::from("bunny.obj"));
                assert_eq!(texture, Some(PathBuf::from("fur.png")));
                assert_eq!(min, Some(Vec3::splat(-2.0)));
                assert_eq!(max, Some(Vec3::splat(2.0)));
                assert_eq!(json, None);
            }
            _ => panic!("expected load command"),
        }
    }

    #[test]
    fn scene_exports_as_json() {
        let triangles = lumen_scene::load_reference_scene();
        let text = serde_json::to_string(&triangles).unwrap();
        let parsed: Vec<Triangle> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), lumen_scene::REFERENCE_TRIANGLE_COUNT);
    }
}
