use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glyphcraft_blocks::MaterialCatalog;
use glyphcraft_edit::EditStore;
use glyphcraft_geom::BlockPos;
use glyphcraft_place::{PlaceConfig, PlaceSettings, Plane, agent_write, builder_place};

/// Decode glyph codes and lay them out in a block grid
#[derive(Parser)]
#[command(name = "glyphcraft", version)]
struct Cli {
    /// Placement config (.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print every occupied cell after placing
    #[arg(long, global = true)]
    list: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a code and describe its glyphs
    Inspect {
        /// Glyph code, or "-" to read stdin
        code: String,
    },
    /// Place a code cell by cell with the actor (thickness 1)
    Write {
        /// Glyph code, or "-" to read stdin
        code: String,
        #[arg(long, default_value = "wall")]
        plane: Plane,
        /// Origin as X,Y,Z (defaults to 0,0,0)
        #[arg(long, value_parser = parse_origin)]
        origin: Option<BlockPos>,
    },
    /// Place a code with range fills
    Place {
        /// Glyph code, or "-" to read stdin
        code: String,
        #[arg(long, default_value = "wall")]
        plane: Plane,
        /// Origin as X,Y,Z (defaults to 0,0,0)
        #[arg(long, value_parser = parse_origin)]
        origin: Option<BlockPos>,
        /// Extrusion depth in cells
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        thickness: i32,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => glyphcraft_place::load_config_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PlaceConfig::default(),
    };
    let catalog = cfg.catalog();
    let settings = cfg.resolve(&catalog)?;
    log::debug!(
        "material={} place_only_empty={} refill_interval={}",
        catalog.key_of(settings.material),
        settings.place_only_empty,
        settings.refill_interval
    );

    match cli.command {
        Command::Inspect { code } => cmd_inspect(&read_code(code)?),
        Command::Write {
            code,
            plane,
            origin,
        } => {
            let code = read_code(code)?;
            run_placement(&catalog, &settings, cli.list, |world, s| {
                agent_write(world, s, &code, plane, origin)
            })
        }
        Command::Place {
            code,
            plane,
            origin,
            thickness,
        } => {
            let code = read_code(code)?;
            run_placement(&catalog, &settings, cli.list, |world, s| {
                builder_place(world, s, &code, plane, origin, thickness)
            })
        }
    }
}

fn read_code(code: String) -> Result<String> {
    if code != "-" {
        return Ok(code);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading code from stdin")?;
    Ok(buf.trim().to_string())
}

fn parse_origin(s: &str) -> Result<BlockPos, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected X,Y,Z, got '{}'", s));
    };
    let num = |v: &str| v.parse::<i32>().map_err(|e| format!("bad coordinate '{}': {}", v, e));
    Ok(BlockPos::new(num(*x)?, num(*y)?, num(*z)?))
}

fn cmd_inspect(code: &str) -> Result<()> {
    let glyphs = glyphcraft_glyph::decode_code(code)?;
    println!("{} glyph(s)", glyphs.len());
    for (i, g) in glyphs.iter().enumerate() {
        println!(
            "  [{}] {}x{} set={} code={}",
            i,
            g.width(),
            g.height(),
            g.count_set(),
            g.to_code()
        );
    }
    Ok(())
}

fn run_placement<F>(
    catalog: &MaterialCatalog,
    settings: &PlaceSettings,
    list: bool,
    op: F,
) -> Result<()>
where
    F: FnOnce(&mut EditStore, &PlaceSettings) -> Result<usize, glyphcraft_glyph::DecodeError>,
{
    let mut world = EditStore::default();
    let placed = op(&mut world, settings)?;
    let stats = world.stats();
    println!(
        "placed {} cell(s) of {} ({} actor, {} unit, {} fill call(s))",
        placed,
        catalog.key_of(settings.material),
        stats.actor_placements,
        stats.unit_placements,
        stats.fill_calls
    );
    if list {
        for (p, m) in world.blocks() {
            println!("{} {} {} {}", p.x, p.y, p.z, catalog.key_of(m));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_parsing() {
        assert_eq!(parse_origin("1,-2, 3"), Ok(BlockPos::new(1, -2, 3)));
        assert!(parse_origin("1,2").is_err());
        assert!(parse_origin("1,2,z").is_err());
    }

    #[test]
    fn cli_parses_place() {
        let cli = Cli::try_parse_from([
            "glyphcraft",
            "place",
            "2x2:6",
            "--plane",
            "floor",
            "--origin",
            "4,5,6",
            "--thickness",
            "3",
        ])
        .unwrap();
        match cli.command {
            Command::Place {
                plane,
                origin,
                thickness,
                ..
            } => {
                assert_eq!(plane, Plane::Floor);
                assert_eq!(origin, Some(BlockPos::new(4, 5, 6)));
                assert_eq!(thickness, 3);
            }
            _ => panic!("expected place"),
        }
    }
}
