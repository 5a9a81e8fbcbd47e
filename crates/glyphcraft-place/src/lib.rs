//! Glyph placement into a block grid: coordinate mapping, layout, and the
//! two placement strategies.
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod layout;
pub mod mapper;

pub use config::{ConfigError, PlaceConfig, PlaceSettings, load_config_from_path};
pub use engine::{Strategy, place};
pub use layout::{GLYPH_GAP, PlacementRun};
pub use mapper::{Plane, extrusion, map_cell};

use glyphcraft_edit::WorldAccess;
use glyphcraft_geom::BlockPos;
use glyphcraft_glyph::{DecodeError, Glyph, decode_code};

/// Has the actor write `code` one cell at a time. `None` origin means the grid origin.
pub fn agent_write<W: WorldAccess + ?Sized>(
    world: &mut W,
    settings: &PlaceSettings,
    code: &str,
    plane: Plane,
    origin: Option<BlockPos>,
) -> Result<usize, DecodeError> {
    let glyphs = decode_or_report(world, code)?;
    Ok(place(
        world,
        settings,
        &glyphs,
        plane,
        origin.unwrap_or(BlockPos::ORIGIN),
        Strategy::Point,
    ))
}

/// Writes `code` with range fills, `thickness` cells deep (at least 1).
/// `None` origin means the grid origin.
pub fn builder_place<W: WorldAccess + ?Sized>(
    world: &mut W,
    settings: &PlaceSettings,
    code: &str,
    plane: Plane,
    origin: Option<BlockPos>,
    thickness: i32,
) -> Result<usize, DecodeError> {
    let glyphs = decode_or_report(world, code)?;
    Ok(place(
        world,
        settings,
        &glyphs,
        plane,
        origin.unwrap_or(BlockPos::ORIGIN),
        Strategy::Bulk {
            thickness: thickness.max(1),
        },
    ))
}

fn decode_or_report<W: WorldAccess + ?Sized>(
    world: &mut W,
    code: &str,
) -> Result<Vec<Glyph>, DecodeError> {
    decode_code(code).inspect_err(|e| {
        log::warn!(target: "place", "rejected code: {}", e);
        world.report_message(&e.to_string());
    })
}
