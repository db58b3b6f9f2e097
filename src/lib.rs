use bevy::app::{App, Plugin};
use bevy::log::info;

pub mod config;
pub mod core;

pub use crate::config::GridConfig;
pub use crate::core::*;

/// Registers the grid configuration, the shape catalog and a piece generator
/// drawing from it. Resources inserted before the plugin are kept.
pub struct PiecesPlugin;

impl Plugin for PiecesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GridConfig>()
            .init_resource::<ShapeCatalog>();

        if !app.world.contains_resource::<PieceGenerator>() {
            let count = app.world.resource::<ShapeCatalog>().len();
            app.insert_resource(PieceGenerator::new(count));
        }

        let grid = app.world.resource::<GridConfig>();
        info!("pieces ready on a {}x{} grid", grid.width, grid.height);
    }
}
