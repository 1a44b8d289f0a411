//! Concrete problems that plug into the search engines.

mod grid_maze;
mod weighted_graph;

pub use grid_maze::{Direction, GridMaze, MazeError, MazePreset, Position, Tile, ROUGH_TILE_COST};
pub use weighted_graph::{EdgeSpec, GraphError, GraphSpec, WeightedGraph};
