//! Navigation on a 4-connected grid. Cells are open, walls, or rough terrain
//! that costs more to enter. The heuristic is the Manhattan distance to the
//! goal, which never overestimates since every step costs at least one.

use crate::search::{Cost, HeuristicSearchProblem, SearchNode, SearchProblem, Successor};
use ordered_float::OrderedFloat;
use std::fmt;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Cost of moving into a rough tile. Moving into an open tile costs one.
pub const ROUGH_TILE_COST: f64 = 3.;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Open,
    Wall,
    Rough,
}

impl Tile {
    fn entry_cost(&self) -> Option<Cost> {
        match self {
            Tile::Open => Some(OrderedFloat(1.)),
            Tile::Rough => Some(OrderedFloat(ROUGH_TILE_COST)),
            Tile::Wall => None,
        }
    }
}

/// Moves in the order successors are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze has no rows")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {character:?} at {position}")]
    UnexpectedCharacter { character: char, position: Position },
    #[error("expected exactly one {marker:?} marker, found {found}")]
    MarkerCount { marker: char, found: usize },
    #[error("{what} position {position} is outside the maze")]
    OutOfBounds {
        what: &'static str,
        position: Position,
    },
    #[error("{what} position {position} is a wall")]
    Blocked {
        what: &'static str,
        position: Position,
    },
    #[error("failed to read maze file: {0}")]
    Io(#[from] std::io::Error),
}

/// Built-in mazes, mostly built to mislead greedy search.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[clap(rename_all = "kebab-case")]
pub enum MazePreset {
    #[clap(help = "5x5 without walls, start and goal in opposite corners.")]
    Open,
    #[clap(help = "5x5 with a horizontal wall between start and goal.")]
    Deceptive1,
    #[clap(help = "5x5 with two walls forcing a zig-zag.")]
    Deceptive2,
    #[clap(help = "4x4 with a vertical wall between start and goal.")]
    Deceptive3,
    #[clap(help = "Deceptive3 with an extra wall making an L shape.")]
    Deceptive4,
}

impl MazePreset {
    fn text(&self) -> &'static str {
        match self {
            MazePreset::Open => {
                "....G\n\
                 .....\n\
                 .....\n\
                 .....\n\
                 S...."
            }
            MazePreset::Deceptive1 => {
                "..G..\n\
                 .....\n\
                 .###.\n\
                 .....\n\
                 ..S.."
            }
            MazePreset::Deceptive2 => {
                "....G\n\
                 .####\n\
                 .....\n\
                 .###.\n\
                 ..S.."
            }
            MazePreset::Deceptive3 => {
                "..#.\n\
                 S.#G\n\
                 ..#.\n\
                 ...."
            }
            MazePreset::Deceptive4 => {
                "..#.\n\
                 S.#G\n\
                 .##.\n\
                 ...."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMaze {
    tiles: Vec<Vec<Tile>>,
    start: Position,
    goal: Position,
}

impl GridMaze {
    pub fn new(tiles: Vec<Vec<Tile>>, start: Position, goal: Position) -> Result<Self, MazeError> {
        let width = tiles.first().map(Vec::len).ok_or(MazeError::Empty)?;
        if width == 0 {
            return Err(MazeError::Empty);
        }
        for (row, tiles_in_row) in tiles.iter().enumerate() {
            if tiles_in_row.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found: tiles_in_row.len(),
                });
            }
        }

        let maze = Self { tiles, start, goal };
        for (what, position) in [("start", start), ("goal", goal)] {
            match maze.tile(position) {
                None => return Err(MazeError::OutOfBounds { what, position }),
                Some(Tile::Wall) => return Err(MazeError::Blocked { what, position }),
                Some(_) => {}
            }
        }
        Ok(maze)
    }

    /// Parse a maze from text, one line per row: `.` open, `#` wall, `~`
    /// rough, `S` start and `G` goal. Leading and trailing whitespace on each
    /// line and blank lines are ignored.
    pub fn from_text(text: &str) -> Result<Self, MazeError> {
        let mut tiles = vec![];
        let mut starts = vec![];
        let mut goals = vec![];

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row = tiles.len();
            let mut tiles_in_row = Vec::with_capacity(line.len());
            for (col, character) in line.chars().enumerate() {
                let tile = match character {
                    '.' => Tile::Open,
                    '#' => Tile::Wall,
                    '~' => Tile::Rough,
                    'S' => {
                        starts.push(Position::new(row, col));
                        Tile::Open
                    }
                    'G' => {
                        goals.push(Position::new(row, col));
                        Tile::Open
                    }
                    _ => {
                        return Err(MazeError::UnexpectedCharacter {
                            character,
                            position: Position::new(row, col),
                        })
                    }
                };
                tiles_in_row.push(tile);
            }
            tiles.push(tiles_in_row);
        }

        let start = single_marker('S', &starts)?;
        let goal = single_marker('G', &goals)?;
        Self::new(tiles, start, goal)
    }

    pub fn from_path(path: &Path) -> Result<Self, MazeError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn preset(preset: MazePreset) -> Self {
        Self::from_text(preset.text()).expect("Preset mazes are well formed")
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    pub fn width(&self) -> usize {
        self.tiles[0].len()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.tiles
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    /// The cell reached by moving in the given direction, if it is inside
    /// the maze.
    fn neighbour(&self, position: Position, direction: Direction) -> Option<Position> {
        let (d_row, d_col) = direction.offset();
        let row = position.row.checked_add_signed(d_row)?;
        let col = position.col.checked_add_signed(d_col)?;
        (row < self.height() && col < self.width()).then(|| Position::new(row, col))
    }
}

fn single_marker(marker: char, found: &[Position]) -> Result<Position, MazeError> {
    match found {
        [position] => Ok(*position),
        _ => Err(MazeError::MarkerCount {
            marker,
            found: found.len(),
        }),
    }
}

impl SearchProblem<Position, Direction> for GridMaze {
    type Key = Position;

    fn initial_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn expand(&self, node: &SearchNode<Position, Direction>) -> Vec<Successor<Position, Direction>> {
        let position = *node.get_state();
        Direction::iter()
            .filter_map(|direction| {
                let next = self.neighbour(position, direction)?;
                let cost = self.tile(next)?.entry_cost()?;
                Some(Successor::new(next, direction, cost))
            })
            .collect()
    }

    fn hashable_state(&self, state: &Position) -> Position {
        *state
    }
}

impl HeuristicSearchProblem<Position, Direction> for GridMaze {
    fn estimated_cost(&self, state: &Position) -> Cost {
        OrderedFloat(state.manhattan_distance(&self.goal) as f64)
    }
}
