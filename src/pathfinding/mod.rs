pub mod bfs;
pub mod path;

pub use bfs::{ensure_solvable, find_path, open_distance, path_exists, search, Terrain};
pub use path::Path;
