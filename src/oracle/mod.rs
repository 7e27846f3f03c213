pub mod cache;
pub mod loader;
pub mod render;
pub mod team;

pub use cache::{FileMatrixSource, MatchFormat, MatrixSource, ProbabilityCache};
pub use loader::{check_complement, load_teams, load_win_matrix, WinMatrix};
pub use render::render_matrix;
pub use team::Team;
