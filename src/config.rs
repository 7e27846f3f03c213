use std::path::PathBuf;

use clap::Parser;

/// CS2 Major Pick'Em win-probability oracle
#[derive(Parser, Debug, Clone)]
#[command(name = "pickem-oracle", version, about)]
pub struct Config {
    /// Path to the tournament team list (JSON with a top-level `teams` object)
    #[arg(long, env = "TEAMS_PATH", default_value = "data/teams.json")]
    pub teams_path: PathBuf,

    /// Path to the single-game (BO1) win matrix
    #[arg(long, env = "BO1_MATRIX_PATH", default_value = "data/winrate.json")]
    pub bo1_matrix_path: PathBuf,

    /// Path to the best-of-three (BO3) win matrix
    #[arg(long, env = "BO3_MATRIX_PATH", default_value = "data/winrate-bo3.json")]
    pub bo3_matrix_path: PathBuf,

    /// Audit each matrix for P(a,b) + P(b,a) == 1 after loading
    #[arg(long, env = "CHECK_COMPLEMENT", default_value = "false")]
    pub check_complement: bool,

    /// Print the pairwise win probabilities for two named teams
    #[arg(long, value_name = "TEAM", num_args = 2)]
    pub probe: Option<Vec<String>>,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bo1_matrix_path == self.bo3_matrix_path {
            anyhow::bail!(
                "BO1 and BO3 matrices must be distinct files (both set to {})",
                self.bo1_matrix_path.display()
            );
        }
        Ok(())
    }
}
