use anyhow::Result;
use clap::Parser;
use tracing::error;

mod config;
mod error;
mod oracle;

use config::Config;
use oracle::{
    check_complement, load_teams, render_matrix, FileMatrixSource, MatchFormat, ProbabilityCache,
    Team,
};

fn main() {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        // One-line diagnostic, no backtrace.
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    let teams = load_teams(&config.teams_path)?;

    let cache = ProbabilityCache::new(FileMatrixSource::new(
        config.bo1_matrix_path.clone(),
        config.bo3_matrix_path.clone(),
    ));

    // Assemble the full report before printing anything so a failure on the
    // second matrix can't leave a half-printed table behind.
    let mut report =
        String::from("Win matrix (row team vs. column team -> probability the row team wins):\n");
    let matrices = [
        (MatchFormat::Bo1, &config.bo1_matrix_path),
        (MatchFormat::Bo3, &config.bo3_matrix_path),
    ];
    for (format, path) in matrices {
        let matrix = cache.matrix(format)?;
        if config.check_complement {
            check_complement(matrix, &path.display().to_string())?;
        }
        report.push_str(&format!("\n{format}\n"));
        report.push_str(&render_matrix(matrix, &teams)?);
    }
    print!("{report}");

    // Spot queries hit the already-memoized matrices, not the files again.
    if let Some(pair) = config.probe.as_deref() {
        let a = find_team(&teams, &pair[0])?;
        let b = find_team(&teams, &pair[1])?;
        let bo1 = cache.win_probability(a, b, MatchFormat::Bo1)?;
        let bo3 = cache.win_probability(a, b, MatchFormat::Bo3)?;
        println!("\nP({a} beats {b}) = {bo1:.2} (BO1), {bo3:.2} (BO3)");
    }

    Ok(())
}

fn find_team<'a>(teams: &'a [Team], name: &str) -> Result<&'a Team> {
    teams
        .iter()
        .find(|t| t.name() == name)
        .ok_or_else(|| anyhow::anyhow!("unknown team: {name}"))
}
