//! Team-list and win-matrix loading.
//!
//! Both sources are plain JSON files supplied precomputed; nothing here
//! estimates probabilities. The team file's declared key order is significant:
//! it assigns ids (hence `serde_json/preserve_order`).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{DataError, Result};

use super::team::Team;

/// Win matrix: `matrix[a][b]` = probability that team `a` beats team `b`.
pub type WinMatrix = HashMap<String, HashMap<String, f64>>;

/// Tolerance for the complementarity audit: P(a,b) + P(b,a) must land within
/// this distance of 1.0.
const COMPLEMENT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Deserialize)]
struct TeamFile {
    teams: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TeamRecord {
    seed: u32,
}

/// Load the tournament team list.
///
/// Expects a top-level `teams` object mapping team name to a record with at
/// least a `seed` field. Ids are assigned by zero-based position in the
/// file's declared key order, so a reload of the same file always yields the
/// same ids.
pub fn load_teams(path: impl AsRef<Path>) -> Result<Vec<Team>> {
    let path = path.as_ref();
    let raw = read_source(path)?;
    let file: TeamFile = serde_json::from_str(&raw).map_err(|e| malformed(path, e))?;

    let mut teams = Vec::with_capacity(file.teams.len());
    for (id, (name, value)) in file.teams.into_iter().enumerate() {
        let record: TeamRecord = serde_json::from_value(value).map_err(|e| {
            malformed(path, format!("team entry '{name}': {e}"))
        })?;
        teams.push(Team::new(id as u32, name, record.seed));
    }

    info!("Loaded {} teams from {}", teams.len(), path.display());
    Ok(teams)
}

/// Load a win matrix (name -> name -> probability).
///
/// Every probability is bounds-checked into [0, 1]; an out-of-range value
/// fails the whole load rather than poisoning downstream lookups.
/// Complementarity is not enforced here — see [`check_complement`].
pub fn load_win_matrix(path: impl AsRef<Path>) -> Result<WinMatrix> {
    let path = path.as_ref();
    let raw = read_source(path)?;
    let matrix: WinMatrix = serde_json::from_str(&raw).map_err(|e| malformed(path, e))?;

    for (row, cols) in &matrix {
        for (col, p) in cols {
            if !(0.0..=1.0).contains(p) {
                return Err(malformed(
                    path,
                    format!("probability {p} for '{row}' vs '{col}' is outside [0, 1]"),
                ));
            }
        }
    }

    info!(
        "Loaded win matrix from {} ({} row teams)",
        path.display(),
        matrix.len()
    );
    Ok(matrix)
}

/// Audit that every pair present in both directions satisfies
/// P(a,b) + P(b,a) == 1 within tolerance. Pairs with only one direction
/// recorded are skipped — a missing reverse entry is a lookup-time concern,
/// not a load-time one. `source` labels the matrix in the error message.
pub fn check_complement(matrix: &WinMatrix, source: &str) -> Result<()> {
    for (a, cols) in matrix {
        for (b, p_ab) in cols {
            if a == b {
                continue;
            }
            if let Some(p_ba) = matrix.get(b).and_then(|c| c.get(a)) {
                let sum = p_ab + p_ba;
                if (sum - 1.0).abs() > COMPLEMENT_TOLERANCE {
                    return Err(DataError::Malformed {
                        path: source.to_string(),
                        reason: format!(
                            "P('{a}' beats '{b}') + P('{b}' beats '{a}') = {sum}, expected 1"
                        ),
                    });
                }
            }
        }
    }
    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataError::NotFound {
            path: path.display().to_string(),
        },
        _ => DataError::Io {
            path: path.display().to_string(),
            source: e,
        },
    })
}

fn malformed(path: &Path, reason: impl ToString) -> DataError {
    DataError::Malformed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn teams_get_ids_in_declared_key_order() {
        // Keys deliberately not alphabetical: ids must follow file order.
        let file = write_fixture(
            r#"{"teams": {
                "Vitality": {"seed": 1},
                "Spirit":   {"seed": 2},
                "MOUZ":     {"seed": 3},
                "Aurora":   {"seed": 12}
            }}"#,
        );

        let teams = load_teams(file.path()).unwrap();
        let names: Vec<&str> = teams.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["Vitality", "Spirit", "MOUZ", "Aurora"]);
        for (i, team) in teams.iter().enumerate() {
            assert_eq!(team.id(), i as u32);
        }
        assert_eq!(teams[3].seed(), 12);
    }

    #[test]
    fn missing_team_file_is_not_found() {
        let err = load_teams("no/such/file.json").unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }), "got {err:?}");
    }

    #[test]
    fn invalid_json_is_malformed() {
        let file = write_fixture("{not json");
        let err = load_teams(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Malformed { .. }), "got {err:?}");
    }

    #[test]
    fn missing_teams_key_is_malformed() {
        let file = write_fixture(r#"{"squads": {}}"#);
        let err = load_teams(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Malformed { .. }), "got {err:?}");
    }

    #[test]
    fn team_entry_without_seed_is_malformed() {
        let file = write_fixture(r#"{"teams": {"Vitality": {"rank": 1}}}"#);
        let err = load_teams(file.path()).unwrap_err();
        match err {
            DataError::Malformed { reason, .. } => {
                assert!(reason.contains("Vitality"), "reason should name the entry: {reason}")
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn matrix_round_trips_and_complements_hold() {
        let file = write_fixture(
            r#"{
                "Vitality": {"Spirit": 0.58, "MOUZ": 0.64},
                "Spirit":   {"Vitality": 0.42, "MOUZ": 0.55},
                "MOUZ":     {"Vitality": 0.36, "Spirit": 0.45}
            }"#,
        );

        let matrix = load_win_matrix(file.path()).unwrap();
        assert_relative_eq!(
            matrix["Vitality"]["Spirit"] + matrix["Spirit"]["Vitality"],
            1.0,
            epsilon = 1e-9
        );
        check_complement(&matrix, "fixture").unwrap();
    }

    #[test]
    fn out_of_range_probability_is_malformed() {
        let file = write_fixture(r#"{"Vitality": {"Spirit": 1.58}}"#);
        let err = load_win_matrix(file.path()).unwrap_err();
        match err {
            DataError::Malformed { reason, .. } => {
                assert!(reason.contains("1.58"), "reason should show the value: {reason}")
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn missing_matrix_file_is_not_found() {
        let err = load_win_matrix("no/such/matrix.json").unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }), "got {err:?}");
    }

    #[test]
    fn complement_violation_is_flagged() {
        let mut matrix = WinMatrix::new();
        matrix.insert(
            "Vitality".into(),
            HashMap::from([("Spirit".to_string(), 0.60)]),
        );
        matrix.insert(
            "Spirit".into(),
            HashMap::from([("Vitality".to_string(), 0.50)]),
        );
        let err = check_complement(&matrix, "fixture").unwrap_err();
        assert!(matches!(err, DataError::Malformed { .. }), "got {err:?}");
    }

    #[test]
    fn complement_skips_one_directional_pairs() {
        let mut matrix = WinMatrix::new();
        matrix.insert(
            "Vitality".into(),
            HashMap::from([("Spirit".to_string(), 0.60)]),
        );
        check_complement(&matrix, "fixture").unwrap();
    }
}
