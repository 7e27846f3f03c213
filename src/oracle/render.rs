//! Fixed-width table rendering for win matrices.
//!
//! Pure formatting: no I/O, and the whole table is produced or nothing is —
//! a matrix entry missing for the given team list fails the render before
//! any output exists.

use crate::error::{DataError, Result};

use super::loader::WinMatrix;
use super::team::Team;

/// Width of every column in characters, row-label column included.
const COLUMN_WIDTH: usize = 10;

/// Corner cell of the header row ("team").
const CORNER_LABEL: &str = "队伍";

/// Render `matrix` as an aligned table over `teams`: a header row of names,
/// a dash separator, then one row per team with `-` on the diagonal and each
/// off-diagonal probability to two decimal places. Labels longer than the
/// column allows are truncated with a `...` marker.
pub fn render_matrix(matrix: &WinMatrix, teams: &[Team]) -> Result<String> {
    let mut out = String::new();

    let mut header = center(CORNER_LABEL, COLUMN_WIDTH);
    for team in teams {
        header.push_str(&center(&fit_label(team.name()), COLUMN_WIDTH));
    }
    out.push_str(&header);
    out.push('\n');

    out.push_str(&"-".repeat(COLUMN_WIDTH * (teams.len() + 1)));
    out.push('\n');

    for row_team in teams {
        let mut row = center(&fit_label(row_team.name()), COLUMN_WIDTH);
        for col_team in teams {
            if row_team == col_team {
                // Self-matchup is undefined.
                row.push_str(&center("-", COLUMN_WIDTH));
            } else {
                let p = matrix
                    .get(row_team.name())
                    .and_then(|cols| cols.get(col_team.name()))
                    .ok_or_else(|| missing_entry(matrix, row_team, col_team))?;
                row.push_str(&center(&format!("{p:.2}"), COLUMN_WIDTH));
            }
        }
        out.push_str(&row);
        out.push('\n');
    }

    Ok(out)
}

/// Name the team whose side of the pair is absent: the row team if it has no
/// row at all, otherwise the column team missing from that row.
fn missing_entry(matrix: &WinMatrix, row_team: &Team, col_team: &Team) -> DataError {
    let team = if matrix.contains_key(row_team.name()) {
        col_team.name()
    } else {
        row_team.name()
    };
    DataError::MissingData {
        team: team.to_string(),
    }
}

/// Truncate a label so it always fits the fixed column width: names longer
/// than `COLUMN_WIDTH - 2` chars keep their first `COLUMN_WIDTH - 3` chars
/// plus a `...` marker.
fn fit_label(name: &str) -> String {
    if name.chars().count() > COLUMN_WIDTH - 2 {
        let head: String = name.chars().take(COLUMN_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Center `text` in a cell of `width` characters, extra padding going right.
/// Counts chars, not bytes, so the CJK corner label stays in step with the
/// ASCII cells.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}
