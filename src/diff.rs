/// Appended to every cell that differs from the previous run.
pub const CHANGE_MARKER: &str = " (changed)";

/// Compare new rows with the previous run cell by cell (same row index, same column).
///
/// Returns a copy of `new` where each changed cell carries [`CHANGE_MARKER`]. Every cell is
/// marked when there are no prior rows or when the new row-set is longer than the prior one.
pub fn diff_rows(new: &[Vec<String>], prior: Option<&[Vec<String>]>) -> Vec<Vec<String>> {
    let prior = match prior {
        Some(p) if new.len() <= p.len() => p,
        _ => return new.iter().map(|row| row.iter().map(|c| mark(c)).collect()).collect(),
    };

    new.iter()
        .zip(prior)
        .map(|(row, old)| {
            row.iter()
                .enumerate()
                .map(|(c, cell)| {
                    if old.get(c) == Some(cell) {
                        cell.clone()
                    } else {
                        mark(cell)
                    }
                })
                .collect()
        })
        .collect()
}

fn mark(cell: &str) -> String {
    format!("{cell}{CHANGE_MARKER}")
}

pub fn count_changes(rows: &[Vec<String>]) -> usize {
    rows.iter()
        .flatten()
        .filter(|cell| cell.ends_with(CHANGE_MARKER))
        .count()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn identical_has_no_markers() {
        let a = rows(&[&["MacBook", "macOS 15.6"], &["iPad", "iPadOS 18.6"]]);
        let out = diff_rows(&a, Some(a.as_slice()));
        assert_eq!(out, a);
        assert_eq!(count_changes(&out), 0);
    }

    #[test]
    fn single_changed_cell() {
        let old = rows(&[&["MacBook", "macOS 15.6"], &["iPad", "iPadOS 18.6"]]);
        let new = rows(&[&["MacBook", "macOS 15.7"], &["iPad", "iPadOS 18.6"]]);
        let out = diff_rows(&new, Some(old.as_slice()));
        assert_eq!(out[0][1], "macOS 15.7 (changed)");
        assert_eq!(count_changes(&out), 1);
    }

    #[test]
    fn no_prior_marks_everything() {
        let new = rows(&[&["MacBook", "macOS 15.6"]]);
        let out = diff_rows(&new, None);
        assert_eq!(count_changes(&out), 2);
    }

    #[test]
    fn longer_new_set_marks_every_cell() {
        let old = rows(&[&["MacBook", "macOS 15.6"]]);
        let new = rows(&[&["MacBook", "macOS 15.6"], &["iPad", "iPadOS 18.6"]]);
        let out = diff_rows(&new, Some(old.as_slice()));
        assert_eq!(out[0][0], "MacBook (changed)");
        assert_eq!(count_changes(&out), 4);
    }

    #[test]
    fn wider_new_row_marks_extra_column() {
        let old = rows(&[&["MacBook"]]);
        let new = rows(&[&["MacBook", "macOS 15.6"]]);
        let out = diff_rows(&new, Some(old.as_slice()));
        assert_eq!(out[0][0], "MacBook");
        assert_eq!(out[0][1], "macOS 15.6 (changed)");
    }
}
