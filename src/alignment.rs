//! Smith-Waterman local alignment scoring.
//!
//! Only the optimal score is computed; no alignment path is reconstructed.
//! Characters are compared exactly (case-sensitive, per Unicode scalar value),
//! so callers wanting case-insensitive scores must normalize first.

use crate::config::AlignmentParams;

/// Local-alignment score of `s1` against `s2`.
///
/// A mismatch costs `match_reward`, each gap costs `gap_cost`. Cells are
/// floored at zero, so the result is never negative. Either string empty
/// yields 0.
pub fn smith_waterman(s1: &str, s2: &str, match_reward: u32, gap_cost: u32) -> u64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    local_alignment(&a, &b, match_reward, match_reward, gap_cost)
}

/// Smith-Waterman scorer bound to a parameter set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmithWaterman {
    params: AlignmentParams,
}

impl SmithWaterman {
    pub fn new(params: AlignmentParams) -> Self {
        Self { params }
    }

    pub fn score(&self, s1: &str, s2: &str) -> u64 {
        let a: Vec<char> = s1.chars().collect();
        let b: Vec<char> = s2.chars().collect();
        local_alignment(
            &a,
            &b,
            self.params.match_reward,
            self.params.mismatch_penalty(),
            self.params.gap_cost,
        )
    }
}

// Two rolling rows of H; the running maximum is the score.
fn local_alignment(a: &[char], b: &[char], reward: u32, mismatch: u32, gap: u32) -> u64 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let reward = i64::from(reward);
    let mismatch = i64::from(mismatch);
    let gap = i64::from(gap);

    let mut prev_row = vec![0i64; b.len() + 1];
    let mut curr_row = vec![0i64; b.len() + 1];
    let mut best = 0i64;

    for &ca in a {
        curr_row[0] = 0;
        for (j, &cb) in b.iter().enumerate() {
            let diag = prev_row[j] + if ca == cb { reward } else { -mismatch };
            let up = prev_row[j + 1] - gap;
            let left = curr_row[j] - gap;

            let cell = diag.max(up).max(left).max(0);
            curr_row[j + 1] = cell;
            best = best.max(cell);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    best as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        for s in ["a", "Messi", "Cristiano Ronaldo", "Ødegaard"] {
            assert_eq!(smith_waterman(s, s, 2, 1), 2 * s.chars().count() as u64);
        }
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(smith_waterman("", "", 2, 1), 0);
        assert_eq!(smith_waterman("", "Pele", 2, 1), 0);
        assert_eq!(smith_waterman("Pele", "", 5, 3), 0);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("GATTACA", "GCATGCU"),
            ("Ronaldo", "Ronaldinho"),
            ("Jon Doe", "John Doe"),
            ("abc", "xyz"),
        ];
        for (a, b) in pairs {
            assert_eq!(smith_waterman(a, b, 2, 1), smith_waterman(b, a, 2, 1));
        }
    }

    #[test]
    fn test_gattaca() {
        // mismatch = -2, gap = -1
        assert_eq!(smith_waterman("GATTACA", "GCATGCU", 2, 1), 5);

        // Free mismatches reproduce the commonly quoted 6
        let free_mismatch = AlignmentParams::default().with_mismatch_penalty(0);
        assert_eq!(SmithWaterman::new(free_mismatch).score("GATTACA", "GCATGCU"), 6);
    }

    #[test]
    fn test_substring_alignment() {
        assert_eq!(smith_waterman("Messi", "Lionel Messi", 2, 1), 10);
        assert_eq!(smith_waterman("Ronaldo", "Ronaldinho", 2, 1), 12);
        assert_eq!(smith_waterman("abc", "xyz", 2, 1), 0);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(smith_waterman("messi", "MESSI", 2, 1), 0);
    }

    #[test]
    fn test_scorer_matches_free_function() {
        let scorer = SmithWaterman::default();
        assert_eq!(
            scorer.score("Jon Doe", "John Doe"),
            smith_waterman("Jon Doe", "John Doe", 2, 1)
        );
        assert_eq!(scorer.score("Jon Doe", "John Doe"), 13);
    }
}
