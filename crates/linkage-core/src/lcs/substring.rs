//! Dynamic-programming longest common substring search

/// Location of a common substring within two sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstringMatch {
    pub len: usize,
    /// Start offset in the first sequence
    pub start_a: usize,
    /// Start offset in the second sequence
    pub start_b: usize,
}

impl SubstringMatch {
    pub fn range_a(&self) -> std::ops::Range<usize> {
        self.start_a..self.start_a + self.len
    }

    pub fn range_b(&self) -> std::ops::Range<usize> {
        self.start_b..self.start_b + self.len
    }
}

/// Find the longest common substring of `a` and `b`.
///
/// Cell `(i, j)` holds the length of the common run ending at `a[i]` and
/// `b[j]`. Cells are visited row by row and only a strictly longer run
/// replaces the best so far, so among equally long runs the first one in
/// row-major order wins. Only the previous row is kept; the values are the
/// same as in the full table.
///
/// Returns `None` when the sequences share no element.
pub fn longest_common_substring<T: PartialEq>(a: &[T], b: &[T]) -> Option<SubstringMatch> {
    let mut longest = 0;
    let mut end_a = 0;
    let mut end_b = 0;

    let mut prev = vec![0usize; b.len()];
    let mut row = vec![0usize; b.len()];

    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            row[j] = if ca != cb {
                0
            } else if i == 0 || j == 0 {
                1
            } else {
                prev[j - 1] + 1
            };

            if row[j] > longest {
                longest = row[j];
                end_a = i;
                end_b = j;
            }
        }
        std::mem::swap(&mut prev, &mut row);
    }

    if longest == 0 {
        return None;
    }

    Some(SubstringMatch {
        len: longest,
        start_a: end_a + 1 - longest,
        start_b: end_b + 1 - longest,
    })
}
