//! Edit-distance table over token sequences

/// Dynamic-programming table of token edit distances.
///
/// `get(i, j)` is the minimum number of token insertions, deletions and
/// substitutions needed to turn the first `i` old tokens into the first `j`
/// new tokens. Stored row-major in a single allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl AlignmentMatrix {
    /// Fill the table bottom-up in O(n·m)
    pub fn build(old: &[&str], new: &[&str]) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j;
        }
        for i in 1..rows {
            cells[i * cols] = i;
            for j in 1..cols {
                let diag = cells[(i - 1) * cols + j - 1];
                cells[i * cols + j] = if old[i - 1] == new[j - 1] {
                    diag
                } else {
                    let up = cells[(i - 1) * cols + j];
                    let left = cells[i * cols + j - 1];
                    1 + up.min(left).min(diag)
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of rows (old token count + 1)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (new token count + 1)
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// Edit distance between the two full sequences
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borders() {
        let m = AlignmentMatrix::build(&["a", " ", "b"], &["c", " ", "d", " ", "e"]);
        assert_eq!(m.rows(), 4);
        assert_eq!(m.cols(), 6);
        for j in 0..m.cols() {
            assert_eq!(m.get(0, j), j);
        }
        for i in 0..m.rows() {
            assert_eq!(m.get(i, 0), i);
        }
    }

    #[test]
    fn test_distance() {
        let m = AlignmentMatrix::build(&["hello", " ", "world"], &["hello", " ", "earth"]);
        assert_eq!(m.distance(), 1);

        let m = AlignmentMatrix::build(&["a", " ", "b", " ", "c"], &["a", " ", "c"]);
        assert_eq!(m.distance(), 2);
    }

    #[test]
    fn test_empty() {
        let m = AlignmentMatrix::build(&[], &[]);
        assert_eq!(m.distance(), 0);

        let m = AlignmentMatrix::build(&[], &["x", " ", "y"]);
        assert_eq!(m.distance(), 3);
    }

    #[test]
    fn test_equal_tokens_carry_diagonal() {
        let m = AlignmentMatrix::build(&["x", "y"], &["z", "y"]);
        assert_eq!(m.get(2, 2), m.get(1, 1));
    }
}
