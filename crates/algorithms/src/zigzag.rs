//! Rail fence zigzag traversal
//!
//! Walks `(rail, column)` coordinates for text of length `len` written
//! diagonally across `rails` rails: start on rail 0 heading down, turn
//! around at the bottom rail and again at the top.

/// Iterator over the zigzag coordinates, one per column
#[derive(Debug, Clone)]
pub struct ZigZag {
    rails: usize,
    len: usize,
    col: usize,
    rail: usize,
    descending: bool,
}

impl ZigZag {
    /// Coordinates for `len` columns over `rails` rails
    ///
    /// A single rail (or none) yields every column on rail 0.
    pub fn new(rails: usize, len: usize) -> Self {
        Self {
            rails,
            len,
            col: 0,
            rail: 0,
            descending: true,
        }
    }

    /// Number of coordinates that land on each rail
    pub fn rail_counts(rails: usize, len: usize) -> Vec<usize> {
        let mut counts = vec![0; rails.max(1)];
        for (rail, _) in Self::new(rails, len) {
            counts[rail] += 1;
        }
        counts
    }
}

impl Iterator for ZigZag {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.col >= self.len {
            return None;
        }

        let item = (self.rail, self.col);
        self.col += 1;

        if self.rails > 1 {
            if self.rail == 0 {
                self.descending = true;
            } else if self.rail == self.rails - 1 {
                self.descending = false;
            }

            if self.descending {
                self.rail += 1;
            } else {
                self.rail -= 1;
            }
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.col;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ZigZag {}
