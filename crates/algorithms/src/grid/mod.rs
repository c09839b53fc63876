//! Keyed columnar transposition
//!
//! Text is laid row-major into a grid with one column per key character.
//! The last row may be short, which leaves the trailing columns one cell
//! shorter than the rest. Columns are then read top to bottom in the order
//! given by a stable sort of the key characters.
//!
//! Decryption has to rebuild the exact column lengths from nothing but the
//! text length and the key. [`column_lengths`] is the single place where
//! that happens; both the Columnar and ADFGVX ciphers go through it.

use tracing::debug;


/// Column read order for a key: column indices sorted by key character
///
/// The sort is stable, so equal key characters keep their left-to-right
/// order.
pub fn column_order(key: &[char]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..key.len()).collect();
    order.sort_by_key(|&col| key[col]);
    order
}

/// Length of every column, listed in read order
///
/// With `n` symbols and `cols` columns the grid has `rows = ceil(n / cols)`
/// rows. The last row holds `n - cols * (rows - 1)` symbols in its leftmost
/// columns, so the rightmost `cols * rows - n` columns of the grid are one
/// short. `order` maps read position to grid column; entry `i` of the result
/// is the length of column `order[i]`.
pub fn column_lengths(text_len: usize, order: &[usize]) -> Vec<usize> {
    let cols = order.len();
    if cols == 0 {
        return Vec::new();
    }

    let rows = text_len.div_ceil(cols);
    let short = cols * rows - text_len;
    let first_short = cols - short;

    order
        .iter()
        .map(|&col| if col >= first_short { rows - 1 } else { rows })
        .collect()
}

/// A transposition key: its column count and read order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedColumns {
    order: Vec<usize>,
}

impl KeyedColumns {
    /// Derive the column order from a key; the key may be any string
    pub fn new(key: &str) -> Self {
        let key: Vec<char> = key.chars().collect();
        let order = column_order(&key);
        debug!(columns = order.len(), "derived column order");
        Self { order }
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.order.len()
    }

    /// Read order (read position to grid column)
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Read the grid column by column in key order
    ///
    /// With zero columns the text is returned unchanged.
    pub fn transpose(&self, text: &[char]) -> String {
        let cols = self.columns();
        if cols == 0 {
            return text.iter().collect();
        }

        let mut out = String::with_capacity(text.len());
        for &col in &self.order {
            // Column `col` holds every `cols`-th symbol starting at `col`
            out.extend(text.iter().skip(col).step_by(cols));
        }
        out
    }

    /// Rebuild the grid from its columns and read it back row-major
    ///
    /// With zero columns the text is returned unchanged.
    pub fn untranspose(&self, text: &[char]) -> String {
        let cols = self.columns();
        if cols == 0 {
            return text.iter().collect();
        }

        let lengths = column_lengths(text.len(), &self.order);
        let empty: &[char] = &[];
        let mut grid = vec![empty; cols];
        let mut rest = text;
        for (&col, &len) in self.order.iter().zip(&lengths) {
            let (column, tail) = rest.split_at(len);
            grid[col] = column;
            rest = tail;
        }

        let rows = text.len().div_ceil(cols);
        let mut out = String::with_capacity(text.len());
        for row in 0..rows {
            out.extend(grid.iter().filter_map(|column| column.get(row)));
        }
        out
    }
}
