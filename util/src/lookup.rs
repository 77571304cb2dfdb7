use std::{collections::HashMap, sync::LazyLock};

use crate::{
    bitboard::Bitboard,
    square::{File, Rank, Square},
};

static SQUARE_TABLE: LazyLock<SquareTable> = LazyLock::new(SquareTable::build);

/// Labels for all 64 squares, indexed by square, plus the reverse map.
///
/// Built on first use and never written again.
#[derive(Debug)]
pub struct SquareTable {
    labels: Vec<String>,
    by_label: HashMap<String, Square>,
}

impl SquareTable {
    pub fn get() -> &'static Self {
        &SQUARE_TABLE
    }

    fn build() -> Self {
        let mut labels = Vec::with_capacity(Square::COUNT);
        let mut by_label = HashMap::with_capacity(Square::COUNT);

        for rank in Rank::ALL.iter().rev() {
            for file in File::ALL {
                let sq = Square::from_rank_file(*rank, file);
                debug_assert_eq!(sq.idx(), labels.len());

                let label = format!("{}{}", file.to_char(), rank.to_char());
                by_label.insert(label.clone(), sq);
                labels.push(label);
            }
        }
        log::debug!("built square table with {} entries", labels.len());

        Self { labels, by_label }
    }

    pub fn label(&'static self, sq: Square) -> &'static str {
        &self.labels[sq.idx()]
    }

    pub fn square(&self, label: &str) -> Option<Square> {
        self.by_label.get(label).copied()
    }

    /// `(mask, label)` pairs in square order, a8 first.
    pub fn entries(&'static self) -> impl Iterator<Item = (Bitboard, &'static str)> {
        Square::ALL
            .into_iter()
            .map(|sq| (sq.bitboard(), self.label(sq)))
    }
}

pub fn mask_to_label_code() -> String {
    format!(
        "pub const MASK_TO_LABEL: [(u64, &str); 64] = [\n{}];\n",
        SquareTable::get()
            .entries()
            .fold(String::new(), |mut acc, (bb, label)| {
                acc += &format!("    ({}, \"{}\"),\n", bb.0, label);
                acc
            })
    )
}

pub fn label_to_mask_code() -> String {
    format!(
        "pub const LABEL_TO_MASK: [(&str, u64); 64] = [\n{}];\n",
        SquareTable::get()
            .entries()
            .fold(String::new(), |mut acc, (bb, label)| {
                acc += &format!("    (\"{}\", {}),\n", label, bb.0);
                acc
            })
    )
}
