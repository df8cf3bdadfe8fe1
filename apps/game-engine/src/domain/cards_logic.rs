//! Card game logic: trump-aware comparison and table queries

use super::cards_types::{Card, Suit};

/// Whether `a` beats `b` under `trump`.
///
/// A trump beats any non-trump and a non-trump never beats a trump.
/// Otherwise the higher rank wins, whatever the suits.
pub fn beats(a: Card, b: Card, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    a.rank > b.rank
}

pub fn hand_has_card(hand: &[Card], card: Card) -> bool {
    hand.contains(&card)
}

/// Remove one copy of `card` from `hand`. Returns false if absent.
pub fn remove_card(hand: &mut Vec<Card>, card: Card) -> bool {
    match hand.iter().position(|&c| c == card) {
        Some(idx) => {
            hand.remove(idx);
            true
        }
        None => false,
    }
}
