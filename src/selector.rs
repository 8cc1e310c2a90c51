//! Picks which card answers the question.

use rand::RngExt;

use crate::deck;

/// Chooses a card id for each question.
pub trait CardSelector: Send + Sync {
    fn draw(&self) -> &'static str;
}

/// Uniform draw with replacement over the whole deck. Keeps no state, so the
/// same card can come up twice in a row.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl RandomSelector {
    /// Draw using a caller-supplied RNG (seeded in tests).
    pub fn draw_from<R: RngExt + ?Sized>(rng: &mut R) -> &'static str {
        let cards = deck::cards();
        cards[rng.random_range(0..cards.len())].id
    }
}

impl CardSelector for RandomSelector {
    fn draw(&self) -> &'static str {
        Self::draw_from(&mut rand::rng())
    }
}

/// Always draws the same card. For tests and reproducible demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub &'static str);

impl CardSelector for FixedSelector {
    fn draw(&self) -> &'static str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn draw_returns_a_deck_id() {
        for _ in 0..200 {
            assert!(deck::get(RandomSelector.draw()).is_some());
        }
    }

    #[test]
    fn draws_are_close_to_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws = deck::DECK_SIZE * 1_000;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(RandomSelector::draw_from(&mut rng)).or_default() += 1;
        }

        // Every card shows up, and none strays far from the expected 1000.
        assert_eq!(counts.len(), deck::DECK_SIZE);
        for (id, count) in counts {
            assert!((800..=1200).contains(&count), "card {id} drawn {count} times");
        }
    }

    #[test]
    fn fixed_selector_repeats() {
        let selector = FixedSelector("17");
        assert_eq!(selector.draw(), "17");
        assert_eq!(selector.draw(), "17");
    }
}
