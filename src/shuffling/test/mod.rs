//! Tests for shuffling.

#[cfg(test)]
mod tests {
    use crate::oracle;
    use crate::registry::Category;
    use crate::shuffling::code::*;
    use crate::shuffling::shuffle_deck;
    use crate::utils::OpCounter;
    use crate::value::{Input, Output};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn deal(seed: u64) -> Vec<String> {
        shuffle_deck(seed, &mut OpCounter::unbounded()).unwrap()
    }

    #[test]
    fn test_standard_deck() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.iter().collect::<HashSet<_>>().len(), 52);
        assert_eq!(deck[0], "A♠");
        assert_eq!(deck[51], "K♣");
        assert!(deck.contains(&"A♥".to_string()));
        assert!(deck.contains(&"10♦".to_string()));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        for seed in [0, 1, 42, u64::MAX] {
            let output = Output::Deck(deal(seed));
            assert!(
                oracle::check(Category::Shuffling, &Input::Seed(seed), &output),
                "seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_same_seed_same_deck() {
        assert_eq!(deal(7), deal(7));
        assert_ne!(deal(7), deal(8));
        assert_ne!(deal(7), standard_deck());
    }

    #[test]
    fn test_one_swap_per_position() {
        let mut ops = OpCounter::unbounded();
        shuffle_deck(3, &mut ops).unwrap();
        assert_eq!(ops.count(), 51);
    }

    #[test]
    fn test_small_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = vec![];
        fisher_yates(&mut empty, &mut rng, &mut OpCounter::unbounded()).unwrap();
        assert!(empty.is_empty());

        let mut single = vec![9];
        fisher_yates(&mut single, &mut rng, &mut OpCounter::unbounded()).unwrap();
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_positions_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(0x5A0F);
        let mut first = [0u32; 4];
        for _ in 0..4000 {
            let mut items = [0usize, 1, 2, 3];
            fisher_yates(&mut items, &mut rng, &mut OpCounter::unbounded()).unwrap();
            first[items[0]] += 1;
        }
        for count in first {
            assert!((800..1200).contains(&count), "{:?}", first);
        }
    }
}
