//! The d20 and its roll reveal schedule.

pub mod reveal;

pub use reveal::{RevealFrame, RevealSchedule};

use rand::Rng;

/// Number of faces on the check die.
pub const D20_SIDES: u32 = 20;

/// Roll one d20, uniformly in `1..=20`.
pub fn roll_d20<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(1..=D20_SIDES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let value = roll_d20(&mut rng);
            assert!((1..=20).contains(&value));
        }
    }

    #[test]
    fn every_face_appears() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 20];
        for _ in 0..2000 {
            seen[(roll_d20(&mut rng) - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(roll_d20(&mut a), roll_d20(&mut b));
        }
    }
}
