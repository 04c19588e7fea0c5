use breakable_rope::cli::seed::resolve_seed;
use rand::Rng;
use rope_sim::random::{RopeRandom, SEED_ENV};

/// The only test in this binary that touches the environment.
#[test]
fn seed_resolution_order() {
    let previous = std::env::var(SEED_ENV).ok();
    // SAFETY: no other test in this binary reads or writes the environment.
    unsafe { std::env::set_var(SEED_ENV, "77") };

    let cli = resolve_seed(Some(42));
    let env = resolve_seed(None);

    unsafe {
        match previous {
            Some(value) => std::env::set_var(SEED_ENV, value),
            None => std::env::remove_var(SEED_ENV),
        }
    }
    assert_eq!(cli, 42, "--seed beats ROPE_SEED");
    assert_eq!(env, 77);
}

#[test]
fn rope_rng_is_deterministic_for_same_seed() {
    let mut a = RopeRandom::new(42);
    let mut b = RopeRandom::new(42);

    let sample =
        |rng: &mut RopeRandom| -> Vec<usize> { (0..8).map(|_| rng.rng().random_range(0..3)).collect() };

    assert_eq!(sample(&mut a), sample(&mut b), "same seed should yield identical picks");
    assert_eq!(a.seed(), 42);
}
