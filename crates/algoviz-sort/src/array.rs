use algoviz_core::{ConfigError, VisualizerConfig};
use rand::{Rng, RngExt};

/// Smallest value [`random_array`] produces.
pub const VALUE_MIN: i32 = 10;
/// One past the largest value [`random_array`] produces.
pub const VALUE_MAX: i32 = 290;

/// `size` values drawn uniformly from `[VALUE_MIN, VALUE_MAX)`.
pub fn random_array(size: usize, rng: &mut impl Rng) -> Vec<i32> {
    (0..size)
        .map(|_| rng.random_range(VALUE_MIN..VALUE_MAX))
        .collect()
}

/// A random array of the configured size, after validating `config`.
pub fn array_for(config: &VisualizerConfig, rng: &mut impl Rng) -> Result<Vec<i32>, ConfigError> {
    config.validate()?;
    Ok(random_array(config.array_size, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn values_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = random_array(1000, &mut rng);
        assert_eq!(a.len(), 1000);
        assert!(a.iter().all(|v| (VALUE_MIN..VALUE_MAX).contains(v)));
    }

    #[test]
    fn same_seed_same_array() {
        let a = random_array(50, &mut StdRng::seed_from_u64(9));
        let b = random_array(50, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn config_size_is_checked() {
        let mut rng = rand::rng();
        let cfg = VisualizerConfig::default();
        assert_eq!(array_for(&cfg, &mut rng).unwrap().len(), 50);
        let bad = VisualizerConfig {
            array_size: 5,
            ..VisualizerConfig::default()
        };
        assert!(matches!(
            array_for(&bad, &mut rng),
            Err(ConfigError::OutOfRange { name: "array_size", .. })
        ));
    }
}
