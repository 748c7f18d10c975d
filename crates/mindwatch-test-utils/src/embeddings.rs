//! Raw embedding generators.
//!
//! Raw embeddings have no fixed length; encoders standardize and resize
//! whatever they receive. These helpers cover the shapes tests care about:
//! smooth deterministic signals, constants and uniform noise.

use rand::Rng;

/// Deterministic sine-wave embedding. Same `(len, seed)` gives the same vector.
pub fn generate_embedding(len: usize, seed: u64) -> Vec<f32> {
    (0..len)
        .map(|i| ((i as f64 + seed as f64) * 0.1).sin() as f32)
        .collect()
}

/// `len` copies of `value`.
pub fn uniform_embedding(value: f32, len: usize) -> Vec<f32> {
    vec![value; len]
}

/// `pattern` repeated `times` times, e.g. `[0.1..=1.0]` twice.
pub fn repeat_pattern(pattern: &[f32], times: usize) -> Vec<f32> {
    pattern.iter().copied().cycle().take(pattern.len() * times).collect()
}

/// Uniform random values in `[-1, 1)`.
pub fn random_embedding(len: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_embedding_is_deterministic() {
        assert_eq!(generate_embedding(32, 7), generate_embedding(32, 7));
        assert_ne!(generate_embedding(32, 7), generate_embedding(32, 8));
    }

    #[test]
    fn test_repeat_pattern() {
        let v = repeat_pattern(&[1.0, 2.0], 3);
        assert_eq!(v, vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_random_embedding_range() {
        let v = random_embedding(200);
        assert_eq!(v.len(), 200);
        assert!(v.iter().all(|x| (-1.0..1.0).contains(x)));
    }
}
