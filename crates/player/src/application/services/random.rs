use std::sync::Arc;

use regresslab_domain::RandomSource;

use crate::ports::outbound::PlatformPort;

/// Feeds the platform RNG into domain shuffles.
#[derive(Clone)]
pub struct PlatformRandom {
    platform: Arc<dyn PlatformPort>,
}

impl PlatformRandom {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self { platform }
    }
}

impl RandomSource for PlatformRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.platform.random_index(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{create_memory_platform_with, MemoryStorageProvider};
    use regresslab_domain::{CodeBlock, OrderingExercise};

    #[test]
    fn ordering_uses_the_platform_sequence() {
        let platform: Arc<dyn PlatformPort> = Arc::new(create_memory_platform_with(
            MemoryStorageProvider::default(),
            vec![0],
        ));
        let blocks = vec![
            CodeBlock::new("a", "A", "a = 1"),
            CodeBlock::new("b", "B", "b = 2"),
            CodeBlock::new("c", "C", "c = 3"),
        ];
        let correct: Vec<String> = vec!["a".into(), "b".into(), "c".into()];

        let mut rng = PlatformRandom::new(platform);
        let exercise = OrderingExercise::new(blocks, correct, &mut rng).unwrap();

        // Always swapping with index 0 rotates the list left by one.
        assert_eq!(exercise.order(), ["b", "c", "a"]);
    }
}
