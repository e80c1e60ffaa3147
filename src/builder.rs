use crate::traits::ScanPolicy;
use crate::StackEngine;

pub struct StackEngineBuilder<P: ScanPolicy> {
    policy: P,
    capacity: Option<usize>,
}

impl<P: ScanPolicy> StackEngineBuilder<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            capacity: None,
        }
    }
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
    pub fn build(self) -> StackEngine<P> {
        match self.capacity {
            Some(c) => StackEngine::with_capacity(self.policy, c),
            None => StackEngine::new(self.policy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StackEngineBuilder;
    use crate::problems::next_greater::NextGreater;

    #[test]
    fn default_build_has_no_hint() {
        let engine = StackEngineBuilder::new(NextGreater::<i32>::new()).build();
        assert_eq!(engine.capacity_hint(), None);
    }

    #[test]
    fn explicit_capacity_is_kept() {
        let engine = StackEngineBuilder::new(NextGreater::<i32>::new())
            .with_capacity(32)
            .build();
        assert_eq!(engine.capacity_hint(), Some(32));
        assert_eq!(engine.run(&[1, 3, 2]), vec![1, 0, 0]);
    }
}
