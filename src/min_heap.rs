//! Array-backed binary min-heap keyed by weight.
//!
//! Equal weights are resolved purely by heap shape: `push` keeps climbing past
//! parents of equal weight and `pop_min` keeps sinking past equal children.
//! The result is deterministic for a given push/pop sequence, which is all the
//! tree builder needs for reproducible output.

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<(u64, T)>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap { elements: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, weight: u64, payload: T) {
        self.elements.push((weight, payload));
        self.sift_up(self.elements.len() - 1);
    }

    pub fn peek_min(&self) -> Option<(u64, &T)> {
        self.elements.first().map(|(w, p)| (*w, p))
    }

    pub fn pop_min(&mut self) -> Option<(u64, T)> {
        if self.elements.is_empty() {
            return None;
        }
        let min = self.elements.swap_remove(0);
        self.sift_down(0);
        Some(min)
    }

    fn weight(&self, i: usize) -> u64 {
        self.elements[i].0
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.weight(parent) < self.weight(i) {
                break;
            }
            self.elements.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let first = 2 * i + 1;
            let second = 2 * i + 2;
            if first >= n {
                break;
            }
            let current = self.weight(i);
            let child = if second >= n {
                if current < self.weight(first) {
                    break;
                }
                first
            } else {
                if current < self.weight(first) && current < self.weight(second) {
                    break;
                }
                if self.weight(first) < self.weight(second) { first } else { second }
            };
            self.elements.swap(i, child);
            i = child;
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.elements.len()).all(|i| self.weight((i - 1) / 2) <= self.weight(i))
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
