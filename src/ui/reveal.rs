//! One-shot reveal-on-scroll bookkeeping
//!
//! Elements are tracked by index. The first visibility report for an element
//! reveals it; later reports are ignored, so an element never hides again.

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Start tracking one more element, returning its index
    pub fn track(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Report that element `index` entered the viewport.
    ///
    /// Returns `true` only on the first report, when the caller should mark the
    /// element and stop observing it. Unknown indices are ignored.
    pub fn enter(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Everything revealed; the observer can be dropped
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }
}
