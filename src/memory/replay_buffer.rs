//! Replay Buffer
//!
//! Bounded experience storage with file-backed persistence. The split
//! operation treats the persisted state as definitive: it reloads from
//! disk before moving anything and reports the resulting sizes directly.

use rand::seq::SliceRandom;
use rand::thread_rng;
use std::collections::VecDeque;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::memory::{store, Experience};

/// Sizes observed after a completed split, measured against the state
/// that was written back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Experiences moved into the target buffer
    pub moved: usize,
    /// Source buffer size after the split
    pub source_len: usize,
    /// Target buffer size after the split
    pub target_len: usize,
}

/// Replay buffer for experience storage
#[derive(Debug)]
pub struct ReplayBuffer {
    /// Storage for experiences, oldest at the front
    buffer: VecDeque<Experience>,
    /// Maximum capacity
    capacity: usize,
}

impl ReplayBuffer {
    /// Create a new replay buffer with given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::new(),
            capacity,
        }
    }

    /// Add an experience to the buffer, evicting the oldest when full
    pub fn push(&mut self, experience: Experience) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(experience);
    }

    /// Sample a random batch of experiences
    pub fn sample(&self, batch_size: usize) -> Vec<Experience> {
        let mut rng = thread_rng();
        let mut indices: Vec<usize> = (0..self.buffer.len()).collect();
        indices.shuffle(&mut rng);

        indices
            .into_iter()
            .take(batch_size.min(self.buffer.len()))
            .map(|i| self.buffer[i].clone())
            .collect()
    }

    /// Get all experiences in insertion order
    pub fn get_all(&self) -> Vec<Experience> {
        self.buffer.iter().cloned().collect()
    }

    /// Clear all experiences
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Get current number of experiences
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get buffer capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f32 {
        self.buffer.len() as f32 / self.capacity as f32
    }

    /// Replace the buffer contents from a file.
    ///
    /// When the file holds more experiences than the capacity, the oldest
    /// are dropped so the buffer keeps the newest `capacity` records,
    /// consistent with `push` eviction. Returns the resulting size.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let mut experiences = store::read_experiences(path)?;

        if experiences.len() > self.capacity {
            let excess = experiences.len() - self.capacity;
            experiences.drain(..excess);
            info!(
                excess,
                capacity = self.capacity,
                "Persisted buffer exceeds capacity, dropped oldest experiences"
            );
        }

        self.buffer = experiences.into();
        debug!(path = %path.display(), len = self.buffer.len(), "Loaded replay buffer");
        Ok(self.buffer.len())
    }

    /// Persist the buffer contents to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = self.get_all();
        store::write_experiences(path, &contents)?;
        debug!(path = %path.display(), len = contents.len(), "Saved replay buffer");
        Ok(())
    }

    /// Split the oldest `count` persisted experiences into `target`.
    ///
    /// The persisted state at `source_path` is definitive: the buffer is
    /// reloaded from it before any experience moves. The oldest
    /// `min(count, len)` experiences are drained into `target` in
    /// insertion order, then both buffers are written back (`self` to
    /// `source_path`, `target` to `target_path`). Both files are written
    /// even when nothing moves.
    pub fn split<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        source_path: P,
        target: &mut ReplayBuffer,
        target_path: Q,
        count: usize,
    ) -> Result<SplitOutcome> {
        let source_path = source_path.as_ref();
        let target_path = target_path.as_ref();

        let loaded = self.load(source_path)?;
        let moved = count.min(loaded);

        for experience in self.buffer.drain(..moved) {
            target.push(experience);
        }

        self.save(source_path)?;
        target.save(target_path)?;

        info!(
            moved,
            source_len = self.buffer.len(),
            target_len = target.len(),
            "Split replay buffer"
        );

        Ok(SplitOutcome {
            moved,
            source_len: self.buffer.len(),
            target_len: target.len(),
        })
    }
}
