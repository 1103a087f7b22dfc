//! Experience Records
//!
//! A single DQN transition as produced by the experience collector.

use serde::{Deserialize, Serialize};

/// A single transition in the environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// State features before action
    pub state: Vec<f32>,
    /// Index of the discrete action taken
    pub action: u32,
    /// Reward received
    pub reward: f32,
    /// State features after action
    pub next_state: Vec<f32>,
    /// Whether the episode terminated
    pub done: bool,
}

impl Experience {
    /// Create a new experience
    pub fn new(
        state: Vec<f32>,
        action: u32,
        reward: f32,
        next_state: Vec<f32>,
        done: bool,
    ) -> Self {
        Self {
            state,
            action,
            reward,
            next_state,
            done,
        }
    }
}
