use serde::{Deserialize, Serialize};

/// Whether an explicit id override takes a slot in the generated sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// Overrides leave the counter untouched, so generated ids stay gapless
    #[default]
    OverridesSkipCounter,
    /// Overrides advance the counter as if a generated id had been issued
    OverridesConsumeSlot,
}

/// Sequential ID generator for instances within one compilation.
///
/// Each compilation owns its own allocator; the counter starts at 0.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    count: u64,
    policy: IdPolicy,
}

impl IdAllocator {
    pub fn new(policy: IdPolicy) -> Self {
        Self { count: 0, policy }
    }

    /// Return the override verbatim, or the next generated id
    pub fn next_id(&mut self, explicit: Option<&str>) -> String {
        match explicit {
            Some(id) => {
                if self.policy == IdPolicy::OverridesConsumeSlot {
                    self.count += 1;
                }
                id.to_string()
            }
            None => {
                let id = self.count.to_string();
                self.count += 1;
                id
            }
        }
    }

    /// Number of slots handed out so far
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}
