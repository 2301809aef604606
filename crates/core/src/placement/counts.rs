//! Per-role piece counts

use std::collections::HashMap;

use shakmaty::Role;

use crate::error::{Error, Result};
use crate::pieces::cap;

#[derive(Debug, Clone, Default)]
pub struct PieceCounts {
    counts: HashMap<Role, u8>,
}

impl PieceCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, role: Role) -> u8 {
        self.counts.get(&role).copied().unwrap_or(0)
    }

    /// Fails if one more `role` would exceed its cap.
    pub fn check(&self, role: Role) -> Result<()> {
        let cap = cap(role);
        if self.get(role) >= cap {
            return Err(Error::CountCapExceeded { role, cap });
        }
        Ok(())
    }

    pub fn increment(&mut self, role: Role) {
        *self.counts.entry(role).or_insert(0) += 1;
    }

    pub fn total(&self) -> u32 {
        self.counts.values().map(|&n| n as u32).sum()
    }
}
