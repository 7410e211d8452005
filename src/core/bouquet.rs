use fnv::FnvHashSet;

use super::constants::{BOUQUET_ASSET_DIR, BOUQUET_JPG_FLOWER};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Unknown, empty, already collected, or the bouquet is already complete.
    Ignored,
    Progress { remaining: usize },
    Completed,
}

/// Collected-set bookkeeping for the bouquet builder.
#[derive(Clone, Debug)]
pub struct Bouquet {
    known: FnvHashSet<String>,
    collected: FnvHashSet<String>,
    required: usize,
}

impl Bouquet {
    pub fn new<I, S>(tokens: I, required: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: tokens.into_iter().map(Into::into).collect(),
            collected: FnvHashSet::default(),
            required,
        }
    }

    pub fn required(&self) -> usize {
        self.required
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    pub fn collected_count(&self) -> usize {
        self.collected.len()
    }

    pub fn remaining(&self) -> usize {
        self.required.saturating_sub(self.collected.len())
    }

    pub fn is_complete(&self) -> bool {
        self.collected.len() >= self.required
    }

    pub fn contains(&self, id: &str) -> bool {
        self.collected.contains(id)
    }

    /// A token may start a drag until it has been collected.
    pub fn can_drag(&self, id: &str) -> bool {
        self.known.contains(id) && !self.collected.contains(id) && !self.is_complete()
    }

    pub fn collect(&mut self, id: &str) -> DropOutcome {
        if id.is_empty() || self.is_complete() || !self.known.contains(id) {
            return DropOutcome::Ignored;
        }
        if !self.collected.insert(id.to_owned()) {
            return DropOutcome::Ignored;
        }
        if self.is_complete() {
            DropOutcome::Completed
        } else {
            DropOutcome::Progress {
                remaining: self.remaining(),
            }
        }
    }
}

#[inline]
pub fn asset_path(id: &str) -> String {
    let ext = if id == BOUQUET_JPG_FLOWER { "jpg" } else { "png" };
    format!("{}/{}.{}", BOUQUET_ASSET_DIR, id, ext)
}

#[inline]
pub fn progress_text(remaining: usize) -> String {
    let plural = if remaining > 1 { "s" } else { "" };
    format!("{} more flower{} to go!", remaining, plural)
}
