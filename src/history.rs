use crate::Cep;

/// How many entries [`SearchHistory::recent`] yields by default.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Codes successfully looked up during a session, oldest first.
///
/// The history only grows. A code already present is not added again and
/// keeps its original position.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: Vec<Cep>,
    limit: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_RECENT_LIMIT)
    }
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History whose [`recent`](Self::recent) view shows at most `limit` codes.
    pub fn with_limit(limit: usize) -> Self {
        SearchHistory {
            entries: Vec::new(),
            limit,
        }
    }

    /// Records `cep`. Returns `false` if it was already there.
    pub fn add(&mut self, cep: Cep) -> bool {
        if self.entries.contains(&cep) {
            return false;
        }
        self.entries.push(cep);
        true
    }

    /// The most recently added codes, newest first, up to the limit.
    pub fn recent(&self) -> impl Iterator<Item = &Cep> + '_ {
        self.entries.iter().rev().take(self.limit)
    }

    pub fn contains(&self, cep: &Cep) -> bool {
        self.entries.contains(cep)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
