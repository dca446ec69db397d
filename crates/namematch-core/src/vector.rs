//! Ordered results of one matcher run.

use crate::resolved_loc::ResolvedLoc;

/// Append-only sequence of resolved locations, in request order.
///
/// Owned by exactly one side at a time. [`drain`](Self::drain) moves every record
/// out; dropping the vector releases whatever is left.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedLocVector {
    locs: Vec<ResolvedLoc>,
}

impl ResolvedLocVector {
    pub fn new() -> Self {
        Self { locs: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            locs: Vec::with_capacity(capacity),
        }
    }

    /// Moves `loc` to the end of the vector.
    #[inline]
    pub fn append(&mut self, loc: ResolvedLoc) {
        self.locs.push(loc);
    }

    /// Transfers every record to the caller, leaving the vector empty.
    pub fn drain(&mut self) -> Vec<ResolvedLoc> {
        std::mem::take(&mut self.locs)
    }

    pub fn len(&self) -> usize {
        self.locs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResolvedLoc> {
        self.locs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedLoc> {
        self.locs.iter()
    }

    pub fn as_slice(&self) -> &[ResolvedLoc] {
        &self.locs
    }

    pub fn into_vec(self) -> Vec<ResolvedLoc> {
        self.locs
    }
}

impl IntoIterator for ResolvedLocVector {
    type Item = ResolvedLoc;
    type IntoIter = std::vec::IntoIter<ResolvedLoc>;

    fn into_iter(self) -> Self::IntoIter {
        self.locs.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResolvedLocVector {
    type Item = &'a ResolvedLoc;
    type IntoIter = std::slice::Iter<'a, ResolvedLoc>;

    fn into_iter(self) -> Self::IntoIter {
        self.locs.iter()
    }
}

impl FromIterator<ResolvedLoc> for ResolvedLocVector {
    fn from_iter<T: IntoIterator<Item = ResolvedLoc>>(iter: T) -> Self {
        Self {
            locs: iter.into_iter().collect(),
        }
    }
}

impl Extend<ResolvedLoc> for ResolvedLocVector {
    fn extend<T: IntoIterator<Item = ResolvedLoc>>(&mut self, iter: T) {
        self.locs.extend(iter);
    }
}
