/// Independent expand/collapse flags, one per entry of a fixed list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureList {
    expanded: Vec<bool>,
}

impl DisclosureList {
    /// All `len` entries start collapsed
    pub fn collapsed(len: usize) -> Self {
        Self { expanded: vec![false; len] }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Flip entry `index` and return its new state. Other entries are untouched.
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let flag = self.expanded.get_mut(index)?;
        *flag = !*flag;
        Some(*flag)
    }
}
