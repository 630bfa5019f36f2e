use std::collections::BTreeSet;

/// Open/closed state for a list of FAQ entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    exclusive: bool,
    expanded: BTreeSet<usize>,
}

impl FaqAccordion {
    pub fn new(len: usize, exclusive: bool) -> Self {
        Self {
            len,
            exclusive,
            expanded: BTreeSet::new(),
        }
    }

    /// Flip one entry. Returns false for an index outside the list.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }

        if self.expanded.remove(&index) {
            return true;
        }
        if self.exclusive {
            self.expanded.clear();
        }
        self.expanded.insert(index);
        true
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_start_collapsed() {
        let faq = FaqAccordion::new(4, false);
        assert!((0..4).all(|i| !faq.is_expanded(i)));
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut faq = FaqAccordion::new(4, false);
        assert!(faq.toggle(2));
        assert!(faq.is_expanded(2));
        assert!(faq.toggle(2));
        assert!(!faq.is_expanded(2));
    }

    #[test]
    fn test_independent_mode_keeps_others_open() {
        let mut faq = FaqAccordion::new(4, false);
        faq.toggle(0);
        faq.toggle(3);
        assert_eq!(faq.expanded_count(), 2);
    }

    #[test]
    fn test_exclusive_mode_closes_others() {
        let mut faq = FaqAccordion::new(4, true);
        faq.toggle(0);
        faq.toggle(3);
        assert!(!faq.is_expanded(0));
        assert!(faq.is_expanded(3));
        assert_eq!(faq.expanded_count(), 1);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut faq = FaqAccordion::new(2, false);
        assert!(!faq.toggle(2));
        assert_eq!(faq.expanded_count(), 0);
    }

    #[test]
    fn test_collapse_all() {
        let mut faq = FaqAccordion::new(3, false);
        faq.toggle(0);
        faq.toggle(1);
        faq.collapse_all();
        assert_eq!(faq.expanded_count(), 0);
    }
}
