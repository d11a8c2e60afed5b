//! The per-screen copy of a resource list.
//!
//! A snapshot is either loaded or unset. Mutations never patch it; they call
//! [`ListSnapshot::invalidate`] and the next refresh fetches the whole list again.

/// Cached result of the last `find_all`, or the signal that it must be refetched.
#[derive(Debug, Clone, PartialEq)]
pub enum ListSnapshot<T> {
    Unset,
    Loaded(Vec<T>),
}

impl<T> Default for ListSnapshot<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> ListSnapshot<T> {
    pub fn invalidate(&mut self) {
        *self = Self::Unset;
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn load(&mut self, records: Vec<T>) {
        *self = Self::Loaded(records);
    }

    pub fn records(&self) -> Option<&[T]> {
        match self {
            Self::Unset => None,
            Self::Loaded(records) => Some(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_drops_loaded_records() {
        let mut snapshot = ListSnapshot::default();
        assert!(snapshot.is_stale());

        snapshot.load(vec![1, 2]);
        assert_eq!(snapshot.records(), Some(&[1, 2][..]));

        snapshot.invalidate();
        assert!(snapshot.is_stale());
        assert_eq!(snapshot.records(), None);
    }

    #[test]
    fn empty_list_is_loaded_not_stale() {
        let mut snapshot = ListSnapshot::<u8>::Unset;
        snapshot.load(Vec::new());
        assert!(!snapshot.is_stale());
        assert_eq!(snapshot.records(), Some(&[][..]));
    }
}
