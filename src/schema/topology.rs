//! Dependency ordering of tables.
//!
//! Kahn's algorithm over an insertion-ordered set, so ties resolve to the
//! order items were first seen and the result is stable across runs.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

struct Dependency<T> {
    num_prec: usize,
    succ: HashSet<T>,
}

impl<T: Hash + Eq> Dependency<T> {
    fn new() -> Dependency<T> {
        Dependency {
            num_prec: 0,
            succ: HashSet::new(),
        }
    }
}

/// Performs topological sorting.
pub(crate) struct TopologicalSort<T> {
    top: Vec<(T, Dependency<T>)>,
}

impl<T> Default for TopologicalSort<T> {
    fn default() -> TopologicalSort<T> {
        TopologicalSort { top: Vec::new() }
    }
}

impl<T: Hash + Eq + Clone> TopologicalSort<T> {
    pub fn new() -> TopologicalSort<T> {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.top.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// Inserts an element without dependencies. Returns false if it was already present.
    pub fn insert(&mut self, elt: T) -> bool {
        if self.index_of(&elt).is_some() {
            return false;
        }
        self.top.push((elt, Dependency::new()));
        true
    }

    /// Registers that `prec` must come before `succ`.
    pub fn add_dependency(&mut self, prec: T, succ: T) {
        let p = self.index_or_insert(prec);
        if !self.top[p].1.succ.insert(succ.clone()) {
            // already registered
            return;
        }
        let s = self.index_or_insert(succ);
        self.top[s].1.num_prec += 1;
    }

    /// Removes and returns the earliest item no remaining item depends on.
    ///
    /// Returns `None` while items are left only if they form a cycle.
    pub fn pop(&mut self) -> Option<T> {
        let index = self.top.iter().position(|(_, dep)| dep.num_prec == 0)?;
        let (key, dep) = self.top.remove(index);
        for succ in &dep.succ {
            if let Some(p) = self.index_of(succ) {
                self.top[p].1.num_prec -= 1;
            }
        }
        Some(key)
    }

    fn index_of(&self, elt: &T) -> Option<usize> {
        self.top.iter().position(|(key, _)| key == elt)
    }

    fn index_or_insert(&mut self, elt: T) -> usize {
        match self.index_of(&elt) {
            Some(p) => p,
            None => {
                self.top.push((elt, Dependency::new()));
                self.top.len() - 1
            }
        }
    }
}

impl<T: Hash + Eq + Clone> Iterator for TopologicalSort<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pop()
    }
}

impl<T: fmt::Debug> fmt::Debug for TopologicalSort<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map()
            .entries(
                self.top
                    .iter()
                    .map(|(key, dep)| (key, (dep.num_prec, dep.succ.len()))),
            )
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::TopologicalSort;
    use pretty_assertions::assert_eq;

    #[test]
    fn iter() {
        let mut ts = TopologicalSort::<i32>::new();
        ts.add_dependency(1, 2);
        ts.add_dependency(2, 3);
        ts.add_dependency(3, 4);
        assert_eq!(ts.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut ts = TopologicalSort::new();
        for table in ["notification", "like", "post", "user"] {
            assert!(ts.insert(table));
        }
        assert!(!ts.insert("user"));
        ts.add_dependency("user", "post");
        ts.add_dependency("post", "like");
        ts.add_dependency("user", "like");
        ts.add_dependency("user", "like");
        assert_eq!(ts.len(), 4);
        assert_eq!(
            ts.collect::<Vec<_>>(),
            vec!["notification", "user", "post", "like"]
        );
    }

    #[test]
    fn cycle_stalls() {
        let mut ts = TopologicalSort::new();
        ts.add_dependency("user", "post");
        ts.add_dependency("post", "comment");
        ts.add_dependency("comment", "reply");
        ts.add_dependency("reply", "comment");
        assert_eq!(ts.pop(), Some("user"));
        assert_eq!(ts.pop(), Some("post"));
        assert!(ts.pop().is_none());
        assert_eq!(ts.len(), 2);
    }
}
