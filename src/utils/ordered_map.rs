use std::{collections::HashMap, hash::Hash};

/// Map that iterates in first-insertion order.
///
/// Lookups go through a hash index; iteration follows the backing `Vec`, so
/// output order never depends on hashing.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    index: HashMap<K, usize>,
    slots: Vec<(K, V)>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            slots: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, inserting `make()` at the end if the key is new.
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.slots.len();
                self.index.insert(key.clone(), position);
                self.slots.push((key, make()));
                position
            }
        };
        &mut self.slots[position].1
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&position| &self.slots[position].1)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.slots.iter().map(|(key, _)| key)
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_first_insertion_order() {
        let mut map: OrderedMap<&str, Vec<u32>> = OrderedMap::new();
        for (key, value) in [("zeta", 1), ("alpha", 2), ("zeta", 3), ("mid", 4)] {
            map.get_or_insert_with(key, Vec::new).push(value);
        }

        assert_eq!(map.len(), 3);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(map.get(&"zeta"), Some(&vec![1, 3]));
        let collected: Vec<_> = map.into_iter().collect();
        assert_eq!(collected[1], ("alpha", vec![2]));
    }

    #[test]
    fn empty_map_reports_empty() {
        let map: OrderedMap<String, u8> = OrderedMap::default();
        assert!(map.is_empty());
        assert_eq!(map.get(&"missing".to_string()), None);
    }
}
