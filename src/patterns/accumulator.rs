use std::collections::BTreeMap;

/// Reference-line indices recorded for one observed feature across every
/// quad attempt that included it. Indices repeat when attempts agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureRecord {
    pub matches: Vec<usize>,
}

/// Insertion-ordered map from feature key to its match record.
#[derive(Debug, Clone)]
pub struct MatchAccumulator<K> {
    keys: Vec<K>,
    records: Vec<FeatureRecord>,
    positions: BTreeMap<K, usize>,
}

impl<K> Default for MatchAccumulator<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            records: Vec::new(),
            positions: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone> MatchAccumulator<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` with no matches; keeps its original slot if present.
    pub fn ensure(&mut self, key: K) -> &mut FeatureRecord {
        let idx = match self.positions.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.keys.len();
                self.positions.insert(key.clone(), idx);
                self.keys.push(key);
                self.records.push(FeatureRecord::default());
                idx
            }
        };
        &mut self.records[idx]
    }

    pub fn record(&mut self, key: K, line_index: usize) {
        self.ensure(key).matches.push(line_index);
    }

    pub fn get(&self, key: &K) -> Option<&FeatureRecord> {
        self.positions.get(key).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &FeatureRecord)> {
        self.keys.iter().zip(self.records.iter())
    }
}

impl<K: Ord + Clone> FromIterator<(K, Vec<usize>)> for MatchAccumulator<K> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<usize>)>>(iter: I) -> Self {
        let mut acc = Self::new();
        for (key, matches) in iter {
            acc.ensure(key).matches.extend(matches);
        }
        acc
    }
}
