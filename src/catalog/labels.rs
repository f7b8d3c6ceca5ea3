//! Label registry — the ordered, positionally-addressed set behind both
//! course types and courses.
//!
//! Uniqueness and non-emptiness are enforced on `add` only. `update`
//! writes whatever it is given.

/// Ordered sequence of unique labels, addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRegistry {
    labels: Vec<String>,
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` unless it is empty or already present (exact match).
    pub fn add(&self, name: &str) -> Self {
        if name.is_empty() || self.contains(name) {
            return self.clone();
        }
        let mut labels = self.labels.clone();
        labels.push(name.to_string());
        Self { labels }
    }

    /// Replace the label at `index`. No emptiness or duplicate check.
    /// Out-of-range indices leave the registry unchanged.
    pub fn update(&self, index: usize, name: &str) -> Self {
        let mut labels = self.labels.clone();
        if let Some(slot) = labels.get_mut(index) {
            *slot = name.to_string();
        }
        Self { labels }
    }

    /// Remove the label at `index`, shifting later labels down.
    pub fn delete(&self, index: usize) -> Self {
        let labels = self
            .labels
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, l)| l.clone())
            .collect();
        Self { labels }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

impl<S: Into<String>> FromIterator<S> for LabelRegistry {
    /// Build through `add`, so empty and duplicate entries are dropped.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |reg, name| {
            let name: String = name.into();
            reg.add(&name)
        })
    }
}
