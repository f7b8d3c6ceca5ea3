//! Offering registry — course type and course joined into one label.
//!
//! The label is the identity. Nothing ties it back to the course type or
//! course it was built from: renames and deletions over there never reach
//! an existing offering.

/// Separator between course type and course in an offering label.
pub const SEPARATOR: &str = " - ";

/// Build an offering label: `"<type> - <course>"`.
pub fn offering_label(course_type: &str, course: &str) -> String {
    format!("{course_type}{SEPARATOR}{course}")
}

/// Ordered sequence of unique offering labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferingRegistry {
    offerings: Vec<String>,
}

impl OfferingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `"<type> - <course>"` when both selections are present and the
    /// label is new. Selections are not checked against the registries.
    pub fn add(&self, course_type: Option<&str>, course: Option<&str>) -> Self {
        let (Some(course_type), Some(course)) = (non_empty(course_type), non_empty(course)) else {
            return self.clone();
        };
        let label = offering_label(course_type, course);
        if self.contains(&label) {
            return self.clone();
        }
        let mut offerings = self.offerings.clone();
        offerings.push(label);
        Self { offerings }
    }

    /// Rewrite the label at `index` from `course_type` and `course`.
    /// No duplicate or emptiness check.
    pub fn update(&self, index: usize, course: &str, course_type: &str) -> Self {
        let mut offerings = self.offerings.clone();
        if let Some(slot) = offerings.get_mut(index) {
            *slot = offering_label(course_type, course);
        }
        Self { offerings }
    }

    /// Remove the offering at `index`, shifting later ones down.
    pub fn delete(&self, index: usize) -> Self {
        let offerings = self
            .offerings
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, o)| o.clone())
            .collect();
        Self { offerings }
    }

    /// Offerings whose label starts with `prefix`, in order.
    /// `None` or `""` yields everything.
    pub fn filter<'a>(&'a self, prefix: Option<&'a str>) -> impl Iterator<Item = &'a str> + 'a {
        let prefix = prefix.unwrap_or("");
        self.offerings
            .iter()
            .map(String::as_str)
            .filter(move |o| o.starts_with(prefix))
    }

    /// Like [`filter`](Self::filter), but paired with each offering's
    /// position in the full sequence.
    pub fn filter_indexed<'a>(
        &'a self,
        prefix: Option<&'a str>,
    ) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        let prefix = prefix.unwrap_or("");
        self.offerings
            .iter()
            .enumerate()
            .map(|(i, o)| (i, o.as_str()))
            .filter(move |(_, o)| o.starts_with(prefix))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.offerings.iter().any(|o| o == label)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.offerings.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.offerings.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.offerings
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
