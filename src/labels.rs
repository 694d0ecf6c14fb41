//! Per-instance labels
//!
//! Labels may be of any printable type; they are stored by their string
//! representation, which is also what ends up in the ARFF nominal attribute.

use std::{collections::BTreeSet, fmt::Display};

/// One label per instance, in instance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelList {
    values: Vec<String>,
}

impl LabelList {
    pub fn new<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Display,
    {
        labels.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Distinct label values sorted by their string representation.
    ///
    /// This is the value set of the nominal `label` attribute.
    pub fn nominal_values(&self) -> Vec<String> {
        self.values
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl<L: Display> FromIterator<L> for LabelList {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|label| label.to_string()).collect(),
        }
    }
}

impl From<Vec<String>> for LabelList {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_values_sorted_unique() {
        let labels = LabelList::new(["jazz", "blues", "jazz", "rock", "blues"]);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels.nominal_values(), vec!["blues", "jazz", "rock"]);
    }

    #[test]
    fn test_numeric_labels_sort_as_strings() {
        let labels = LabelList::new([10, 2, 1, 2]);
        assert_eq!(labels.nominal_values(), vec!["1", "10", "2"]);
        assert_eq!(labels.get(0), Some("10"));
    }

    #[test]
    fn test_empty() {
        let labels = LabelList::new(Vec::<String>::new());
        assert!(labels.is_empty());
        assert!(labels.nominal_values().is_empty());
    }
}
