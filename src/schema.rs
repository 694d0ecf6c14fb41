//! Attribute schema of an exported relation

/// Prefix of the attribute holding one hidden unit's activation.
pub const UNIT_PREFIX: &str = "unit";

/// Name of the trailing nominal attribute holding instance labels.
pub const LABEL_ATTRIBUTE: &str = "label";

/// Type of an ARFF attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    /// Numeric attribute (`REAL`).
    Real,
    /// Categorical attribute with a fixed, ordered value set.
    Nominal(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub kind: AttributeType,
}

impl Attribute {
    pub fn real(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeType::Real,
        }
    }

    pub fn nominal(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeType::Nominal(values),
        }
    }
}

/// Ordered list of attributes describing the columns of every data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSchema {
    attributes: Vec<Attribute>,
}

impl AttributeSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// One `REAL` attribute per unit, named `unit00`, `unit01`, ... with the
    /// index padded to the digit width of `n_units`.
    pub fn for_units(n_units: usize) -> Self {
        let attributes = (0..n_units)
            .map(|index| Attribute::real(unit_name(index, n_units)))
            .collect();
        Self { attributes }
    }

    /// Append the nominal `label` attribute.
    pub fn with_labels(mut self, values: Vec<String>) -> Self {
        self.push(Attribute::nominal(LABEL_ATTRIBUTE, values));
        self
    }

    pub fn push(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|attribute| attribute.name.as_str())
    }
}

impl<'a> IntoIterator for &'a AttributeSchema {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

/// Digits used for unit indices: the decimal width of the unit count.
pub fn unit_width(n_units: usize) -> usize {
    n_units.to_string().len()
}

/// Attribute name of unit `index` in a layer of `n_units` units.
pub fn unit_name(index: usize, n_units: usize) -> String {
    format!("{UNIT_PREFIX}{index:0width$}", width = unit_width(n_units))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_width() {
        assert_eq!(unit_width(0), 1);
        assert_eq!(unit_width(9), 1);
        assert_eq!(unit_width(10), 2);
        assert_eq!(unit_width(100), 3);
    }

    #[test]
    fn test_ten_units_use_two_digits() {
        let schema = AttributeSchema::for_units(10);
        let names: Vec<&str> = schema.names().collect();
        assert_eq!(names.first(), Some(&"unit00"));
        assert_eq!(names.last(), Some(&"unit09"));
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_hundred_units_use_three_digits() {
        let schema = AttributeSchema::for_units(100);
        assert_eq!(schema.get(0).map(|a| a.name.as_str()), Some("unit000"));
        assert_eq!(schema.get(99).map(|a| a.name.as_str()), Some("unit099"));
    }

    #[test]
    fn test_nine_units_unpadded() {
        let schema = AttributeSchema::for_units(9);
        let names: Vec<&str> = schema.names().collect();
        assert_eq!(names[0], "unit0");
        assert_eq!(names[8], "unit8");
    }

    #[test]
    fn test_label_attribute_trails() {
        let schema = AttributeSchema::for_units(2).with_labels(vec!["a".into(), "b".into()]);
        assert_eq!(schema.len(), 3);
        let label = schema.get(2).unwrap();
        assert_eq!(label.name, LABEL_ATTRIBUTE);
        assert_eq!(
            label.kind,
            AttributeType::Nominal(vec!["a".to_string(), "b".to_string()])
        );
        assert!(schema.iter().take(2).all(|a| a.kind == AttributeType::Real));
    }
}
