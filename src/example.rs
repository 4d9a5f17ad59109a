use std::collections::{BTreeMap, BTreeSet};

/// An immutable input/output record. Fields are named strings; a subset of
/// them is declared as inputs, the rest are expected outputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Example {
    fields: BTreeMap<String, String>,
    input_keys: BTreeSet<String>,
}

impl Example {
    pub(crate) fn new(fields: &[(&str, &str)]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(name, value)| (String::from(*name), String::from(*value)))
                .collect(),
            input_keys: BTreeSet::new(),
        }
    }

    pub(crate) fn with_inputs(mut self, keys: &[&str]) -> Self {
        self.input_keys = keys.iter().map(|key| String::from(*key)).collect();
        self
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub(crate) fn is_input(&self, name: &str) -> bool {
        self.input_keys.contains(name)
    }

    pub(crate) fn input_keys(&self) -> impl Iterator<Item = &str> {
        self.input_keys.iter().map(String::as_str)
    }

    pub(crate) fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// The named fields produced by one predictor call, including any
/// intermediate reasoning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Prediction {
    fields: BTreeMap<String, String>,
}

impl Prediction {
    pub(crate) fn insert(&mut self, name: &str, value: String) {
        self.fields.insert(String::from(name), value);
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inputs_are_marked() {
        let example = Example::new(&[("text", "Great visit."), ("sentiment", "positive")])
            .with_inputs(&["text"]);

        assert!(example.is_input("text"));
        assert!(!example.is_input("sentiment"));
        assert_eq!(example.get("sentiment"), Some("positive"));
        assert_eq!(example.input_keys().collect::<Vec<_>>(), vec!["text"]);
    }

    #[test]
    fn prediction_roundtrip() {
        let mut prediction = Prediction::default();
        prediction.insert("answer", String::from("Paris"));

        assert_eq!(prediction.get("answer"), Some("Paris"));
        assert_eq!(prediction.get("reasoning"), None);
    }
}
