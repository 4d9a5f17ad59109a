mod qa;
mod sentiment;

pub(crate) use qa::qa_data;
pub(crate) use sentiment::sentiment_data;

use crate::example::Example;

pub(crate) type DatasetLoader = fn() -> (Vec<Example>, Vec<Example>);

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub(crate) fn assert_well_formed(
        loader: DatasetLoader,
        train_len: usize,
        dev_len: usize,
    ) {
        let (train, dev) = loader();

        assert_eq!(train.len(), train_len);
        assert_eq!(dev.len(), dev_len);
        for example in train.iter().chain(dev.iter()) {
            for (name, value) in example.fields() {
                assert!(!name.is_empty());
                assert!(!value.trim().is_empty(), "empty field '{name}'");
            }
            assert!(example.input_keys().count() > 0);
        }
        for example in &train {
            assert!(!dev.contains(example), "train and dev overlap");
        }
    }
}
