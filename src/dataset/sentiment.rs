use crate::example::Example;

// (text, expected sentiment)
const TRAIN_DATA: &[(&str, &str)] = &[
    (
        "This movie was absolutely fantastic! I loved every minute.",
        "positive",
    ),
    (
        "Terrible experience. Would not recommend to anyone.",
        "negative",
    ),
    (
        "Best purchase I've made all year! Highly recommend.",
        "positive",
    ),
    (
        "Complete waste of time and money. Very disappointed.",
        "negative",
    ),
    (
        "Amazing quality and fast delivery. Very happy!",
        "positive",
    ),
    ("Poor customer service and broken product.", "negative"),
    ("Exceeded all my expectations. Will buy again!", "positive"),
    ("Worst meal I've ever had. Don't go there.", "negative"),
];

const DEV_DATA: &[(&str, &str)] = &[
    ("This product is incredible! Worth every penny.", "positive"),
    ("Not good at all. Returned it immediately.", "negative"),
    ("Absolutely love it! Five stars!", "positive"),
    (
        "Horrible quality. Very upset with this purchase.",
        "negative",
    ),
];

fn create_examples(data: &[(&str, &str)]) -> Vec<Example> {
    data.iter()
        .map(|(text, sentiment)| {
            Example::new(&[("text", text), ("sentiment", sentiment)]).with_inputs(&["text"])
        })
        .collect()
}

pub(crate) fn sentiment_data() -> (Vec<Example>, Vec<Example>) {
    (create_examples(TRAIN_DATA), create_examples(DEV_DATA))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dataset::test_support::assert_well_formed;

    #[test]
    fn declared_sizes_and_disjoint_sets() {
        assert_well_formed(sentiment_data, 8, 4);
    }

    #[test]
    fn text_is_the_only_input() {
        let (train, _) = sentiment_data();

        for example in train {
            assert_eq!(example.input_keys().collect::<Vec<_>>(), vec!["text"]);
            assert!(!example.is_input("sentiment"));
        }
    }
}
