use crate::example::{Example, Prediction};

/// Case-insensitive match on the `sentiment` field.
pub(crate) fn sentiment_accuracy(example: &Example, prediction: &Prediction) -> bool {
    match (example.get("sentiment"), prediction.get("sentiment")) {
        (Some(expected), Some(predicted)) => expected.to_lowercase() == predicted.to_lowercase(),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn example() -> Example {
        Example::new(&[("text", "Loved every minute."), ("sentiment", "positive")])
            .with_inputs(&["text"])
    }

    fn prediction(sentiment: &str) -> Prediction {
        let mut prediction = Prediction::default();
        prediction.insert("sentiment", String::from(sentiment));
        prediction
    }

    #[test]
    fn matches_are_case_insensitive() {
        assert!(sentiment_accuracy(&example(), &prediction("Positive")));
        assert!(!sentiment_accuracy(&example(), &prediction("negative")));
    }

    #[test]
    fn deterministic_for_identical_pairs() {
        let example = example();
        let prediction = prediction("positive");

        let first = sentiment_accuracy(&example, &prediction);
        for _ in 0..10 {
            assert_eq!(first, sentiment_accuracy(&example, &prediction));
        }
    }

    #[test]
    fn missing_field_is_incorrect() {
        assert!(!sentiment_accuracy(&example(), &Prediction::default()));
    }
}
