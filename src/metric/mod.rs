mod evaluate;
mod qa;
mod sentiment;

pub(crate) use evaluate::evaluate_predictor;
pub(crate) use qa::qa_accuracy;
pub(crate) use sentiment::sentiment_accuracy;

use crate::example::{Example, Prediction};

/// Pure scoring function, true when the prediction is acceptable for the
/// expected example.
pub(crate) type Metric = fn(&Example, &Prediction) -> bool;

/// Generic metric for tasks without a bespoke one: compare the first
/// non-input field of the example against the like-named prediction field,
/// case-insensitively.
#[allow(dead_code)]
pub(crate) fn exact_match(example: &Example, prediction: &Prediction) -> bool {
    example
        .fields()
        .find(|(name, _)| !example.is_input(name))
        .and_then(|(name, expected)| {
            prediction
                .get(name)
                .map(|predicted| expected.to_lowercase() == predicted.to_lowercase())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_match_uses_first_non_input_field() {
        let example = Example::new(&[("text", "Loved it."), ("sentiment", "Positive")])
            .with_inputs(&["text"]);
        let mut prediction = Prediction::default();
        prediction.insert("sentiment", String::from("positive"));

        assert!(exact_match(&example, &prediction));
    }

    #[test]
    fn exact_match_fails_without_prediction_field() {
        let example = Example::new(&[("text", "Loved it."), ("sentiment", "positive")])
            .with_inputs(&["text"]);

        assert!(!exact_match(&example, &Prediction::default()));
    }
}
