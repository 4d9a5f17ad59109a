use crate::example::{Example, Prediction};

/// Case-insensitive, whitespace-trimmed exact match on the `answer` field.
pub(crate) fn qa_accuracy(example: &Example, prediction: &Prediction) -> bool {
    match (example.get("answer"), prediction.get("answer")) {
        (Some(expected), Some(predicted)) => {
            expected.trim().to_lowercase() == predicted.trim().to_lowercase()
        }
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn example() -> Example {
        Example::new(&[
            ("question", "What is the capital of France?"),
            ("context", "France is a country in Western Europe. Its capital is Paris."),
            ("answer", "Paris"),
        ])
        .with_inputs(&["question", "context"])
    }

    fn prediction(answer: &str) -> Prediction {
        let mut prediction = Prediction::default();
        prediction.insert("answer", String::from(answer));
        prediction
    }

    #[test]
    fn trims_and_ignores_case() {
        assert!(qa_accuracy(&example(), &prediction("  paris ")));
        assert!(!qa_accuracy(&example(), &prediction("Lyon")));
    }

    #[test]
    fn deterministic_for_identical_pairs() {
        let example = example();
        let prediction = prediction("PARIS");

        let first = qa_accuracy(&example, &prediction);
        for _ in 0..10 {
            assert_eq!(first, qa_accuracy(&example, &prediction));
        }
    }
}
