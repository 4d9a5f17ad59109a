use crate::example::Example;

// (question, context, answer)
const TRAIN_DATA: &[(&str, &str, &str)] = &[
    (
        "What is the capital of France?",
        "France is a country in Western Europe. Its capital is Paris.",
        "Paris",
    ),
    (
        "Who wrote Romeo and Juliet?",
        "William Shakespeare wrote the famous play Romeo and Juliet.",
        "William Shakespeare",
    ),
    (
        "What is the largest planet?",
        "Jupiter is the largest planet in our solar system.",
        "Jupiter",
    ),
    (
        "When was Python created?",
        "Python was created by Guido van Rossum in 1991.",
        "1991",
    ),
    (
        "What does DNA stand for?",
        "DNA stands for deoxyribonucleic acid.",
        "deoxyribonucleic acid",
    ),
    (
        "How many continents are there?",
        "There are seven continents on Earth.",
        "seven",
    ),
];

const DEV_DATA: &[(&str, &str, &str)] = &[
    (
        "What is the smallest country?",
        "Vatican City is the smallest country in the world.",
        "Vatican City",
    ),
    (
        "What year did the Titanic sink?",
        "The Titanic sank in 1912.",
        "1912",
    ),
];

fn create_examples(data: &[(&str, &str, &str)]) -> Vec<Example> {
    data.iter()
        .map(|(question, context, answer)| {
            Example::new(&[
                ("question", question),
                ("context", context),
                ("answer", answer),
            ])
            .with_inputs(&["question", "context"])
        })
        .collect()
}

pub(crate) fn qa_data() -> (Vec<Example>, Vec<Example>) {
    (create_examples(TRAIN_DATA), create_examples(DEV_DATA))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dataset::test_support::assert_well_formed;

    #[test]
    fn declared_sizes_and_disjoint_sets() {
        assert_well_formed(qa_data, 6, 2);
    }

    #[test]
    fn question_and_context_are_inputs() {
        let (_, dev) = qa_data();

        for example in dev {
            assert_eq!(
                example.input_keys().collect::<Vec<_>>(),
                vec!["context", "question"]
            );
            assert!(!example.is_input("answer"));
        }
    }
}
