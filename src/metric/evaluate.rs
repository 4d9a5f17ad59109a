use indicatif::ProgressBar;

use super::Metric;
use crate::{
    example::Example,
    llm_client::LlmClientService,
    predictor::{PredictError, Predictor},
};

/// Sequential pass over `examples`, returning the fraction the metric
/// accepts. A completion the predictor cannot parse counts as incorrect;
/// client failures abort the evaluation.
pub(crate) async fn evaluate_predictor<L: LlmClientService>(
    llm: &L,
    predictor: &Predictor,
    examples: &[Example],
    metric: Metric,
    progress: Option<&ProgressBar>,
) -> Result<f32, PredictError> {
    let total = examples.len();
    let mut correct = 0usize;

    for (index, example) in examples.iter().enumerate() {
        match predictor.forward(llm, example).await {
            Ok(prediction) => {
                if metric(example, &prediction) {
                    correct += 1;
                } else {
                    log::debug!("example {}/{}: metric rejected prediction", index + 1, total);
                }
            }
            Err(PredictError::MissingOutputField(name)) => {
                log::debug!(
                    "example {}/{}: completion missing output field '{name}'",
                    index + 1,
                    total
                );
            }
            Err(e) => return Err(e),
        }
        if let Some(progress) = progress {
            progress.inc(1);
        }
    }

    if total == 0 {
        Ok(0.0)
    } else {
        Ok(correct as f32 / total as f32)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        llm_client::{LanguageServiceArguments, LlmClientBackend, LlmClientError},
        signature::SENTIMENT_CLASSIFICATION,
        metric::sentiment_accuracy,
    };

    /// Scripted backend: answers `positive` for exclamatory texts and
    /// gibberish for everything else.
    struct ScriptedLlm;

    impl LlmClientBackend for ScriptedLlm {
        async fn get_response(
            &self,
            arguments: LanguageServiceArguments,
        ) -> Result<String, LlmClientError> {
            let user = &arguments.messages[1].content;
            if user.contains('!') {
                Ok(String::from(
                    "Reasoning: Enthusiastic punctuation.\nSentiment: positive",
                ))
            } else {
                Ok(String::from("I cannot decide."))
            }
        }
    }

    #[tokio::test]
    async fn counts_parse_failures_as_incorrect() {
        let examples = vec![
            Example::new(&[("text", "Amazing quality!"), ("sentiment", "positive")])
                .with_inputs(&["text"]),
            Example::new(&[("text", "Broken on arrival."), ("sentiment", "negative")])
                .with_inputs(&["text"]),
        ];
        let predictor = Predictor::chain_of_thought(SENTIMENT_CLASSIFICATION);

        let accuracy =
            evaluate_predictor(&ScriptedLlm, &predictor, &examples, sentiment_accuracy, None)
                .await
                .unwrap();

        assert_eq!(accuracy, 0.5);
    }

    #[tokio::test]
    async fn empty_set_scores_zero() {
        let predictor = Predictor::chain_of_thought(SENTIMENT_CLASSIFICATION);

        let accuracy = evaluate_predictor(&ScriptedLlm, &predictor, &[], sentiment_accuracy, None)
            .await
            .unwrap();

        assert_eq!(accuracy, 0.0);
    }
}
