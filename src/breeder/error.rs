use std::fmt::{Display, Formatter, Result};

use crate::{
    embedding_client::EmbeddingServiceError, llm_client::LlmClientError, predictor::PredictError,
};

#[derive(Debug)]
pub(crate) enum PromptBreedingError {
    LlmError(LlmClientError),
    EmbeddingServiceError(EmbeddingServiceError),
    EvaluationError(PredictError),
    EmptyPopulation,
}

impl std::error::Error for PromptBreedingError {}

impl From<LlmClientError> for PromptBreedingError {
    fn from(value: LlmClientError) -> Self {
        Self::LlmError(value)
    }
}

impl From<EmbeddingServiceError> for PromptBreedingError {
    fn from(value: EmbeddingServiceError) -> Self {
        Self::EmbeddingServiceError(value)
    }
}

impl From<PredictError> for PromptBreedingError {
    fn from(value: PredictError) -> Self {
        Self::EvaluationError(value)
    }
}

impl Display for PromptBreedingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PromptBreedingError::LlmError(err) => write!(f, "{err}"),
            PromptBreedingError::EmbeddingServiceError(err) => write!(f, "{err}"),
            PromptBreedingError::EvaluationError(err) => write!(f, "{err}"),
            PromptBreedingError::EmptyPopulation => {
                write!(f, "PromptBreeding: population initialization produced no candidates")
            }
        }
    }
}
