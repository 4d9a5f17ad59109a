use std::fmt::{Display, Formatter, Result};

use crate::llm_client::LlmClientError;

#[derive(Debug)]
pub(crate) enum PredictError {
    MissingInputField(String),
    MissingOutputField(String),
    FieldPattern(regex::Error),
    Llm(LlmClientError),
}

impl From<LlmClientError> for PredictError {
    fn from(value: LlmClientError) -> Self {
        Self::Llm(value)
    }
}

impl std::error::Error for PredictError {}

impl Display for PredictError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PredictError::MissingInputField(name) => {
                write!(f, "Predictor: example is missing input field '{name}'")
            }
            PredictError::MissingOutputField(name) => {
                write!(f, "Predictor: completion is missing output field '{name}'")
            }
            PredictError::FieldPattern(err) => {
                write!(f, "Predictor: invalid field pattern: {err}")
            }
            PredictError::Llm(err) => write!(f, "{err}"),
        }
    }
}
