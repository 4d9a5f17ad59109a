use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub(crate) enum LlmClientError {
    OpenAiClient(async_openai::error::OpenAIError),
    EmptyResponse,
}

impl From<async_openai::error::OpenAIError> for LlmClientError {
    fn from(value: async_openai::error::OpenAIError) -> Self {
        Self::OpenAiClient(value)
    }
}

impl std::error::Error for LlmClientError {}

impl Display for LlmClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LlmClientError::OpenAiClient(e) => write!(f, "LlmClientError: OpenAiClient: {e}"),
            LlmClientError::EmptyResponse => {
                write!(f, "LlmClientError: Empty Response from service")
            }
        }
    }
}
