mod arguments;
mod error;
mod openai;
mod protocol;

pub(crate) use arguments::LanguageServiceArguments;
pub(crate) use error::LlmClientError;
pub(crate) use openai::OpenAiChatClient;
pub(crate) use protocol::{LlmMessage, LlmRole};

pub(crate) trait LlmClientBackend {
    async fn get_response(
        &self,
        arguments: LanguageServiceArguments,
    ) -> Result<String, LlmClientError>;
}

impl<T> LlmClientService for T where T: LlmClientBackend {}
pub(crate) trait LlmClientService: LlmClientBackend {
    async fn get_llm_answer(
        &self,
        arguments: LanguageServiceArguments,
    ) -> Result<LlmMessage, LlmClientError> {
        let content = self.get_response(arguments).await?;
        Ok(LlmMessage {
            role: LlmRole::Assistant,
            content,
        })
    }
}
