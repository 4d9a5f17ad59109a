use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ListModelResponse, Stop,
    },
    Client,
};
use backoff::{future::retry, ExponentialBackoff};
use url::Url;

use super::{LanguageServiceArguments, LlmClientBackend, LlmClientError, LlmMessage, LlmRole};

pub(crate) struct OpenAiChatClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl OpenAiChatClient {
    pub(crate) fn new(url: Url, model_name: String, api_key: Option<String>) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_base(url);
        if let Some(api_key) = api_key {
            openai_config = openai_config.with_api_key(api_key);
        }
        let client = Client::with_config(openai_config);
        Self { client, model_name }
    }

    /// Readiness probe, retried with exponential backoff until the service
    /// answers a model listing.
    pub(crate) async fn up(&self) -> Result<ListModelResponse, LlmClientError> {
        retry(ExponentialBackoff::default(), || async {
            Ok(self.client.models().list().await?)
        })
        .await
        .map_err(LlmClientError::OpenAiClient)
    }
}

fn request_message(message: &LlmMessage) -> Result<ChatCompletionRequestMessage, LlmClientError> {
    let LlmMessage { role, content } = message;
    let message = match role {
        LlmRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content.as_str())
            .build()
            .map(ChatCompletionRequestMessage::Assistant)?,
        LlmRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content.as_str())
            .build()
            .map(ChatCompletionRequestMessage::User)?,
        LlmRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content.as_str())
            .build()
            .map(ChatCompletionRequestMessage::System)?,
    };
    Ok(message)
}

impl LlmClientBackend for OpenAiChatClient {
    async fn get_response(
        &self,
        arguments: LanguageServiceArguments,
    ) -> Result<String, LlmClientError> {
        if let Ok(transcript) = serde_json::to_string(&arguments.messages) {
            log::trace!("{transcript}");
        }
        let messages = arguments
            .messages
            .iter()
            .map(request_message)
            .collect::<Result<Vec<_>, _>>()?;

        let mut request = CreateChatCompletionRequestArgs::default();
        request
            .max_tokens(arguments.max_tokens)
            .model(&self.model_name)
            .n(1)
            .messages(messages);
        if !arguments.stop_phrases.is_empty() {
            request.stop(Stop::StringArray(arguments.stop_phrases));
        }
        let request = request.build()?;

        let response = self.client.chat().create(request).await?;

        let response = response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmClientError::EmptyResponse)?
            .message
            .content
            .ok_or(LlmClientError::EmptyResponse)?;
        Ok(response)
    }
}
