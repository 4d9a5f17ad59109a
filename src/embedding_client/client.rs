use async_openai::{
    config::OpenAIConfig,
    types::{CreateEmbeddingRequestArgs, ListModelResponse},
    Client,
};
use backoff::{future::retry, ExponentialBackoff};
use url::Url;

use super::{EmbeddingClientService, EmbeddingServiceError};

pub(crate) struct EmbeddingClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl EmbeddingClient {
    pub(crate) fn new(url: Url, model_name: String, api_key: Option<String>) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_base(url);
        if let Some(api_key) = api_key {
            openai_config = openai_config.with_api_key(api_key);
        }
        let client = Client::with_config(openai_config);
        Self { client, model_name }
    }

    pub(crate) async fn up(&self) -> Result<ListModelResponse, EmbeddingServiceError> {
        retry(ExponentialBackoff::default(), || async {
            Ok(self.client.models().list().await?)
        })
        .await
        .map_err(EmbeddingServiceError::AsyncOpenAiError)
    }
}

impl EmbeddingClientService for EmbeddingClient {
    async fn embed(&self, query: &str) -> Result<Vec<f32>, EmbeddingServiceError> {
        let embeddings = self.embed_batch(vec![String::from(query)]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or(EmbeddingServiceError::EmbeddingSizeMismatch(1, 0))
    }

    async fn embed_batch(
        &self,
        queries: Vec<String>,
    ) -> Result<Vec<Vec<f32>>, EmbeddingServiceError> {
        let expected = queries.len();
        let request = CreateEmbeddingRequestArgs::default()
            .model(&self.model_name)
            .input(queries)
            .build()?;

        let response = self.client.embeddings().create(request).await?;

        if response.data.len() != expected {
            return Err(EmbeddingServiceError::EmbeddingSizeMismatch(
                expected,
                response.data.len(),
            ));
        }

        let mut embeddings = response.data;
        embeddings.sort_by_key(|e| e.index);
        Ok(embeddings.into_iter().map(|e| e.embedding).collect())
    }
}
