use super::LlmMessage;

pub(crate) struct LanguageServiceArguments {
    pub(crate) messages: Vec<LlmMessage>,
    pub(crate) max_tokens: u16,
    pub(crate) stop_phrases: Vec<String>,
}
