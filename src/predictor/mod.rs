mod error;

pub(crate) use error::PredictError;

use regex::Regex;

use crate::{
    example::{Example, Prediction},
    llm_client::{LanguageServiceArguments, LlmClientService, LlmMessage},
    signature::Signature,
};

const REASONING_FIELD: &str = "reasoning";
const REASONING_DESCRIPTION: &str = "Think step by step before answering";
const MAX_ANSWER_TOKENS: u16 = 256;

/// A language-model-calling module bound to one [`Signature`]. Carries the
/// instruction variant under optimization and optional few-shot demos, and
/// asks for intermediate reasoning before the answer field.
#[derive(Clone, Debug)]
pub(crate) struct Predictor {
    signature: Signature,
    instruction: String,
    demos: Vec<Example>,
}

fn label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Predictor {
    pub(crate) fn chain_of_thought(signature: Signature) -> Self {
        Self {
            instruction: String::from(signature.instruction),
            signature,
            demos: vec![],
        }
    }

    pub(crate) fn with_instruction(mut self, instruction: String) -> Self {
        self.instruction = instruction;
        self
    }

    pub(crate) fn with_demos(mut self, demos: Vec<Example>) -> Self {
        self.demos = demos;
        self
    }

    pub(crate) fn system_prompt(&self) -> String {
        let mut format_lines = self
            .signature
            .inputs
            .iter()
            .map(|field| format!("{}: {}", label(field.name), field.description))
            .collect::<Vec<_>>();
        format_lines.push(format!(
            "{}: {}",
            label(REASONING_FIELD),
            REASONING_DESCRIPTION
        ));
        format_lines.push(format!(
            "{}: {}",
            label(self.signature.output.name),
            self.signature.output.description
        ));

        format!(
            "{}\n\nRespond using the exact format:\n{}",
            self.instruction,
            format_lines.join("\n")
        )
    }

    pub(crate) fn user_prompt(&self, example: &Example) -> Result<String, PredictError> {
        let mut blocks = vec![];
        for demo in &self.demos {
            let mut lines = self.input_lines(demo)?;
            let output = demo.get(self.signature.output.name).ok_or_else(|| {
                PredictError::MissingOutputField(String::from(self.signature.output.name))
            })?;
            lines.push(format!("{}: {}", label(self.signature.output.name), output));
            blocks.push(lines.join("\n"));
        }
        blocks.push(self.input_lines(example)?.join("\n"));
        Ok(blocks.join("\n\n"))
    }

    fn input_lines(&self, example: &Example) -> Result<Vec<String>, PredictError> {
        self.signature
            .inputs
            .iter()
            .map(|field| {
                example
                    .get(field.name)
                    .map(|value| format!("{}: {}", label(field.name), value))
                    .ok_or_else(|| PredictError::MissingInputField(String::from(field.name)))
            })
            .collect()
    }

    pub(crate) fn parse_response(&self, content: &str) -> Result<Prediction, PredictError> {
        let mut prediction = Prediction::default();
        if let Some(reasoning) = field_value(content, REASONING_FIELD)? {
            prediction.insert(REASONING_FIELD, reasoning);
        }
        let answer = field_value(content, self.signature.output.name)?.ok_or_else(|| {
            PredictError::MissingOutputField(String::from(self.signature.output.name))
        })?;
        prediction.insert(self.signature.output.name, answer);
        Ok(prediction)
    }

    pub(crate) async fn forward<L: LlmClientService>(
        &self,
        llm: &L,
        example: &Example,
    ) -> Result<Prediction, PredictError> {
        let arguments = LanguageServiceArguments {
            messages: vec![
                LlmMessage::system(self.system_prompt()),
                LlmMessage::user(self.user_prompt(example)?),
            ],
            max_tokens: MAX_ANSWER_TOKENS,
            stop_phrases: vec![],
        };
        let LlmMessage { role: _, content } = llm.get_llm_answer(arguments).await?;
        self.parse_response(&content)
    }
}

/// Last `Label: value` line in the completion wins; models tend to echo the
/// format block before filling it in.
fn field_value(content: &str, name: &str) -> Result<Option<String>, PredictError> {
    let pattern = format!(r"(?im)^{}\s*:[ \t]*(.+)$", regex::escape(&label(name)));
    let regex = Regex::new(&pattern).map_err(PredictError::FieldPattern)?;
    Ok(regex
        .captures_iter(content)
        .last()
        .and_then(|captures| captures.get(1))
        .map(|value| String::from(value.as_str().trim())))
}
