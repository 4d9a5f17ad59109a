use super::MAX_MUTANT_TOKENS;
use crate::{
    breeder::{
        prompt::{MutationPrompt, TaskPrompt},
        unit::{ScoredUnit, Unit, UnitData, UnscoredUnit},
        PromptBreedingError,
    },
    embedding_client::EmbeddingClientService,
    llm_client::{LanguageServiceArguments, LlmClientService, LlmMessage},
};

pub(crate) trait PromptForTaskPrompt {
    fn prompt_for_task_prompt(&self, unit: &ScoredUnit) -> String;
}

pub(crate) trait StopSequences {
    fn stop_sequences() -> Vec<String>;
}

impl<T> DirectMutator for T where T: PromptForTaskPrompt + StopSequences {}
pub(crate) trait DirectMutator: PromptForTaskPrompt + StopSequences {
    async fn mutate<L: LlmClientService, E: EmbeddingClientService>(
        &self,
        llm: &L,
        embed: &E,
        unit: &ScoredUnit,
    ) -> Result<UnscoredUnit, PromptBreedingError> {
        let prompt = self.prompt_for_task_prompt(unit);
        let content = llm
            .get_llm_answer(LanguageServiceArguments {
                messages: vec![LlmMessage::system(prompt.clone())],
                max_tokens: MAX_MUTANT_TOKENS,
                stop_phrases: Self::stop_sequences(),
            })
            .await
            .map(|LlmMessage { role: _, content }| content)
            .map_err(PromptBreedingError::LlmError)?;
        let content = content.trim().trim_start_matches("1. ").trim().to_string();
        let embedding = embed.embed(&content).await?;
        let task_prompt = TaskPrompt::new(content);
        let new_unit = UnitData {
            problem_description: unit.get_problem_description().clone(),
            task_prompt,
            demos: unit.get_demos().clone(),
            embedding,
            mutation_prompt: MutationPrompt::new(prompt),
            elites: unit.get_elites().clone(),
            age: unit.get_age() + 1usize,
        };

        Ok(UnscoredUnit { unit: new_unit })
    }
}
