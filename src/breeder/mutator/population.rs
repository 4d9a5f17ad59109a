use simsimd::SpatialSimilarity;

use super::{MAX_MUTANT_TOKENS, NOVELTY_THRESHOLD};
use crate::{
    breeder::{
        prompt::{MutationPrompt, TaskPrompt},
        unit::{Population, ScoredUnit, Unit, UnitData, UnscoredUnit},
        PromptBreedingError,
    },
    embedding_client::EmbeddingClientService,
    llm_client::{LanguageServiceArguments, LlmClientService, LlmMessage},
};

/// Bounded re-roll budget for the novelty filter; after this many similar
/// candidates the last one is accepted.
const MAX_NOVELTY_ATTEMPTS: usize = 4;

// simsimd computes cosine distance; flip it so identical vectors score 1.0.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    1.0 - f32::cosine(a, b).unwrap_or(1.0)
}

pub(crate) trait GetPopulationPrompt {
    fn get_prompt(&self, population_subsample: &[&ScoredUnit]) -> String;

    fn format_prompt_list(population_subsample: &[&ScoredUnit]) -> String {
        population_subsample
            .iter()
            .enumerate()
            .map(|(index, unit)| format!("{}. {}", index + 1, unit.get_task_prompt()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub(crate) trait PopulationSelector {
    fn select<'a>(population: &'a Population, unit: &'a ScoredUnit) -> Vec<&'a ScoredUnit>;
}

pub(crate) trait PopulationOrdering {
    fn ordering(population_subsample: &mut Vec<&ScoredUnit>);
}

impl<T> DistributionEstimationMutator for T where
    T: GetPopulationPrompt + PopulationOrdering + PopulationSelector
{
}
pub(crate) trait DistributionEstimationMutator:
    GetPopulationPrompt + PopulationOrdering + PopulationSelector
{
    async fn mutate<L: LlmClientService, E: EmbeddingClientService>(
        &self,
        llm: &L,
        embed: &E,
        population: &Population,
        unit: &ScoredUnit,
    ) -> Result<UnscoredUnit, PromptBreedingError> {
        let mut scored_population = Self::select(population, unit);
        Self::filter_population(&mut scored_population);
        Self::ordering(&mut scored_population);
        self.create_new_unit(llm, embed, unit, scored_population).await
    }

    async fn create_new_unit<L: LlmClientService, E: EmbeddingClientService>(
        &self,
        llm: &L,
        embed: &E,
        unit: &ScoredUnit,
        population_subsample: Vec<&ScoredUnit>,
    ) -> Result<UnscoredUnit, PromptBreedingError> {
        let mut new_unit = self
            .mutate_population(llm, embed, &population_subsample, unit)
            .await?;
        for attempt in 1..MAX_NOVELTY_ATTEMPTS {
            let novel = population_subsample.iter().all(|extant_member| {
                cosine_similarity(new_unit.get_embedding(), extant_member.get_embedding())
                    < NOVELTY_THRESHOLD
            });
            if novel {
                break;
            }
            log::debug!("attempt {attempt}: candidate too close to an existing member");
            new_unit = self
                .mutate_population(llm, embed, &population_subsample, unit)
                .await?;
        }
        Ok(new_unit)
    }

    /// Drop members near-identical to one already kept.
    fn filter_population(scored_population: &mut Vec<&ScoredUnit>) {
        let mut kept: Vec<&ScoredUnit> = vec![];
        for member in scored_population.drain(..) {
            if kept.iter().all(|extant_member| {
                cosine_similarity(member.get_embedding(), extant_member.get_embedding())
                    < NOVELTY_THRESHOLD
            }) {
                kept.push(member);
            }
        }
        *scored_population = kept;
    }

    async fn mutate_population<L: LlmClientService, E: EmbeddingClientService>(
        &self,
        llm: &L,
        embed: &E,
        population_subsample: &[&ScoredUnit],
        unit: &ScoredUnit,
    ) -> Result<UnscoredUnit, PromptBreedingError> {
        let prompt = self.get_prompt(population_subsample);
        let item_label = format!("{}.", population_subsample.len() + 1);
        let stop_sequence = format!("\n{}.", population_subsample.len() + 2);
        let content = llm
            .get_llm_answer(LanguageServiceArguments {
                messages: vec![LlmMessage::system(prompt.clone())],
                max_tokens: MAX_MUTANT_TOKENS,
                stop_phrases: vec![stop_sequence],
            })
            .await
            .map(|LlmMessage { role: _, content }| content)
            .map_err(PromptBreedingError::LlmError)?;
        let content = content
            .trim()
            .trim_start_matches(item_label.as_str())
            .trim()
            .to_string();
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::breeder::{operator::EstimationOfDistributionMutation, test_support::scored_unit};

    #[test]
    fn identical_vectors_are_duplicates() {
        let a = vec![0.1f32, 0.5, 0.4];

        assert!(cosine_similarity(&a, &a) >= NOVELTY_THRESHOLD);
    }

    #[test]
    fn orthogonal_vectors_are_novel() {
        let a = vec![1.0f32, 0.0, 0.0];
        let b = vec![0.0f32, 1.0, 0.0];

        assert!(cosine_similarity(&a, &b) < NOVELTY_THRESHOLD);
    }

    #[test]
    fn filter_drops_near_identical_members() {
        let first = scored_unit("Read carefully, then decide.", 0.25);
        let twin = scored_unit("Weigh the tone of each phrase.", 0.75);
        let mut subsample = vec![&first, &twin];

        // Both fixtures carry the same embedding.
        EstimationOfDistributionMutation::filter_population(&mut subsample);

        assert_eq!(subsample.len(), 1);
        assert_eq!(subsample[0].fitness, 0.25);
    }
}
