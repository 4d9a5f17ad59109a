use std::sync::Arc;

use futures::future::join_all;
use rand::{seq::SliceRandom, Rng};

use super::{
    mutator::{DirectMutator, DistributionEstimationMutator, MAX_MUTANT_TOKENS},
    operator::{
        EstimationOfDistributionMutation, FirstOrderPromptGeneration, LineageMutation,
        OperatorKind, RankAndIndexMutation, ResampleDemos, ZeroOrderPromptGeneration,
    },
    prompt::{MutationPrompt, ProblemDescription, TaskPrompt, ThinkingStyle},
    unit::{Population, ScoredUnit, Unit, UnitData, UnscoredUnit},
    PromptBreedingError,
};
use crate::{
    embedding_client::EmbeddingClientService,
    example::Example,
    llm_client::{LanguageServiceArguments, LlmClientService, LlmMessage},
    metric::evaluate_predictor,
    predictor::Predictor,
    task::TaskDescriptor,
};

const THINKING_STYLES: &[&str] = &[
    "Let's think step by step.",
    "Make up a systematic answer that makes you look quite clever.",
    "Consider the opposite conclusion first, then argue your way back.",
];

const MUTATION_PROMPTS: &[&str] = &[
    "Change this instruction to make it more fun.",
    "Mutate the prompt with an unexpected twist.",
    "Modify the instruction like no self-respecting LLM would.",
];

pub(crate) struct Engine<L, E> {
    llm: Arc<L>,
    embed: Arc<E>,
}

impl<L, E> Engine<L, E>
where
    L: LlmClientService,
    E: EmbeddingClientService,
{
    pub(crate) fn new(llm: Arc<L>, embed: Arc<E>) -> Self {
        Self { llm, embed }
    }

    /// Runs the generation loop: seed the pool, score it, then `depth`
    /// rounds of `breadth` binary tournaments, each replacing a loser with
    /// a mutant of the winner. Returns the fittest unit seen.
    pub(crate) async fn breed_prompt(
        &self,
        task: &TaskDescriptor,
        trainset: &[Example],
        breadth: usize,
        depth: usize,
    ) -> Result<ScoredUnit, PromptBreedingError> {
        let problem_description = ProblemDescription::new(task.signature.instruction);
        let mut population = self
            .initialize_population(task, trainset, &problem_description)
            .await?;
        self.score_unscored(&mut population, task, trainset).await?;
        if population.scored.is_empty() {
            return Err(PromptBreedingError::EmptyPopulation);
        }
        Self::record_elite(&mut population);

        for generation in 1..=depth {
            for _ in 0..breadth {
                let Some((winner, loser_index)) = Self::tournament(&population) else {
                    break;
                };
                let mutant = self
                    .mutate_unit(&population, &winner, trainset, task.demo_count)
                    .await?;
                population.unscored.push(mutant);
                if let Some(loser_index) = loser_index {
                    population.scored.swap_remove(loser_index);
                }
            }
            self.score_unscored(&mut population, task, trainset).await?;
            Self::record_elite(&mut population);
            if let Some(best) = Self::best(&population) {
                log::info!(
                    "Generation {generation}/{depth}: best fitness {:.3} for '{}'",
                    best.fitness,
                    best.unit.task_prompt
                );
            }
        }

        Self::best(&population)
            .cloned()
            .ok_or(PromptBreedingError::EmptyPopulation)
    }

    /// Seed pool: the baseline instruction plus one LLM rewrite per
    /// thinking-style and mutation-prompt pair. Failed variants are logged
    /// and dropped; the baseline always survives.
    async fn initialize_population(
        &self,
        task: &TaskDescriptor,
        trainset: &[Example],
        problem_description: &ProblemDescription,
    ) -> Result<Population, PromptBreedingError> {
        let mut population = Population::default();
        let baseline_embedding = self.embed.embed(task.signature.instruction).await?;
        population.unscored.push(UnscoredUnit {
            unit: UnitData {
                problem_description: problem_description.clone(),
                task_prompt: TaskPrompt::new(task.signature.instruction),
                demos: vec![],
                embedding: baseline_embedding,
                mutation_prompt: MutationPrompt::new("Baseline instruction."),
                elites: vec![],
                age: 0,
            },
        });

        let variants = {
            let mut rng = rand::thread_rng();
            let mut variants = vec![];
            for style in THINKING_STYLES {
                for mutation in MUTATION_PROMPTS {
                    let demos = trainset
                        .choose_multiple(&mut rng, task.demo_count)
                        .cloned()
                        .collect::<Vec<_>>();
                    variants.push((
                        ThinkingStyle::new(*style),
                        MutationPrompt::new(*mutation),
                        demos,
                    ));
                }
            }
            variants
        };

        let seeds = variants.into_iter().map(|(style, mutation, demos)| {
            let problem_description = problem_description.clone();
            async move {
                let mutation_instruction = format!(
                    "{mutation} INSTRUCTION: {style} {problem_description} INSTRUCTION MUTANT: "
                );
                let answer = self
                    .llm
                    .get_llm_answer(LanguageServiceArguments {
                        messages: vec![LlmMessage::system(mutation_instruction.clone())],
                        max_tokens: MAX_MUTANT_TOKENS,
                        stop_phrases: vec![String::from("\n")],
                    })
                    .await;
                let content = match answer {
                    Ok(LlmMessage { role: _, content }) => content.trim().to_string(),
                    Err(e) => {
                        log::error!("{e}");
                        return None;
                    }
                };
                if content.is_empty() {
                    return None;
                }
                match self.embed.embed(&content).await {
                    Ok(embedding) => Some(UnscoredUnit {
                        unit: UnitData {
                            problem_description,
                            task_prompt: TaskPrompt::new(content),
                            demos,
                            embedding,
                            mutation_prompt: MutationPrompt::new(mutation_instruction),
                            elites: vec![],
                            age: 0,
                        },
                    }),
                    Err(e) => {
                        log::error!("{e}");
                        None
                    }
                }
            }
        });

        for unit in join_all(seeds).await.into_iter().flatten() {
            population.unscored.push(unit);
        }

        Ok(population)
    }

    async fn score_unscored(
        &self,
        population: &mut Population,
        task: &TaskDescriptor,
        trainset: &[Example],
    ) -> Result<(), PromptBreedingError> {
        let pending = population.unscored.drain(..).collect::<Vec<_>>();
        for unscored in pending {
            let predictor = Predictor::chain_of_thought(task.signature)
                .with_instruction(String::from(unscored.get_task_prompt().as_str()))
                .with_demos(unscored.get_demos().clone());
            let fitness = evaluate_predictor(
                self.llm.as_ref(),
                &predictor,
                trainset,
                task.metric,
                None,
            )
            .await?;
            log::debug!(
                "fitness {fitness:.3} for '{}' bred by '{}'",
                unscored.get_task_prompt(),
                unscored.get_mutation_prompt()
            );
            population.scored.push(ScoredUnit {
                unit: unscored.unit,
                fitness,
            });
        }
        Ok(())
    }

    /// Pit two random distinct members against each other; the fitter one
    /// is cloned as winner and the other marked for replacement. With one
    /// member there is nothing to replace.
    fn tournament(population: &Population) -> Option<(ScoredUnit, Option<usize>)> {
        let len = population.scored.len();
        match len {
            0 => None,
            1 => Some((population.scored[0].clone(), None)),
            _ => {
                let mut rng = rand::thread_rng();
                let first = rng.gen_range(0..len);
                let mut second = rng.gen_range(0..len - 1);
                if second >= first {
                    second += 1;
                }
                let (winner, loser) =
                    if population.scored[first].fitness >= population.scored[second].fitness {
                        (first, second)
                    } else {
                        (second, first)
                    };
                Some((population.scored[winner].clone(), Some(loser)))
            }
        }
    }

    async fn mutate_unit(
        &self,
        population: &Population,
        unit: &ScoredUnit,
        trainset: &[Example],
        demo_count: usize,
    ) -> Result<UnscoredUnit, PromptBreedingError> {
        let kind = {
            let mut rng = rand::thread_rng();
            OperatorKind::choose(&mut rng, population, unit, trainset.len())
        };
        log::debug!("applying {kind:?} to '{}'", unit.unit.task_prompt);
        let mut mutant = match kind {
            OperatorKind::ZeroOrderPrompt => {
                ZeroOrderPromptGeneration {}
                    .mutate(self.llm.as_ref(), self.embed.as_ref(), unit)
                    .await?
            }
            OperatorKind::FirstOrderPrompt => {
                let (mutation_prompt, thinking_style) = {
                    let mut rng = rand::thread_rng();
                    (
                        MutationPrompt::new(
                            *MUTATION_PROMPTS.choose(&mut rng).unwrap_or(&MUTATION_PROMPTS[0]),
                        ),
                        ThinkingStyle::new(
                            *THINKING_STYLES.choose(&mut rng).unwrap_or(&THINKING_STYLES[0]),
                        ),
                    )
                };
                FirstOrderPromptGeneration {
                    mutation_prompt,
                    thinking_style,
                }
                .mutate(self.llm.as_ref(), self.embed.as_ref(), unit)
                .await?
            }
            OperatorKind::EstimationOfDistribution => {
                EstimationOfDistributionMutation {}
                    .mutate(self.llm.as_ref(), self.embed.as_ref(), population, unit)
                    .await?
            }
            OperatorKind::RankAndIndex => {
                RankAndIndexMutation {}
                    .mutate(self.llm.as_ref(), self.embed.as_ref(), population, unit)
                    .await?
            }
            OperatorKind::Lineage => {
                LineageMutation {}
                    .mutate(self.llm.as_ref(), self.embed.as_ref(), population, unit)
                    .await?
            }
            OperatorKind::ResampleDemos => ResampleDemos::mutate(unit, trainset, demo_count),
        };

        // The winner joins its descendant's lineage, stored flat.
        let mut ancestor = unit.clone();
        ancestor.unit.elites.clear();
        mutant.unit.elites.push(ancestor);
        Ok(mutant)
    }

    fn record_elite(population: &mut Population) {
        let Some(best) = population
            .scored
            .iter()
            .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
        else {
            return;
        };
        let improved = population
            .elites
            .last()
            .map_or(true, |elite| best.fitness > elite.fitness);
        if improved {
            let mut elite = best.clone();
            elite.unit.elites.clear();
            population.elites.push(elite);
        }
    }

    fn best(population: &Population) -> Option<&ScoredUnit> {
        population
            .scored
            .iter()
            .chain(population.elites.iter())
            .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        embedding_client::EmbeddingServiceError,
        llm_client::{LlmClientBackend, LlmClientError},
        task,
    };

    /// Scripted chat backend. Mutation prompts get a fixed rewrite; task
    /// queries are answered by a tone heuristic that is perfect on the
    /// sentiment dataset.
    struct ScriptedLlm;

    impl LlmClientBackend for ScriptedLlm {
        async fn get_response(
            &self,
            arguments: LanguageServiceArguments,
        ) -> Result<String, LlmClientError> {
            let system = &arguments.messages[0].content;
            if system.contains("INSTRUCTION MUTANT")
                || system.contains("A list of 100 hints")
                || system.contains("A List of responses")
                || system.contains("INSTRUCTION GENOTYPES")
            {
                return Ok(String::from(
                    "Weigh the reviewer's tone, then answer positive or negative.",
                ));
            }
            let user = &arguments.messages[1].content;
            let query = user
                .lines()
                .rev()
                .find(|line| line.starts_with("Text:"))
                .unwrap_or("");
            if query.contains('!') {
                Ok(String::from("Reasoning: Enthusiastic tone.\nSentiment: positive"))
            } else {
                Ok(String::from("Reasoning: Flat or hostile tone.\nSentiment: negative"))
            }
        }
    }

    /// Deterministic embedding derived from the content bytes.
    struct ScriptedEmbed;

    impl EmbeddingClientService for ScriptedEmbed {
        async fn embed(&self, query: &str) -> Result<Vec<f32>, EmbeddingServiceError> {
            let sum = query.bytes().map(f32::from).sum::<f32>();
            Ok(vec![query.len() as f32, sum, 1.0])
        }

        async fn embed_batch(
            &self,
            queries: Vec<String>,
        ) -> Result<Vec<Vec<f32>>, EmbeddingServiceError> {
            let mut embeddings = vec![];
            for query in queries {
                embeddings.push(self.embed(&query).await?);
            }
            Ok(embeddings)
        }
    }

    struct FailingLlm;

    impl LlmClientBackend for FailingLlm {
        async fn get_response(
            &self,
            _arguments: LanguageServiceArguments,
        ) -> Result<String, LlmClientError> {
            Err(LlmClientError::EmptyResponse)
        }
    }

    #[tokio::test]
    async fn breeding_returns_the_fittest_unit() {
        let task = task::find("sentiment").unwrap();
        let (trainset, _) = (task.load)();
        let engine = Engine::new(Arc::new(ScriptedLlm), Arc::new(ScriptedEmbed));

        let best = engine
            .breed_prompt(task, &trainset, task.breadth, task.depth)
            .await
            .unwrap();

        // The scripted heuristic is perfect on the train set, whatever the
        // surviving prompt says.
        assert_eq!(best.fitness, 1.0);
        assert!(!best.unit.task_prompt.as_str().is_empty());
    }

    #[tokio::test]
    async fn evaluation_failures_propagate() {
        let task = task::find("sentiment").unwrap();
        let (trainset, _) = (task.load)();
        let engine = Engine::new(Arc::new(FailingLlm), Arc::new(ScriptedEmbed));

        let result = engine.breed_prompt(task, &trainset, 2, 1).await;

        assert!(matches!(
            result,
            Err(PromptBreedingError::EvaluationError(_))
        ));
    }

    #[test]
    fn tournament_needs_a_populated_pool() {
        let population = Population::default();

        assert!(Engine::<ScriptedLlm, ScriptedEmbed>::tournament(&population).is_none());
    }

    #[test]
    fn elites_record_strict_improvements_only() {
        use crate::breeder::test_support::scored_unit;

        let mut population = Population {
            scored: vec![scored_unit("Guess quickly.", 0.25)],
            ..Population::default()
        };
        Engine::<ScriptedLlm, ScriptedEmbed>::record_elite(&mut population);
        assert_eq!(population.elites.len(), 1);

        // Same best fitness again: no new elite.
        Engine::<ScriptedLlm, ScriptedEmbed>::record_elite(&mut population);
        assert_eq!(population.elites.len(), 1);

        population
            .scored
            .push(scored_unit("Weigh the tone of each phrase.", 0.75));
        Engine::<ScriptedLlm, ScriptedEmbed>::record_elite(&mut population);
        assert_eq!(population.elites.len(), 2);
        assert_eq!(population.elites[1].fitness, 0.75);
    }
}
