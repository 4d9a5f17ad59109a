mod direct;
mod population;

pub(crate) use direct::{DirectMutator, PromptForTaskPrompt, StopSequences};
pub(crate) use population::{
    DistributionEstimationMutator, GetPopulationPrompt, PopulationOrdering, PopulationSelector,
};

pub(crate) const MAX_MUTANT_TOKENS: u16 = 128;

/// Candidates at or above this cosine similarity to an existing member are
/// considered duplicates.
pub(crate) const NOVELTY_THRESHOLD: f64 = 0.95;
