use rand::seq::SliceRandom;

use crate::{
    breeder::{
        prompt::MutationPrompt,
        unit::{ScoredUnit, Unit, UnitData, UnscoredUnit},
    },
    example::Example,
};

/// Swaps the unit's few-shot demos for a fresh random subset of the train
/// set. Purely local; no language model call.
pub(crate) struct ResampleDemos {}

impl ResampleDemos {
    pub(crate) fn mutate(
        unit: &ScoredUnit,
        trainset: &[Example],
        demo_count: usize,
    ) -> UnscoredUnit {
        let mut rng = rand::thread_rng();
        let demos = trainset
            .choose_multiple(&mut rng, demo_count)
            .cloned()
            .collect::<Vec<_>>();
        let new_unit = UnitData {
            problem_description: unit.get_problem_description().clone(),
            task_prompt: unit.get_task_prompt().clone(),
            demos,
            embedding: unit.get_embedding().clone(),
            mutation_prompt: MutationPrompt::new("Resample few-shot demos."),
            elites: unit.get_elites().clone(),
            age: unit.get_age() + 1usize,
        };

        UnscoredUnit { unit: new_unit }
    }
}
