use rand::seq::SliceRandom;

use crate::breeder::{
    mutator::{GetPopulationPrompt, PopulationOrdering, PopulationSelector},
    unit::{Population, ScoredUnit},
};

/// Continues a shuffled listing of the scored population; score order is
/// deliberately hidden from the model.
pub(crate) struct EstimationOfDistributionMutation {}

impl PopulationSelector for EstimationOfDistributionMutation {
    fn select<'a>(population: &'a Population, _unit: &'a ScoredUnit) -> Vec<&'a ScoredUnit> {
        population.scored.iter().collect::<Vec<_>>()
    }
}

impl PopulationOrdering for EstimationOfDistributionMutation {
    fn ordering(population_subsample: &mut Vec<&ScoredUnit>) {
        population_subsample.shuffle(&mut rand::thread_rng())
    }
}

impl GetPopulationPrompt for EstimationOfDistributionMutation {
    fn get_prompt(&self, population_subsample: &[&ScoredUnit]) -> String {
        let len = population_subsample.len();
        let prompt_list = Self::format_prompt_list(population_subsample);
        format!(
            "A List of responses in random order of score.\n{prompt_list}\n{}.",
            len + 1
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::breeder::test_support::scored_unit;

    #[test]
    fn prompt_numbers_the_subsample() {
        let first = scored_unit("Read carefully, then decide.", 0.25);
        let second = scored_unit("Weigh the tone of each phrase.", 0.75);
        let subsample = vec![&first, &second];

        let prompt = EstimationOfDistributionMutation {}.get_prompt(&subsample);

        assert_eq!(
            prompt,
            "A List of responses in random order of score.\n\
             1. Read carefully, then decide.\n\
             2. Weigh the tone of each phrase.\n\
             3."
        );
    }
}
