use crate::breeder::{
    mutator::{GetPopulationPrompt, PopulationOrdering, PopulationSelector},
    unit::{Population, ScoredUnit},
};

/// Continues a listing of the scored population in descending fitness
/// order.
pub(crate) struct RankAndIndexMutation {}

impl PopulationSelector for RankAndIndexMutation {
    fn select<'a>(population: &'a Population, _unit: &'a ScoredUnit) -> Vec<&'a ScoredUnit> {
        population.scored.iter().collect::<Vec<_>>()
    }
}

impl PopulationOrdering for RankAndIndexMutation {
    fn ordering(population_subsample: &mut Vec<&ScoredUnit>) {
        population_subsample.sort_by(|a, b| b.fitness.total_cmp(&a.fitness))
    }
}

impl GetPopulationPrompt for RankAndIndexMutation {
    fn get_prompt(&self, population_subsample: &[&ScoredUnit]) -> String {
        let len = population_subsample.len();
        let prompt_list = Self::format_prompt_list(population_subsample);
        format!(
            "A List of responses in descending order of score.\n{prompt_list}\n{}.",
            len + 1
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::breeder::test_support::scored_unit;

    #[test]
    fn orders_by_descending_fitness() {
        let weak = scored_unit("Guess quickly.", 0.25);
        let strong = scored_unit("Weigh the tone of each phrase.", 0.75);
        let mut subsample = vec![&weak, &strong];

        RankAndIndexMutation::ordering(&mut subsample);

        assert_eq!(subsample[0].fitness, 0.75);
        assert_eq!(subsample[1].fitness, 0.25);
    }
}
