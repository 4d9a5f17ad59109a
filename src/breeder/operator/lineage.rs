use crate::breeder::{
    mutator::{GetPopulationPrompt, PopulationOrdering, PopulationSelector},
    unit::{Population, ScoredUnit, Unit},
};

/// Continues the unit's elite ancestry, oldest first.
pub(crate) struct LineageMutation {}

impl PopulationSelector for LineageMutation {
    fn select<'a>(_population: &'a Population, unit: &'a ScoredUnit) -> Vec<&'a ScoredUnit> {
        unit.get_elites().iter().collect::<Vec<_>>()
    }
}

impl PopulationOrdering for LineageMutation {
    fn ordering(population_subsample: &mut Vec<&ScoredUnit>) {
        population_subsample.sort_by(|a, b| a.get_age().cmp(b.get_age()))
    }
}

impl GetPopulationPrompt for LineageMutation {
    fn get_prompt(&self, population_subsample: &[&ScoredUnit]) -> String {
        let len = population_subsample.len();
        let prompt_list = Self::format_prompt_list(population_subsample);

        format!(
            "INSTRUCTION GENOTYPES FOUND IN ASCENDING ORDER OF QUALITY\n{prompt_list}\n{}.",
            len + 1
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::breeder::test_support::scored_unit;

    #[test]
    fn selects_the_unit_lineage() {
        let ancestor = scored_unit("Guess quickly.", 0.25);
        let mut unit = scored_unit("Weigh the tone of each phrase.", 0.75);
        unit.unit.elites.push(ancestor);
        let population = Population::default();

        let subsample = LineageMutation::select(&population, &unit);

        assert_eq!(subsample.len(), 1);
        assert_eq!(subsample[0].fitness, 0.25);
    }
}
