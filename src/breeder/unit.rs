use std::fmt::Display;

use super::prompt::{MutationPrompt, ProblemDescription, TaskPrompt};
use crate::example::Example;

#[derive(Clone)]
pub(crate) struct UnitData {
    pub(crate) problem_description: ProblemDescription,
    pub(crate) task_prompt: TaskPrompt,
    pub(crate) demos: Vec<Example>,
    pub(crate) embedding: Vec<f32>,
    pub(crate) mutation_prompt: MutationPrompt,
    pub(crate) elites: Vec<ScoredUnit>,
    pub(crate) age: usize,
}

#[derive(Clone)]
pub(crate) struct ScoredUnit {
    pub(crate) unit: UnitData,
    pub(crate) fitness: f32,
}

#[derive(Clone)]
pub(crate) struct UnscoredUnit {
    pub(crate) unit: UnitData,
}

impl Display for UnitData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.task_prompt)
    }
}
impl Display for UnscoredUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unit)
    }
}
impl Display for ScoredUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unit)
    }
}

#[derive(Clone, Default)]
pub(crate) struct Population {
    pub(crate) unscored: Vec<UnscoredUnit>,
    pub(crate) scored: Vec<ScoredUnit>,
    pub(crate) elites: Vec<ScoredUnit>,
}

pub(crate) trait Unit {
    fn get_problem_description(&self) -> &ProblemDescription;
    fn get_task_prompt(&self) -> &TaskPrompt;
    fn get_demos(&self) -> &Vec<Example>;
    fn get_embedding(&self) -> &Vec<f32>;
    fn get_mutation_prompt(&self) -> &MutationPrompt;
    fn get_elites(&self) -> &Vec<ScoredUnit>;
    fn get_age(&self) -> &usize;
}

macro_rules! impl_unit_for_containing_unitdata {
    ($($t:ty),+) => {
        $(impl Unit for $t {
            fn get_problem_description(&self) -> &ProblemDescription {
                &self.unit.problem_description
            }

            fn get_task_prompt(&self) -> &TaskPrompt {
                &self.unit.task_prompt
            }

            fn get_demos(&self) -> &Vec<Example> {
                &self.unit.demos
            }

            fn get_embedding(&self) -> &Vec<f32> {
                &self.unit.embedding
            }

            fn get_mutation_prompt(&self) -> &MutationPrompt {
                &self.unit.mutation_prompt
            }

            fn get_elites(&self) -> &Vec<ScoredUnit> {
                &self.unit.elites
            }

            fn get_age(&self) -> &usize {
                &self.unit.age
            }
        })*
    };
}

impl_unit_for_containing_unitdata!(ScoredUnit, UnscoredUnit);

#[cfg(test)]
mod test {
    use super::*;
    use crate::breeder::test_support::scored_unit;

    #[test]
    fn accessors_reach_through_both_wrappers() {
        let scored = scored_unit("Read carefully, then decide.", 0.75);
        let unscored = UnscoredUnit {
            unit: scored.unit.clone(),
        };

        assert_eq!(
            scored.get_task_prompt().as_str(),
            "Read carefully, then decide."
        );
        assert_eq!(
            unscored.get_task_prompt().as_str(),
            scored.get_task_prompt().as_str()
        );
        assert_eq!(*scored.get_age(), 0);
        assert_eq!(scored.get_mutation_prompt().as_str(), "Seed.");
        assert_eq!(scored.fitness, 0.75);
        assert_eq!(format!("{scored}"), "Read carefully, then decide.");
    }
}
