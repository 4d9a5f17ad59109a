mod engine;
mod error;
mod mutator;
mod operator;
mod prompt;
mod unit;

pub(crate) use engine::Engine;
pub(crate) use error::PromptBreedingError;
pub(crate) use unit::Unit;

#[cfg(test)]
pub(crate) mod test_support {
    use super::{
        prompt::{MutationPrompt, ProblemDescription, TaskPrompt},
        unit::{ScoredUnit, UnitData},
    };

    pub(crate) fn scored_unit(task_prompt: &str, fitness: f32) -> ScoredUnit {
        ScoredUnit {
            unit: UnitData {
                problem_description: ProblemDescription::new("Classify the sentiment."),
                task_prompt: TaskPrompt::new(task_prompt),
                demos: vec![],
                embedding: vec![1.0, 0.0, 0.0],
                mutation_prompt: MutationPrompt::new("Seed."),
                elites: vec![],
                age: 0,
            },
            fitness,
        }
    }
}
