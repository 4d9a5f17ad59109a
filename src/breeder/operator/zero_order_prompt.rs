use crate::breeder::{
    mutator::{PromptForTaskPrompt, StopSequences},
    unit::{ScoredUnit, Unit},
};

/// Rerolls a task prompt from the problem description alone, ignoring the
/// current prompt.
pub(crate) struct ZeroOrderPromptGeneration {}

impl PromptForTaskPrompt for ZeroOrderPromptGeneration {
    fn prompt_for_task_prompt(&self, unit: &ScoredUnit) -> String {
        format!(
            "INSTRUCTION: {}\nA list of 100 hints:\n1. ",
            unit.get_problem_description()
        )
    }
}

impl StopSequences for ZeroOrderPromptGeneration {
    fn stop_sequences() -> Vec<String> {
        vec![String::from("\n2.")]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::breeder::test_support::scored_unit;

    #[test]
    fn prompt_uses_problem_description_not_task_prompt() {
        let unit = scored_unit("Read carefully, then decide.", 0.5);

        let prompt = ZeroOrderPromptGeneration {}.prompt_for_task_prompt(&unit);

        assert_eq!(
            prompt,
            "INSTRUCTION: Classify the sentiment.\nA list of 100 hints:\n1. "
        );
    }
}
