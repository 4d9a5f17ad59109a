use crate::breeder::{
    mutator::{PromptForTaskPrompt, StopSequences},
    prompt::{MutationPrompt, ThinkingStyle},
    unit::{ScoredUnit, Unit},
};

/// Applies a mutation prompt and a thinking style to the current task
/// prompt.
pub(crate) struct FirstOrderPromptGeneration {
    pub(crate) mutation_prompt: MutationPrompt,
    pub(crate) thinking_style: ThinkingStyle,
}

impl PromptForTaskPrompt for FirstOrderPromptGeneration {
    fn prompt_for_task_prompt(&self, unit: &ScoredUnit) -> String {
        format!(
            "MUTATION: {} {}\nINSTRUCTION: {}\nINSTRUCTION MUTANT:",
            self.mutation_prompt,
            self.thinking_style,
            unit.get_task_prompt()
        )
    }
}

impl StopSequences for FirstOrderPromptGeneration {
    fn stop_sequences() -> Vec<String> {
        vec![String::from("\n")]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::breeder::test_support::scored_unit;

    #[test]
    fn prompt_carries_mutation_and_style() {
        let operator = FirstOrderPromptGeneration {
            mutation_prompt: MutationPrompt::new("Change this instruction to make it more fun."),
            thinking_style: ThinkingStyle::new("Let's think step by step."),
        };
        let unit = scored_unit("Read carefully, then decide.", 0.5);

        let prompt = operator.prompt_for_task_prompt(&unit);

        assert_eq!(
            prompt,
            "MUTATION: Change this instruction to make it more fun. Let's think step by step.\n\
             INSTRUCTION: Read carefully, then decide.\n\
             INSTRUCTION MUTANT:"
        );
    }
}
