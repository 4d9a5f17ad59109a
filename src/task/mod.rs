use std::fmt::{Display, Formatter};

use crate::{
    dataset::{qa_data, sentiment_data, DatasetLoader},
    metric::{qa_accuracy, sentiment_accuracy, Metric},
    signature::{Signature, QUESTION_ANSWERING, SENTIMENT_CLASSIFICATION},
};

/// Configuration record bundling a dataset loader, a signature, a metric,
/// and the optimizer tuning parameters for one task.
pub(crate) struct TaskDescriptor {
    pub(crate) name: &'static str,
    pub(crate) title: &'static str,
    pub(crate) signature: Signature,
    pub(crate) load: DatasetLoader,
    pub(crate) metric: Metric,
    /// Prompt variants generated per round.
    pub(crate) breadth: usize,
    /// Optimization rounds.
    pub(crate) depth: usize,
    /// Few-shot demos a mutated candidate may carry.
    pub(crate) demo_count: usize,
}

pub(crate) const TASKS: &[TaskDescriptor] = &[
    TaskDescriptor {
        name: "sentiment",
        title: "Sentiment Classification",
        signature: SENTIMENT_CLASSIFICATION,
        load: sentiment_data,
        metric: sentiment_accuracy,
        breadth: 2,
        depth: 1,
        demo_count: 2,
    },
    TaskDescriptor {
        name: "qa",
        title: "Question Answering",
        signature: QUESTION_ANSWERING,
        load: qa_data,
        metric: qa_accuracy,
        breadth: 3,
        depth: 2,
        demo_count: 2,
    },
];

#[derive(Debug)]
pub(crate) struct UnknownTaskError(pub(crate) String);

impl std::error::Error for UnknownTaskError {}

impl Display for UnknownTaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let known = TASKS
            .iter()
            .map(|task| task.name)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Unknown task '{}'. Must be one of [{known}]", self.0)
    }
}

pub(crate) fn find(name: &str) -> Result<&'static TaskDescriptor, UnknownTaskError> {
    TASKS
        .iter()
        .find(|task| task.name == name)
        .ok_or_else(|| UnknownTaskError(String::from(name)))
}
