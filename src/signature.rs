/// A named field with a free-text description shown to the model.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Field {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
}

/// A declarative task description: one instruction sentence, the input
/// fields a call consumes, and the single output field it produces.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Signature {
    pub(crate) instruction: &'static str,
    pub(crate) inputs: &'static [Field],
    pub(crate) output: Field,
}

pub(crate) const SENTIMENT_CLASSIFICATION: Signature = Signature {
    instruction: "Classify the sentiment of a text as positive or negative.",
    inputs: &[Field {
        name: "text",
        description: "The text to classify",
    }],
    output: Field {
        name: "sentiment",
        description: "Either 'positive' or 'negative'",
    },
};

pub(crate) const QUESTION_ANSWERING: Signature = Signature {
    instruction: "Answer a question based on provided context.",
    inputs: &[
        Field {
            name: "question",
            description: "The question to answer",
        },
        Field {
            name: "context",
            description: "Context containing the answer",
        },
    ],
    output: Field {
        name: "answer",
        description: "Concise answer to the question",
    },
};
