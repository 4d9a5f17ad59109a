use std::fmt::Display;

use colored::Colorize;
use url::Url;

use crate::cli_args::RunArgs;

#[derive(Debug)]
pub(crate) struct Config {
    pub(crate) task: String,
    pub(crate) llm_url: Url,
    pub(crate) llm_name: String,
    pub(crate) embed_url: Url,
    pub(crate) embed_name: String,
    pub(crate) api_key: Option<String>,
    pub(crate) breadth: Option<usize>,
    pub(crate) depth: Option<usize>,
}

impl From<RunArgs> for Config {
    fn from(value: RunArgs) -> Self {
        Config {
            task: value.task,
            llm_url: value.llm_url,
            llm_name: value.llm_name,
            embed_url: value.embed_url,
            embed_name: value.embed_name,
            api_key: value.api_key,
            breadth: value.breadth,
            depth: value.depth,
        }
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Config {
            task,
            llm_url,
            llm_name,
            embed_url,
            embed_name,
            api_key: _,
            breadth,
            depth,
        } = self;

        let task = task.as_str().green();

        let llm_url = llm_url.as_str().blue();
        let llm_name = llm_name.as_str().bright_blue();

        let embed_url = embed_url.as_str().blue();
        let embed_name = embed_name.as_str().bright_blue();

        let breadth = breadth
            .map(|breadth| breadth.to_string())
            .unwrap_or_else(|| String::from("task default"))
            .yellow();
        let depth = depth
            .map(|depth| depth.to_string())
            .unwrap_or_else(|| String::from("task default"))
            .yellow();

        write!(
            f,
            r#"Optimizing task {task}.
Using language model {llm_name} at {llm_url}.
Using embedder {embed_name} at {embed_url}.
Search breadth {breadth}, depth {depth}."#
        )
    }
}
