mod breeder;
mod cli_args;
mod config;
mod dataset;
mod embedding_client;
mod example;
mod formatter;
mod llm_client;
mod metric;
mod predictor;
mod signature;
mod task;

use std::sync::Arc;

use clap::Parser;
use indicatif::{MultiProgress, ProgressBar};
use indicatif_log_bridge::LogWrapper;

use crate::{
    breeder::{Engine, Unit},
    cli_args::{Cli, Commands},
    config::Config,
    embedding_client::EmbeddingClient,
    formatter::comparison_report,
    llm_client::OpenAiChatClient,
    metric::evaluate_predictor,
    predictor::Predictor,
};

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Commands::Tasks => {
            for task in task::TASKS {
                println!(
                    "{}: {} (breadth {}, depth {})",
                    task.name, task.title, task.breadth, task.depth
                );
            }
            Ok(())
        }
        Commands::Run(run_args) => {
            // ./gepa \
            //     run \
            //     --task \
            //     sentiment \
            //     --llm-name \
            //     "TheBloke/Mistral-7B-Instruct-v0.2-AWQ" \
            //     --llm-url \
            //     "http://vllm:8000/v1" \
            //     --embed-name \
            //     "thenlper/gte-small" \
            //     --embed-url \
            //     "http://infinity:9000/v1"
            let logger =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                    .build();

            let multi_progress = MultiProgress::new();

            LogWrapper::new(multi_progress.clone(), logger).try_init()?;

            let config = Config::from(run_args);
            let system_runner = tokio::runtime::Runtime::new()?;

            log::info!("\n{config}");

            system_runner.block_on(run(config, multi_progress))
        }
    }
}

async fn run(config: Config, multi_progress: MultiProgress) -> anyhow::Result<()> {
    let task = task::find(&config.task)?;
    let (trainset, devset) = (task.load)();
    let breadth = config.breadth.unwrap_or(task.breadth);
    let depth = config.depth.unwrap_or(task.depth);

    let llm = Arc::new(OpenAiChatClient::new(
        config.llm_url,
        config.llm_name,
        config.api_key.clone(),
    ));
    let embed = Arc::new(EmbeddingClient::new(
        config.embed_url,
        config.embed_name,
        config.api_key,
    ));
    llm.up().await?;
    embed.up().await?;

    let baseline_predictor = Predictor::chain_of_thought(task.signature);
    let progress = multi_progress.add(ProgressBar::new(devset.len() as u64));
    let baseline = evaluate_predictor(
        llm.as_ref(),
        &baseline_predictor,
        &devset,
        task.metric,
        Some(&progress),
    )
    .await?;
    progress.finish_and_clear();
    log::info!("Baseline dev accuracy: {baseline:.3}");

    let engine = Engine::new(llm.clone(), embed.clone());
    let best = engine.breed_prompt(task, &trainset, breadth, depth).await?;
    log::info!(
        "Best unit: train fitness {:.3}, age {}",
        best.fitness,
        best.get_age()
    );

    let optimized_predictor = Predictor::chain_of_thought(task.signature)
        .with_instruction(String::from(best.get_task_prompt().as_str()))
        .with_demos(best.get_demos().clone());
    let progress = multi_progress.add(ProgressBar::new(devset.len() as u64));
    let optimized = evaluate_predictor(
        llm.as_ref(),
        &optimized_predictor,
        &devset,
        task.metric,
        Some(&progress),
    )
    .await?;
    progress.finish_and_clear();

    println!(
        "{}",
        comparison_report(
            task.title,
            devset.len(),
            baseline,
            optimized,
            best.get_task_prompt().as_str(),
        )
    );
    Ok(())
}
