use colored::Colorize;

/// Renders the before/after accuracy table printed at the end of a run.
pub(crate) fn comparison_report(
    title: &str,
    dev_len: usize,
    baseline: f32,
    optimized: f32,
    winning_prompt: &str,
) -> String {
    let baseline_pct = format!("{:.1}%", baseline * 100.0);
    let optimized_pct = format!("{:.1}%", optimized * 100.0);
    let delta = (optimized - baseline) * 100.0;
    let delta = if delta >= 0.0 {
        format!("+{delta:.1}%").green()
    } else {
        format!("{delta:.1}%").red()
    };

    format!(
        r#"{title}
Dev set: {dev_len} examples.
Baseline accuracy:  {baseline_pct}
Optimized accuracy: {optimized_pct} ({delta})
Winning instruction:
    {winning_prompt}"#,
        title = title.bold(),
        baseline_pct = baseline_pct.yellow(),
        optimized_pct = optimized_pct.yellow(),
    )
}
