//! Screen command - run the assessment batch over the resolved targets.

use std::time::Duration;

use colored::Colorize;

use appscreen::{
    BatchOptions, GeminiProvider, LlmConfig, Progress, RetryPolicy, Screener, resolve_targets,
};

use crate::cli::Cli;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Credential check comes first; a missing key should fail before any
    // file is touched.
    let provider = GeminiProvider::from_env_with_config(LlmConfig {
        model: cli.model.clone(),
        ..Default::default()
    })?;

    let targets = resolve_targets(cli.csv.clone(), &cli.dir, &cli.out)?;

    let options = BatchOptions {
        start: cli.start,
        end: cli.end,
        pause: Duration::from_secs_f64(cli.sleep.max(0.0)),
        retry: RetryPolicy::new(cli.retries, cli.backoff.max(0.0)),
    };
    let screener = Screener::new(provider).with_options(options);

    for target in &targets {
        println!(
            "{} {}",
            "Screening".cyan().bold(),
            target.input.display().to_string().white()
        );

        let report = screener.screen_file(target, &mut render_progress)?;

        let Some(report) = report else {
            println!(
                "{} {} is empty",
                "[skip]".yellow(),
                target.input.display()
            );
            continue;
        };

        if cli.verbose {
            println!(
                "  {} {} rows, {} columns",
                report.source.format, report.source.row_count, report.source.column_count
            );
        }

        println!(
            "{} assessments for rows {}-{} to {}",
            "Saved".green().bold(),
            report.start,
            report.end,
            report.output.display().to_string().white()
        );
    }

    Ok(())
}

/// Render per-row and cooldown progress events.
fn render_progress(event: Progress) {
    match event {
        Progress::Row { index, end, record } => {
            let prefix: String = record.title.chars().take(40).collect();
            println!(
                "{} Processing row {}/{}: {}...",
                "[LLM]".cyan(),
                index,
                end,
                prefix
            );
        }
        Progress::Cooldown { wait } => {
            println!(
                "{} Rate limit hit. Cooling down {:.1}s...",
                "[429]".yellow(),
                wait.as_secs_f64()
            );
        }
    }
}
