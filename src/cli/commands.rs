//! Command implementations

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::adapters::ytdlp_acquire::probe_duration;
use crate::adapters::{FfmpegRenderer, OpenRouterClient, WhisperCliTranscriber, YtDlpAcquirer};
use crate::app::{HighlightInteractor, PipelineRequest};
use crate::cli::args::{PlanArgs, ProbeArgs, RunArgs};
use crate::config::AppConfig;
use crate::domain::model::{CandidateCutPoint, CutPlan, ParseWarning, RejectedMoment, TimeSpec};
use crate::domain::rules::{assemble_plan, PlanOptions};

/// Execute the run command: the full pipeline
pub async fn run(args: RunArgs) -> Result<()> {
    let mut config = AppConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(model) = args.whisper_model {
        config.whisper_model = model;
    }
    if let Some(model) = args.llm_model {
        config.llm_model = model;
    }
    if let Some(padding) = args.padding {
        config.padding_seconds = padding;
    }

    let interactor = HighlightInteractor::new(
        Arc::new(YtDlpAcquirer::new()),
        Arc::new(WhisperCliTranscriber::new(config.whisper_model.clone())),
        Arc::new(OpenRouterClient::new(
            args.api_key,
            config.api_url.clone(),
            config.llm_model.clone(),
        )),
        Arc::new(FfmpegRenderer::new()),
        config,
    );

    let outcome = interactor
        .run(PipelineRequest {
            source: args.source,
            output_dir: args.output_dir,
        })
        .await
        .context("Pipeline run failed")?;

    match outcome.reel_path {
        Some(path) => {
            info!(
                segments = outcome.plan.segments.len(),
                reel_seconds = outcome.plan.total_duration,
                "highlight reel complete"
            );
            println!("Highlight reel written to {}", path.display());
        }
        None => println!("No highlights found in this video."),
    }
    Ok(())
}

/// Diagnostic report printed by the plan command
#[derive(Serialize)]
struct PlanReport {
    plan: CutPlan,
    rejected: Vec<RejectedMoment>,
    warnings: Vec<ParseWarning>,
    cut_points: Vec<CandidateCutPoint>,
}

/// Execute the plan command: assembly engine only, no rendering
pub async fn plan(args: PlanArgs) -> Result<()> {
    let duration = match (&args.duration, &args.input) {
        (Some(text), _) => TimeSpec::parse(text)
            .with_context(|| format!("Invalid duration '{}'", text))?,
        (None, Some(input)) => probe_duration(input)
            .await
            .with_context(|| format!("Failed to probe {}", input.display()))?,
        (None, None) => bail!("Either --duration or --input is required"),
    };

    let raw_text = std::fs::read_to_string(&args.highlights)
        .with_context(|| format!("Failed to read {}", args.highlights.display()))?;

    let options = PlanOptions {
        padding_seconds: args.padding,
    };
    let outcome = assemble_plan(&raw_text, duration, &options)?;

    if args.json {
        let report = PlanReport {
            plan: outcome.plan,
            rejected: outcome.rejected,
            warnings: outcome.warnings,
            cut_points: outcome.cut_points,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for warning in &outcome.warnings {
        warn!(line = ?warning.line, code = ?warning.reason, "{}", warning.message);
    }
    for rejected in &outcome.rejected {
        warn!(
            reason = %rejected.reason,
            title = %rejected.candidate.title,
            "candidate moment rejected"
        );
    }

    if outcome.no_highlights() {
        println!("No highlights found.");
        return Ok(());
    }

    println!(
        "Cut plan: {} segment(s), {:.1}s total",
        outcome.plan.segments.len(),
        outcome.plan.total_duration
    );
    for segment in &outcome.plan.segments {
        println!("  {} -> {}  {}", segment.start, segment.end, segment.title);
    }
    if !outcome.cut_points.is_empty() {
        println!("Suggested cut points:");
        for cut in &outcome.cut_points {
            match cut.timestamp {
                Some(ts) => println!("  {}  {}", ts, cut.reason),
                None => println!("  {} (unparsed)  {}", cut.timestamp_raw, cut.reason),
            }
        }
    }
    Ok(())
}

/// Execute the probe command
pub async fn probe(args: ProbeArgs) -> Result<()> {
    let duration = probe_duration(&args.input)
        .await
        .with_context(|| format!("Failed to probe {}", args.input.display()))?;

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "path": args.input.display().to_string(),
                "duration_seconds": duration.as_seconds(),
                "duration": duration.format_hms(),
            })
        );
    } else {
        println!("{} ({:.3}s)", duration.format_hms(), duration.as_seconds());
    }
    Ok(())
}
