//! `kisan predict` -- crop-yield prediction through the advisory proxy.

use std::io::Write;

use console::style;
use tracing::Instrument;

use kisan_core::prediction::{build_prompt, parse_prediction};
use kisan_observe::genai_attrs::OP_PREDICT_YIELD;
use kisan_types::advisory::{AdvisoryRequest, Provider};
use kisan_types::prediction::{FarmParameters, YieldPrediction};

use crate::state::AppState;

pub async fn predict(
    state: &AppState,
    params: FarmParameters,
    provider: Provider,
    model: Option<String>,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let prompt = build_prompt(&params)?;

    let mut request = AdvisoryRequest::new(prompt).with_provider(provider);
    if let Some(model) = model {
        request = request.with_model(model);
    }

    let span = tracing::info_span!(
        "predict_yield",
        gen_ai.operation.name = OP_PREDICT_YIELD,
        state = %params.state,
    );
    let content = state.advisory.advise(request).instrument(span).await?;
    let prediction = parse_prediction(&content)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&prediction)?)?;
    } else {
        render(&prediction, out)?;
    }
    Ok(())
}

fn render(prediction: &YieldPrediction, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "  {} Expected yield: {} t/ha  {}",
        style("🌾").bold(),
        style(format!("{:.2}", prediction.expected_yield)).green().bold(),
        style(format!("(confidence {:.0}%)", prediction.confidence)).dim()
    )?;
    if !prediction.explanation.is_empty() {
        writeln!(out)?;
        writeln!(out, "  {}", prediction.explanation)?;
    }

    writeln!(out)?;
    writeln!(out, "  {}", style("Factors").bold())?;
    for (name, score) in [
        ("Weather", prediction.factors.weather),
        ("Soil", prediction.factors.soil),
        ("Irrigation", prediction.factors.irrigation),
    ] {
        writeln!(out, "    {:<11} {}", name, style(format!("{score:.0}/100")).cyan())?;
    }

    if !prediction.recommendations.is_empty() {
        writeln!(out)?;
        writeln!(out, "  {}", style("Recommendations").bold())?;
        for rec in &prediction.recommendations {
            writeln!(out, "    {} {rec}", style("•").yellow())?;
        }
    }
    writeln!(out)?;
    Ok(())
}
