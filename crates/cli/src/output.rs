use linktracer_domain::{AnalysisResult, RecordType};
use std::fmt::Write;

/// Plain-text report, one line per record.
pub fn render_human(domain: &str, target_domain: &str, result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Analysis Results for {}", domain);
    let _ = writeln!(
        out,
        "Similarity score with {}: {:.2}",
        target_domain, result.similarity
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "DNS Records:");

    if result.records.is_empty() {
        let _ = writeln!(out, "(none)");
    }

    for record in &result.records {
        let _ = write!(
            out,
            "- Type: {}, Name: {}, Value: {}, TTL: {}",
            record.record_type, record.name, record.value, record.ttl
        );
        if record.record_type == RecordType::MX {
            let _ = write!(out, ", Priority: {}", record.priority);
        }
        let _ = writeln!(out);
    }

    out
}

pub fn render_json(result: &AnalysisResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
