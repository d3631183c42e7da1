// Console report for a single reading
use crate::application::glucose_service::ReadingReport;
use crate::domain::reading::Sample;
use std::fmt::{Display, Write};

const PREVIEW_ROWS: usize = 5;
const ABSENT: &str = "n/a";

fn or_absent<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| ABSENT.to_string(), |v| v.to_string())
}

fn write_samples(out: &mut String, title: &str, samples: &[Sample]) {
    let _ = writeln!(out, "{}", title);
    if samples.is_empty() {
        let _ = writeln!(out, "  (no samples)");
    }
    for sample in samples {
        let _ = writeln!(out, "  {:>14}  {:?}", sample.timestamp, sample.value);
    }
}

/// Render the scalar fields followed by the newest and oldest samples
pub fn render_report(report: &ReadingReport) -> String {
    let reading = &report.reading;
    let mut out = String::new();

    if let Some(error) = &report.error {
        let _ = writeln!(out, "Error: {}", error);
    }

    let battery = reading.battery_level.map(|b| format!("{}%", b));
    let _ = writeln!(out, "Battery: {}", or_absent(battery));
    let _ = writeln!(out, "Trend: {}", or_absent(reading.trend.as_deref()));
    let _ = writeln!(out, "Current Value: {}", or_absent(reading.current_value.as_ref()));
    let _ = writeln!(out, "High Threshold: {}", or_absent(reading.high_threshold.map(|v| format!("{:?}", v))));
    let _ = writeln!(out, "Low Threshold: {}", or_absent(reading.low_threshold.map(|v| format!("{:?}", v))));
    let _ = writeln!(out, "{}", "-".repeat(30));

    let samples = &reading.samples;
    let head = &samples[..samples.len().min(PREVIEW_ROWS)];
    let tail = &samples[samples.len().saturating_sub(PREVIEW_ROWS)..];

    write_samples(&mut out, &format!("First {} samples:", head.len()), head);
    let _ = writeln!(out, "{}", "-".repeat(30));
    write_samples(&mut out, &format!("Last {} samples:", tail.len()), tail);

    out
}
