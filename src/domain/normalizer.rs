// Snapshot normalizer - flattens one snapshot document into a NormalizedSnapshot
use super::reading::{NormalizedSnapshot, Sample};
use super::snapshot::Snapshot;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// How a graph line contributes to the result, decided by its name alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Data,
    HighThreshold,
    LowThreshold,
    Ignored,
}

impl LineKind {
    pub fn classify(name: Option<&str>) -> Self {
        match name {
            Some("inRange" | "high" | "low") => LineKind::Data,
            Some("lineHigh") => LineKind::HighThreshold,
            Some("lineLow") => LineKind::LowThreshold,
            _ => LineKind::Ignored,
        }
    }
}

/// Structural problems in the graph section. These never escape the
/// normalizer; they only blank out the graph-derived fields.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph section is not an object")]
    GraphNotAnObject,
    #[error("graph lines is not a list")]
    LinesNotAList,
    #[error("line {line} is not an object")]
    LineNotAnObject { line: usize },
    #[error("line {line} has no points")]
    MissingPoints { line: usize },
    #[error("line {line} points is not a list")]
    PointsNotAList { line: usize },
    #[error("line {line} point {point} is not a [timestamp, value] pair: {source}")]
    MalformedPoint {
        line: usize,
        point: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the graph section contributes to the result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphData {
    pub samples: Vec<Sample>,
    pub high_threshold: Option<f64>,
    pub low_threshold: Option<f64>,
}

/// Normalize a typed snapshot. Never fails: missing fields come back as
/// `None` and a malformed graph leaves the scalar fields intact.
pub fn normalize(snapshot: &Snapshot) -> NormalizedSnapshot {
    let graph = match snapshot.graph() {
        Some(graph) => extract_graph(graph).unwrap_or_else(|e| {
            tracing::warn!("Error parsing graph data: {}", e);
            GraphData::default()
        }),
        None => GraphData::default(),
    };

    NormalizedSnapshot {
        battery_level: snapshot.battery_level(),
        trend: snapshot.trend().map(str::to_string),
        current_value: snapshot.current_value().cloned(),
        high_threshold: graph.high_threshold,
        low_threshold: graph.low_threshold,
        samples: graph.samples,
    }
}

pub fn normalize_value(document: &Value) -> NormalizedSnapshot {
    normalize(&Snapshot::from_value(document))
}

/// Parse raw snapshot text and normalize it. Only invalid JSON is an error.
pub fn normalize_str(raw: &str) -> Result<NormalizedSnapshot, serde_json::Error> {
    let document: Value = serde_json::from_str(raw)?;
    Ok(normalize_value(&document))
}

/// Walk `graph.lines`, collecting data samples (newest first) and the two
/// threshold values.
pub fn extract_graph(graph: &Value) -> Result<GraphData, GraphError> {
    let graph = graph.as_object().ok_or(GraphError::GraphNotAnObject)?;

    let lines = match graph.get("lines") {
        None | Some(Value::Null) => return Ok(GraphData::default()),
        Some(lines) => lines.as_array().ok_or(GraphError::LinesNotAList)?,
    };

    let mut data = GraphData::default();

    for (index, line) in lines.iter().enumerate() {
        let line_obj = line
            .as_object()
            .ok_or(GraphError::LineNotAnObject { line: index })?;
        let kind = LineKind::classify(line_obj.get("name").and_then(Value::as_str));
        if kind == LineKind::Ignored {
            continue;
        }
        let points = line_points(line_obj, index)?;

        match kind {
            LineKind::Data => {
                for (point, raw) in points.iter().enumerate() {
                    data.samples.push(parse_point(raw, index, point)?);
                }
            }
            LineKind::HighThreshold => {
                if let Some(first) = points.first() {
                    data.high_threshold = Some(parse_point(first, index, 0)?.value);
                }
            }
            LineKind::LowThreshold => {
                if let Some(first) = points.first() {
                    data.low_threshold = Some(parse_point(first, index, 0)?.value);
                }
            }
            LineKind::Ignored => {}
        }
    }

    // Stable, so equal timestamps keep their document order
    data.samples.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    Ok(data)
}

fn line_points(line: &Map<String, Value>, index: usize) -> Result<&Vec<Value>, GraphError> {
    match line.get("points") {
        None | Some(Value::Null) => Err(GraphError::MissingPoints { line: index }),
        Some(points) => points
            .as_array()
            .ok_or(GraphError::PointsNotAList { line: index }),
    }
}

fn parse_point(raw: &Value, line: usize, point: usize) -> Result<Sample, GraphError> {
    let (timestamp, value) = <(i64, f64)>::deserialize(raw)
        .map_err(|source| GraphError::MalformedPoint { line, point, source })?;
    Ok(Sample::new(timestamp, value))
}
