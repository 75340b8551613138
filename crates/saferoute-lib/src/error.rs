use thiserror::Error;

/// Convenient result alias for the SafeRoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge is inserted with a negative (or NaN) base cost.
    #[error("invalid edge cost {cost} for {source_node} -> {target_node}; costs must be non-negative")]
    InvalidEdgeCost {
        source_node: String,
        target_node: String,
        cost: f64,
    },

    /// Raised when a node name could not be found in the road network.
    #[error("unknown node: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a travel speed cannot be used for time projection.
    #[error("invalid travel speed {mph} mph; speed must be finite and positive")]
    InvalidSpeed { mph: f64 },

    /// Raised when a road-segment row could not be turned into graph edges.
    #[error("invalid road segment on line {line}: {message}")]
    NetworkParse { line: u64, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV decoding errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
