use thiserror::Error;

/// Returned when a string names no known [`Algorithm`](crate::Algorithm).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search algorithm \u{201c}{0}\u{201d} (expected bfs, astar or astar_fast)")]
pub struct ParseAlgorithmError(pub String);
