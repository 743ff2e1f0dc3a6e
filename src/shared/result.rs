/// Type alias for Result with anyhow::Error as the error type, used across
/// the report, fixture, and CLI modules so callers get one error surface.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
