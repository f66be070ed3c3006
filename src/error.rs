use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for the screener.
///
/// The orchestration core reports its own failures as terminal statuses on
/// [`crate::agent::RunResult`]; these types describe the individual failure
/// kinds so callers can branch on them. Plumbing code (config loading, CLI
/// dispatch) keeps using `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum ScreenerError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Completion / critique service ───────────────────────────────────
    #[error("service: {0}")]
    Service(#[from] ServiceError),

    // ── Tools ───────────────────────────────────────────────────────────
    #[error("tool: {0}")]
    Tool(#[from] ToolError),

    // ── Structured output ───────────────────────────────────────────────
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),

    // ── Prompt / Template ───────────────────────────────────────────────
    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Completion / critique service errors ───────────────────────────────────

/// Transport or provider failure of a completion-service call.
///
/// The generation loop never retries these; the revision loop decides what a
/// failure means depending on where it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("provider {provider} request failed: {message}")]
    Request { provider: String, message: String },

    #[error("provider {provider} returned HTTP {status}: {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("provider {provider} returned an unusable payload: {message}")]
    InvalidResponse { provider: String, message: String },

    #[error("provider {provider} API key not set")]
    MissingApiKey { provider: String },

    #[error("request timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    #[error("request cancelled")]
    Cancelled,
}

// ─── Tool errors ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("Tool '{name}' not found.")]
    NotFound { name: String },

    #[error("Tool '{name}' rejected its arguments: {message}")]
    InvalidArguments { name: String, message: String },

    #[error("Tool '{name}' failed: {message}")]
    Execution { name: String, message: String },
}

// ─── Extraction errors ──────────────────────────────────────────────────────

/// Why a structured record could not be recovered from model output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// Neither a fenced block nor a bare object was recognised.
    #[error("no structured value found in model output")]
    NoMatch,

    /// Something looked like a structured value but did not decode.
    #[error("malformed structured value: {0}")]
    MalformedValue(String),

    /// The value decoded but a field broke its contract.
    #[error("field `{field}` is invalid: {reason}")]
    InvalidField { field: String, reason: String },
}

// ─── Prompt / Template errors ───────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("template render failed: {0}")]
    Render(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, ScreenerError>;
