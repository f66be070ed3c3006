pub mod assessment;
pub mod evaluator;
pub mod extract;
pub mod prompts;
pub mod result;
pub mod service;
pub mod tool_loop;
pub mod trace;
pub mod verdict;

pub use assessment::Assessment;
pub use evaluator::{DEFAULT_FEEDBACK, DEFAULT_MAX_REVISIONS, RunConfig, run};
pub use extract::{Extraction, extract, recognize, strip_fence};
pub use result::{RunResult, RunStatus};
pub use service::CallGuard;
pub use tool_loop::{
    CEILING_MESSAGE, DEFAULT_MAX_ITERATIONS, LoopOutcome, ToolLoop, ToolLoopResult,
    ToolLoopRunParams,
};
pub use trace::TraceEntry;
pub use verdict::{Verdict, VerdictStatus};
