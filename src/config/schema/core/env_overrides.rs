use super::{Config, MAX_REVISION_CAP};

impl Config {
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Apply overrides from any variable source. Empty or unparsable values
    /// are ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("ESG_SCREENER_API_KEY").or_else(|| get("OPENAI_API_KEY")) {
            self.api_key = Some(key);
        }

        if let Some(url) = get("ESG_SCREENER_BASE_URL") {
            self.api_base_url = url;
        }

        if let Some(model) = get("ESG_SCREENER_MODEL") {
            self.agent.model = model;
        }

        if let Some(raw) = get("ESG_SCREENER_MAX_REVISIONS")
            && let Ok(revisions) = raw.trim().parse::<u32>()
            && revisions <= MAX_REVISION_CAP
        {
            self.evaluator.max_revisions = revisions;
        }

        if let Some(level) = get("ESG_SCREENER_LOG_LEVEL") {
            self.observability.log_level = level;
        }
    }
}
