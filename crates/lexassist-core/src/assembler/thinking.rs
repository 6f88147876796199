//! Thinking-budget resolution.

use lexassist_types::protocol::ThinkingConfig;
use lexassist_types::ThinkingLevel;

/// Models that accept an explicit `thinkingBudget`.
pub fn supports_thinking_control(model: &str) -> bool {
    let model = model.strip_prefix("models/").unwrap_or(model);
    model.starts_with("gemini-2.5") || model.starts_with("gemini-3")
}

/// Thinking config for the call, or `None` to leave the model default.
pub fn resolve_thinking_config(model: &str, level: ThinkingLevel) -> Option<ThinkingConfig> {
    if !supports_thinking_control(model) {
        return None;
    }
    let budget = level.budget()?;
    Some(ThinkingConfig { thinking_budget: Some(budget), include_thoughts: None })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_applied_for_supported_models() {
        let cfg = resolve_thinking_config("gemini-2.5-pro", ThinkingLevel::Low).unwrap();
        assert_eq!(cfg.thinking_budget, Some(2048));
        let cfg = resolve_thinking_config("models/gemini-3-pro-preview", ThinkingLevel::Medium).unwrap();
        assert_eq!(cfg.thinking_budget, Some(8192));
    }

    #[test]
    fn test_high_uses_model_default() {
        assert!(resolve_thinking_config("gemini-2.5-flash", ThinkingLevel::High).is_none());
    }

    #[test]
    fn test_unsupported_model_gets_no_control() {
        assert!(resolve_thinking_config("gemini-2.0-flash", ThinkingLevel::Low).is_none());
        assert!(resolve_thinking_config("gemini-1.5-pro", ThinkingLevel::Medium).is_none());
    }
}
