//! Web-search instructions appended to the final prompt when grounding is on.

use lexassist_types::ViewContext;

const GENERIC_SEARCH_INSTRUCTION: &str = "\n\nWEB SEARCH: Use Google Search to verify legal \
statements against current statutes, case law and official guidance. Prefer primary sources \
(official gazettes, court databases, supervisory authorities). Cite the sources you rely on.";

const DPIA_SEARCH_INSTRUCTION: &str = "\n\nWEB SEARCH: Use Google Search to verify, for every \
service provider or processor named in the material, its current certifications and transfer \
mechanisms (ISO/IEC 27001, SOC 2 Type II, BSI C5, EU-US Data Privacy Framework listing, \
Standard Contractual Clauses). Only state a certification as present if a current public source \
confirms it, and mark unverifiable claims as such. Also check current guidance from the \
competent data protection authorities. Cite the sources you rely on.";

const MARKETING_SEARCH_INSTRUCTION: &str = "\n\nWEB SEARCH: Use Google Search to check recent \
case law on misleading advertising and unfair competition (UWG, UCPD) for comparable claims, \
including rulings on environmental and health claims. Cite the sources you rely on.";

/// Instruction text for the given feature, starting with a blank-line separator.
pub fn search_instruction(view: ViewContext) -> &'static str {
    match view {
        ViewContext::Dpia => DPIA_SEARCH_INSTRUCTION,
        ViewContext::MarketingCompliance => MARKETING_SEARCH_INSTRUCTION,
        ViewContext::ContractReview
        | ViewContext::NdaTriage
        | ViewContext::RiskMatrix
        | ViewContext::Chronology
        | ViewContext::General => GENERIC_SEARCH_INSTRUCTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpia_mentions_certifications() {
        let text = search_instruction(ViewContext::Dpia);
        assert!(text.contains("ISO/IEC 27001"));
        assert!(text.contains("Data Privacy Framework"));
        assert!(!search_instruction(ViewContext::General).contains("ISO/IEC 27001"));
    }
}
