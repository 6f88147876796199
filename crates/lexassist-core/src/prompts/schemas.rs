//! Response schemas in the OpenAPI subset Gemini accepts.
//!
//! Property names are camelCase and must stay in step with the result types in
//! `lexassist_types::models`.

use serde_json::{json, Value};

pub fn contract_analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING", "description": "Executive summary of the contract in 3-5 sentences" },
            "contractType": { "type": "STRING" },
            "parties": { "type": "ARRAY", "items": { "type": "STRING" } },
            "riskScore": {
                "type": "INTEGER",
                "description": "Overall risk from 0 (none) to 100 (unacceptable) for the reviewing party"
            },
            "clauses": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "originalText": { "type": "STRING", "description": "Verbatim clause text" },
                        "riskLevel": { "type": "STRING", "enum": ["low", "medium", "high", "critical"] },
                        "explanation": { "type": "STRING" },
                        "suggestedRedline": { "type": "STRING", "description": "Replacement wording, if any" }
                    },
                    "required": ["title", "riskLevel", "explanation"]
                }
            },
            "missingClauses": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["summary", "riskScore", "clauses"]
    })
}

pub fn nda_triage_schema() -> Value {
    let verdict = json!({ "type": "STRING", "enum": ["green", "yellow", "red"] });
    json!({
        "type": "OBJECT",
        "properties": {
            "verdict": verdict,
            "summary": { "type": "STRING" },
            "findings": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "topic": { "type": "STRING", "description": "e.g. term, definition of confidential information, non-solicitation" },
                        "status": verdict,
                        "comment": { "type": "STRING" }
                    },
                    "required": ["topic", "status", "comment"]
                }
            }
        },
        "required": ["verdict", "summary", "findings"]
    })
}

pub fn risk_matrix_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "risks": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING", "description": "Short identifier such as R1" },
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "likelihood": { "type": "INTEGER", "description": "1 (rare) to 5 (almost certain)" },
                        "impact": { "type": "INTEGER", "description": "1 (negligible) to 5 (severe)" },
                        "mitigation": { "type": "STRING" }
                    },
                    "required": ["id", "title", "likelihood", "impact"]
                }
            }
        },
        "required": ["risks"]
    })
}

pub fn marketing_check_schema() -> Value {
    let severity = json!({ "type": "STRING", "enum": ["info", "warning", "violation"] });
    json!({
        "type": "OBJECT",
        "properties": {
            "overallStatus": severity,
            "issues": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "claim": { "type": "STRING", "description": "The advertising statement, quoted" },
                        "legalBasis": { "type": "STRING", "description": "Statutory reference, e.g. § 5 UWG" },
                        "severity": severity,
                        "recommendation": { "type": "STRING" }
                    },
                    "required": ["claim", "legalBasis", "severity", "recommendation"]
                }
            }
        },
        "required": ["overallStatus", "issues"]
    })
}

pub fn chronology_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "events": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "date": { "type": "STRING", "description": "YYYY-MM-DD when the exact date is known, otherwise the wording from the source" },
                        "description": { "type": "STRING" },
                        "source": { "type": "STRING", "description": "Document and page or paragraph" },
                        "significance": { "type": "STRING" }
                    },
                    "required": ["date", "description"]
                }
            }
        },
        "required": ["events"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexassist_types::models::{Chronology, ContractAnalysis, MarketingCheck, NdaTriage, RiskMatrix};

    /// A minimal instance built only from `required` properties must deserialize.
    fn minimal_instance(schema: &Value) -> Value {
        match schema["type"].as_str().unwrap() {
            "OBJECT" => {
                let mut obj = serde_json::Map::new();
                for key in schema["required"].as_array().into_iter().flatten() {
                    let key = key.as_str().unwrap();
                    obj.insert(key.to_string(), minimal_instance(&schema["properties"][key]));
                }
                Value::Object(obj)
            },
            "ARRAY" => json!([minimal_instance(&schema["items"])]),
            "INTEGER" => json!(3),
            "STRING" => match schema["enum"].as_array() {
                Some(values) => values[0].clone(),
                None => json!("text"),
            },
            other => panic!("unexpected schema type {}", other),
        }
    }

    #[test]
    fn test_required_fields_satisfy_result_types() {
        serde_json::from_value::<ContractAnalysis>(minimal_instance(&contract_analysis_schema())).unwrap();
        serde_json::from_value::<NdaTriage>(minimal_instance(&nda_triage_schema())).unwrap();
        serde_json::from_value::<RiskMatrix>(minimal_instance(&risk_matrix_schema())).unwrap();
        serde_json::from_value::<MarketingCheck>(minimal_instance(&marketing_check_schema())).unwrap();
        serde_json::from_value::<Chronology>(minimal_instance(&chronology_schema())).unwrap();
    }

    #[test]
    fn test_every_required_key_is_a_property() {
        for schema in [contract_analysis_schema(), nda_triage_schema(), marketing_check_schema()] {
            for key in schema["required"].as_array().unwrap() {
                assert!(schema["properties"].get(key.as_str().unwrap()).is_some(), "{}", key);
            }
        }
    }
}
