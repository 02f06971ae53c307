//! Schema of the interpreter's reply and its tolerant parsing.
//!
//! The interpreter is asked for a single JSON object. Anything it wraps
//! around the object (markdown fences, prose) is discarded by taking the
//! span from the first `{` to the last `}`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::visual::VisualData;

/// Characters of raw text kept in a fallback overview.
pub const FALLBACK_OVERVIEW_CHARS: usize = 200;

/// Final divination result returned to the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivinationResult {
    pub overview: String,
    pub analysis: String,
    pub reasoning: String,
    pub suggestions: Vec<String>,
    pub probability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_data: Option<VisualData>,
}

/// Scalars become their text; arrays and objects their compact JSON.
fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Any JSON value as text; `null` is empty.
fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .map(value_text)
        .unwrap_or_default())
}

/// A list, a single item, or `null`. Blank items are dropped.
fn loose_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let items = match Option::<Value>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(single) => vec![single],
    };
    Ok(items
        .into_iter()
        .map(value_text)
        .filter(|s| !s.trim().is_empty())
        .collect())
}

/// Whatever object the interpreter returned. Field types are not trusted:
/// any value shape is coerced rather than rejected.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InterpreterReply {
    #[serde(default, deserialize_with = "loose_text")]
    overview: String,
    #[serde(default, deserialize_with = "loose_text")]
    analysis: String,
    #[serde(default, deserialize_with = "loose_text")]
    reasoning: String,
    #[serde(default, deserialize_with = "loose_list")]
    suggestions: Vec<String>,
    #[serde(default, deserialize_with = "loose_text")]
    probability: String,
    #[serde(default)]
    visual_data: Option<Value>,
}

/// Outermost `{ ... }` span of `text`, if any.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn truncated_overview(text: &str) -> String {
    let head: String = text.chars().take(FALLBACK_OVERVIEW_CHARS).collect();
    format!("{head}...")
}

/// Result when the reply holds no JSON object at all.
fn plain_text_fallback(text: &str) -> DivinationResult {
    DivinationResult {
        overview: truncated_overview(text),
        analysis: text.to_string(),
        reasoning: "基于传统术数逻辑和AI分析综合得出".into(),
        suggestions: vec![
            "请仔细阅读详细分析".into(),
            "结合实际情况判断".into(),
            "如需更精准分析请提供完整生辰信息".into(),
        ],
        probability: "参考度 70-75%".into(),
        visual_data: None,
    }
}

/// Result when the reply holds an object that does not parse.
fn malformed_json_fallback(text: &str) -> DivinationResult {
    DivinationResult {
        overview: "基于您的问题进行了综合分析".into(),
        analysis: text.to_string(),
        reasoning: "综合运用传统术数智慧进行推演".into(),
        suggestions: vec![
            "请仔细阅读详细分析内容".into(),
            "建议结合实际情况判断".into(),
            "可多次占卜参考".into(),
        ],
        probability: "参考度 70%".into(),
        visual_data: None,
    }
}

/// Turn raw interpreter text into a [`DivinationResult`].
///
/// The computed charts always replace whatever chart data the interpreter
/// produced; only `ziwei` and `fengshui` are taken from the reply.
pub fn parse_llm_reply(text: &str, computed: &VisualData) -> DivinationResult {
    let (mut result, interpreted) = match extract_json_object(text) {
        None => (plain_text_fallback(text), None),
        Some(json) => match serde_json::from_str::<InterpreterReply>(json) {
            Ok(reply) => (
                DivinationResult {
                    overview: reply.overview,
                    analysis: reply.analysis,
                    reasoning: reply.reasoning,
                    suggestions: reply.suggestions,
                    probability: reply.probability,
                    visual_data: None,
                },
                reply.visual_data,
            ),
            Err(e) => {
                warn!(error = %e, "interpreter reply is not valid JSON");
                (malformed_json_fallback(text), None)
            }
        },
    };
    let merged = computed.merge_interpreted(interpreted.as_ref());
    result.visual_data = (!merged.is_empty()).then_some(merged);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexagram::hexagram_from_numbers;

    #[test]
    fn extracts_fenced_object() {
        let text = "Here you go:\n```json\n{\"a\": {\"b\": 1}}\n```";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": 1}}"));
        assert_eq!(extract_json_object("no braces"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn parses_well_formed_reply() {
        let text = r#"{"overview":"吉","analysis":"长文","reasoning":"推演",
            "suggestions":["一","二"],"probability":"参考度 80%"}"#;
        let r = parse_llm_reply(text, &VisualData::default());
        assert_eq!(r.overview, "吉");
        assert_eq!(r.suggestions, vec!["一", "二"]);
        assert_eq!(r.visual_data, None);
    }

    #[test]
    fn loosely_typed_fields_are_kept() {
        let text = r#"{"overview":"大吉","analysis":{"事业":"顺"},"reasoning":null,
            "suggestions":"多行善事","probability":80}"#;
        let r = parse_llm_reply(text, &VisualData::default());
        assert_eq!(r.overview, "大吉");
        assert_eq!(r.analysis, r#"{"事业":"顺"}"#);
        assert_eq!(r.reasoning, "");
        assert_eq!(r.suggestions, vec!["多行善事"]);
        assert_eq!(r.probability, "80");
    }

    #[test]
    fn mixed_suggestion_list() {
        let text = r#"{"overview":"o","suggestions":["静心", 3, "", null, true]}"#;
        let r = parse_llm_reply(text, &VisualData::default());
        assert_eq!(r.suggestions, vec!["静心", "3", "true"]);
        assert_eq!(r.probability, "");
    }

    #[test]
    fn plain_text_gets_truncated_overview() {
        let text = "卦".repeat(250);
        let r = parse_llm_reply(&text, &VisualData::default());
        assert_eq!(r.overview.chars().count(), FALLBACK_OVERVIEW_CHARS + 3);
        assert!(r.overview.ends_with("..."));
        assert_eq!(r.analysis, text);
        assert_eq!(r.probability, "参考度 70-75%");
        assert_eq!(r.suggestions.len(), 3);
    }

    #[test]
    fn broken_json_uses_second_fallback() {
        let r = parse_llm_reply("{overview: oops}", &VisualData::default());
        assert_eq!(r.overview, "基于您的问题进行了综合分析");
        assert_eq!(r.probability, "参考度 70%");
    }

    #[test]
    fn computed_charts_override_invented_ones() {
        let computed = VisualData {
            hexagram: Some(hexagram_from_numbers(8, 8).unwrap()),
            ..Default::default()
        };
        let text = r#"{"overview":"o","analysis":"a","reasoning":"r","suggestions":[],
            "probability":"p","visualData":{"hexagram":{"upper":"乾"},"ziwei":{"star":"天府"}}}"#;
        let r = parse_llm_reply(text, &computed);
        let vd = r.visual_data.unwrap();
        assert_eq!(vd.hexagram, computed.hexagram);
        assert_eq!(vd.ziwei.unwrap()["star"], "天府");
    }

    #[test]
    fn fallback_still_carries_computed_charts() {
        let computed = VisualData {
            hexagram: Some(hexagram_from_numbers(2, 3).unwrap()),
            ..Default::default()
        };
        let r = parse_llm_reply("no json here", &computed);
        assert_eq!(r.visual_data.unwrap().hexagram, computed.hexagram);
    }

    #[test]
    fn result_json_field_names() {
        let r = parse_llm_reply("text", &VisualData::default());
        let v = serde_json::to_value(&r).unwrap();
        for key in ["overview", "analysis", "reasoning", "suggestions", "probability"] {
            assert!(v.get(key).is_some(), "{key}");
        }
        assert!(v.get("visualData").is_none());
    }
}
