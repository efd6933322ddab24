//! Grammar problems reported by the service.

use serde::{Deserialize, Deserializer, Serialize};

/// One grammar problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarProblem {
    /// The phrase the problem was found in.
    pub phrase: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Service identifier of the problem.
    #[serde(deserialize_with = "deserialize_id")]
    pub problem_id: String,
    /// Suggested rewrites of `phrase`.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl GrammarProblem {
    /// Byte offsets of every occurrence of the phrase in `text`.
    pub fn occurrences_in<'a>(&'a self, text: &'a str) -> impl Iterator<Item = usize> + 'a {
        text.match_indices(self.phrase.as_str())
            .map(|(start, _)| start)
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Number(id) => id.to_string(),
        Id::Text(id) => id,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize() {
        let problems: Vec<GrammarProblem> = serde_json::from_value(json!([
            {
                "phrase": "type text",
                "description": "Missing preposition.",
                "problem_id": "436864176",
                "suggestions": ["type of text"],
            },
            {"phrase": "an examples", "problem_id": 17},
        ]))
        .unwrap();

        assert_eq!(problems[0].problem_id, "436864176");
        assert_eq!(problems[0].suggestions, vec!["type of text"]);
        assert_eq!(problems[1].problem_id, "17");
        assert!(problems[1].description.is_empty());
    }

    #[test]
    fn test_occurrences() {
        let problem = GrammarProblem {
            phrase: "an examples".to_string(),
            description: String::new(),
            problem_id: "1".to_string(),
            suggestions: vec![],
        };
        let text = "These are an examples, an examples indeed.";
        assert_eq!(problem.occurrences_in(text).collect::<Vec<_>>(), vec![10, 23]);
    }
}
