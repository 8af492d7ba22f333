use serde::{Deserialize, Serialize};

/// One investigation case, loaded from JSON at startup and never mutated.
/// Field names on the wire are camelCase, matching the published case files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseFile {
    /// Unique case id (e.g., "case-off-by-one").
    pub id: String,
    pub title: String,
    pub description: String,
    /// The crime scene: code containing the bug.
    pub code_buggy: String,
    /// The resolution: corrected code, revealed by the fix step.
    pub code_fixed: String,
    /// Revealed one at a time, in order.
    pub clues: Vec<String>,
    /// Revealed together by the witness step.
    pub witnesses: Vec<String>,
    /// Revealed together, in order, by the timeline step.
    pub timeline: Vec<String>,
    /// Display text for the culprit reveal.
    pub culprit: String,
    /// Accepted culprit identifications (case-insensitive match targets).
    pub answers: Vec<String>,
    /// Optional evidence image paths.
    #[serde(default)]
    pub images: Vec<String>,
}

impl CaseFile {
    /// Parse a single case from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_case() {
        let json = r#"{
            "id": "case-1",
            "title": "The Vanishing Semicolon",
            "description": "A statement ends where nobody expected.",
            "codeBuggy": "let a = 1\nlet b = 2",
            "codeFixed": "let a = 1;\nlet b = 2;",
            "clues": ["The parser complained on line 2."],
            "witnesses": ["The linter saw everything."],
            "timeline": ["14:02 build broke"],
            "culprit": "A missing semicolon",
            "answers": ["missing semicolon"],
            "images": ["evidence/lint.png"]
        }"#;
        let case = CaseFile::from_json(json).unwrap();
        assert_eq!(case.id, "case-1");
        assert_eq!(case.code_buggy, "let a = 1\nlet b = 2");
        assert_eq!(case.clues.len(), 1);
        assert_eq!(case.images, vec!["evidence/lint.png"]);
    }

    #[test]
    fn images_default_to_empty() {
        let json = r#"{
            "id": "c",
            "title": "t",
            "description": "d",
            "codeBuggy": "b",
            "codeFixed": "f",
            "clues": [],
            "witnesses": [],
            "timeline": [],
            "culprit": "x",
            "answers": []
        }"#;
        let case = CaseFile::from_json(json).unwrap();
        assert!(case.images.is_empty());
    }
}
