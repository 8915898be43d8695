use crate::types::GenerationResult;

/// The agent's reply could not be turned into a [`GenerationResult`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Agent response contained no JSON object")]
    NoJson,

    #[error("Agent response did not match the output schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Extract the JSON object from a model response.
///
/// Strips markdown fences, leading commentary, and trailing commentary to
/// return only the outermost `{ ... }` block.
pub fn extract_json(response: &str) -> String {
    let trimmed = response.trim();

    if trimmed.is_empty() {
        return String::new();
    }

    let mut text = trimmed;

    // Remove opening fence: ```json or ```
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest.trim_start_matches('\n');
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start_matches('\n');
    }

    // Remove closing fence
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end_matches('\n');
    }

    // Keep the outermost object, dropping commentary on either side
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => text[start..=end].to_string(),
        _ => text.trim().to_string(),
    }
}

/// Parse a raw model response into a [`GenerationResult`].
pub fn parse_generation(response: &str) -> Result<GenerationResult, ParseError> {
    let json = extract_json(response);
    if !json.starts_with('{') {
        return Err(ParseError::NoJson);
    }
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"files":[{"path":"README.md","content":"hi"}],"notes":"ok"}"#;

    #[test]
    fn test_clean_json_passes_through() {
        assert_eq!(extract_json(BODY), BODY);
    }

    #[test]
    fn test_json_wrapped_in_json_fence() {
        let response = format!("```json\n{BODY}\n```");
        assert_eq!(extract_json(&response), BODY);
    }

    #[test]
    fn test_json_wrapped_in_plain_fence() {
        let response = format!("```\n{BODY}\n```");
        assert_eq!(extract_json(&response), BODY);
    }

    #[test]
    fn test_leading_and_trailing_commentary() {
        let response = format!("Here is the scaffold:\n```json\n{BODY}\n```\nLet me know!");
        assert_eq!(extract_json(&response), BODY);
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(extract_json(""), "");
        assert_eq!(extract_json("   "), "");
    }

    #[test]
    fn test_braces_inside_content_survive() {
        let body = r#"{"files":[{"path":"src/p/__init__.py","content":"x = {}\n"}]}"#;
        let result = parse_generation(body).unwrap();
        assert_eq!(result.files[0].content, "x = {}\n");
    }

    #[test]
    fn test_parse_generation_reads_notes() {
        let result = parse_generation(&format!("```json\n{BODY}\n```")).unwrap();
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.notes.as_deref(), Some("ok"));
    }

    #[test]
    fn test_parse_generation_without_json() {
        assert!(matches!(
            parse_generation("I cannot do that."),
            Err(ParseError::NoJson)
        ));
    }

    #[test]
    fn test_parse_generation_schema_mismatch() {
        assert!(matches!(
            parse_generation(r#"{"paths":["README.md"]}"#),
            Err(ParseError::Schema(_))
        ));
    }
}
