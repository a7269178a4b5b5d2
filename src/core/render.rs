//! Renderer module
//!
//! Renders a ScanResult to the dump document: indented JSON, non-ASCII kept verbatim.

use crate::core::error::Result;
use crate::core::model::ScanResult;

/// Render a scan result to a string
pub fn render_json(result: &ScanResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::FileRecord;

    fn sample() -> ScanResult {
        ScanResult::new(
            "weldtrack",
            "/srv/weldtrack",
            vec![FileRecord::new(
                "src/lib/types.ts",
                "// Сварной шов\n".to_string(),
            )],
        )
    }

    #[test]
    fn test_render_json_indents_two_spaces() {
        let json = render_json(&sample()).unwrap();
        assert!(json.starts_with("{\n  \"project_name\": \"weldtrack\","));
        assert!(json.contains("\n    {\n      \"path\": \"src/lib/types.ts\","));
        assert!(!json.ends_with('\n'));
    }

    #[test]
    fn test_render_json_keeps_non_ascii() {
        let json = render_json(&sample()).unwrap();
        assert!(json.contains("Сварной шов"));
        assert!(!json.contains("\\u"));
        assert!(json.contains("\\n"));
    }

    #[test]
    fn test_render_empty_files() {
        let json = render_json(&ScanResult::new("p", "/p", Vec::new())).unwrap();
        assert!(json.contains("\"total_files\": 0"));
        assert!(json.contains("\"files\": []"));
    }
}
