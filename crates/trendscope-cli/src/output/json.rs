//! JSON output formatter (request-boundary shape)

use trendscope_core::PipelineResult;

pub fn format_result(result: &PipelineResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string()) + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_matches_boundary_shape() {
        let result: PipelineResult = serde_json::from_str(
            r##"{"keywords": [["neural networks", 2]], "report": "# Directions"}"##,
        )
        .unwrap();

        let out = format_result(&result);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["keywords"][0][0], "neural networks");
        assert_eq!(value["report"], "# Directions");
        assert!(value.get("error").is_none());
    }
}
