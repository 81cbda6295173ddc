use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub id: String,
    pub created_at: String,
    pub status: String,
    pub target_model: String,
    pub total_cases: u64,
    pub passed_cases: u64,
    pub average_score: f64,
    pub overall_pass: bool,
}

impl RunSummary {
    /// Upstream guarantees `passed_cases <= total_cases`; records are shown either way.
    pub fn is_consistent(&self) -> bool {
        self.passed_cases <= self.total_cases
    }
}

/// Envelope returned by the list endpoint. The backend pages its rows under
/// `items`, older builds under `runs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunList {
    #[serde(default, alias = "items")]
    pub runs: Vec<RunSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDetail {
    pub id: String,
    pub created_at: String,
    pub status: String,
    pub target_model: String,
    pub prompt: String,
    pub total_cases: u64,
    pub passed_cases: u64,
    pub average_score: f64,
    pub overall_pass: bool,
    pub pass_threshold: f64,
    #[serde(default)]
    pub results: Vec<ResultItem>,
}

impl RunDetail {
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            id: self.id.clone(),
            created_at: self.created_at.clone(),
            status: self.status.clone(),
            target_model: self.target_model.clone(),
            total_cases: self.total_cases,
            passed_cases: self.passed_cases,
            average_score: self.average_score,
            overall_pass: self.overall_pass,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub test_case_id: String,
    pub input_text: String,
    #[serde(default)]
    pub expected_output: Option<String>,
    pub model_output: String,
    pub heuristic_score: f64,
    pub judge_score: f64,
    pub combined_score: f64,
    pub passed: bool,
    pub judge_reasoning: String,
}

/// Visual verdict a badge is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Pass,
    Fail,
    Default,
}

impl Verdict {
    pub fn from_pass(passed: bool) -> Self {
        if passed {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_JSON: &str = r#"{
        "id": "3f1c",
        "created_at": "2024-05-02T09:30:00.123456",
        "status": "completed",
        "target_model": "gpt-4o-mini",
        "prompt": "You are a helpful, concise assistant.",
        "total_cases": 2,
        "passed_cases": 1,
        "average_score": 0.8333333,
        "overall_pass": false,
        "pass_threshold": 0.75,
        "results": [
            {
                "test_case_id": "a",
                "input_text": "Hello",
                "expected_output": "Input: Hello",
                "model_output": "Input: Hello",
                "heuristic_score": 1.0,
                "judge_score": 0.9,
                "combined_score": 0.95,
                "passed": true,
                "judge_reasoning": "Matches."
            },
            {
                "test_case_id": "b",
                "input_text": "What is 2+2?",
                "expected_output": null,
                "model_output": "5",
                "heuristic_score": 0.5,
                "judge_score": 0.7,
                "combined_score": 0.6,
                "passed": false,
                "judge_reasoning": "Wrong arithmetic."
            }
        ]
    }"#;

    #[test]
    fn parse_run_detail_preserves_result_order() {
        let run: RunDetail = serde_json::from_str(DETAIL_JSON).unwrap();
        assert_eq!(run.results.len(), 2);
        assert_eq!(run.results[0].test_case_id, "a");
        assert_eq!(run.results[1].test_case_id, "b");
        assert_eq!(run.results[1].expected_output, None);
        assert_eq!(run.pass_threshold, 0.75);
    }

    #[test]
    fn expected_output_may_be_absent() {
        let json = r#"{"test_case_id":"x","input_text":"i","model_output":"o",
            "heuristic_score":0,"judge_score":0,"combined_score":0,
            "passed":false,"judge_reasoning":""}"#;
        let item: ResultItem = serde_json::from_str(json).unwrap();
        assert!(item.expected_output.is_none());
    }

    #[test]
    fn run_list_defaults_to_empty() {
        let list: RunList = serde_json::from_str("{}").unwrap();
        assert!(list.runs.is_empty());
    }

    #[test]
    fn run_list_accepts_paged_items() {
        let json = r#"{"items":[{"id":"1","created_at":"c","status":"completed",
            "target_model":"m","total_cases":3,"passed_cases":3,
            "average_score":0.9,"overall_pass":true}],
            "total":1,"limit":50,"offset":0}"#;
        let list: RunList = serde_json::from_str(json).unwrap();
        assert_eq!(list.runs.len(), 1);
        assert!(list.runs[0].overall_pass);
    }

    #[test]
    fn summary_projection_keeps_counts() {
        let run: RunDetail = serde_json::from_str(DETAIL_JSON).unwrap();
        let s = run.summary();
        assert_eq!(s.passed_cases, 1);
        assert_eq!(s.total_cases, 2);
        assert!(s.is_consistent());
    }

    #[test]
    fn inconsistent_counts_are_detected() {
        let mut s: RunDetail = serde_json::from_str(DETAIL_JSON).unwrap();
        s.passed_cases = 3;
        assert!(!s.summary().is_consistent());
    }

    #[test]
    fn verdict_from_pass() {
        assert_eq!(Verdict::from_pass(true), Verdict::Pass);
        assert_eq!(Verdict::from_pass(false), Verdict::Fail);
    }
}
