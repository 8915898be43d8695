use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteAction {
    Create,
    Overwrite,
}

impl WriteAction {
    /// Action for a target that does or does not already exist on disk.
    pub fn for_existing(exists: bool) -> Self {
        if exists {
            WriteAction::Overwrite
        } else {
            WriteAction::Create
        }
    }
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteAction::Create => write!(f, "create"),
            WriteAction::Overwrite => write!(f, "overwrite"),
        }
    }
}

/// A planned filesystem write, computed before any bytes hit the disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritePlan {
    /// Resolved absolute target path.
    pub path: PathBuf,
    /// UTF-8 byte length of the content.
    pub bytes: usize,
    pub action: WriteAction,
}

impl WritePlan {
    pub fn new(path: PathBuf, content: &str, exists: bool) -> Self {
        Self {
            path,
            bytes: content.len(),
            action: WriteAction::for_existing(exists),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub files: usize,
    pub creates: usize,
    pub overwrites: usize,
    pub total_bytes: usize,
}

/// Aggregate counts for reporting.
pub fn summarize(plans: &[WritePlan]) -> PlanSummary {
    plans.iter().fold(PlanSummary::default(), |mut acc, plan| {
        acc.files += 1;
        acc.total_bytes += plan.bytes;
        match plan.action {
            WriteAction::Create => acc.creates += 1,
            WriteAction::Overwrite => acc.overwrites += 1,
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_for_existing() {
        assert_eq!(WriteAction::for_existing(false), WriteAction::Create);
        assert_eq!(WriteAction::for_existing(true), WriteAction::Overwrite);
    }

    #[test]
    fn test_plan_counts_utf8_bytes() {
        let plan = WritePlan::new(PathBuf::from("/out/README.md"), "hi", false);
        assert_eq!(plan.bytes, 2);
        assert_eq!(plan.action, WriteAction::Create);

        // "é" is two bytes, "→" is three
        let plan = WritePlan::new(PathBuf::from("/out/a.txt"), "é→", true);
        assert_eq!(plan.bytes, 5);
        assert_eq!(plan.action, WriteAction::Overwrite);
    }

    #[test]
    fn test_action_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&WriteAction::Overwrite).unwrap(),
            "\"overwrite\""
        );
        assert_eq!(WriteAction::Create.to_string(), "create");
    }

    #[test]
    fn test_summarize() {
        let plans = vec![
            WritePlan::new(PathBuf::from("/out/a"), "abc", false),
            WritePlan::new(PathBuf::from("/out/b"), "de", true),
            WritePlan::new(PathBuf::from("/out/c"), "", false),
        ];
        assert_eq!(
            summarize(&plans),
            PlanSummary {
                files: 3,
                creates: 2,
                overwrites: 1,
                total_bytes: 5,
            }
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), PlanSummary::default());
    }
}
