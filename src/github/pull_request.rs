use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub url: String,
    pub html_url: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Only populated by the detail endpoint, never by the listing
    pub mergeable_state: Option<MergeableState>,
}

impl PullRequest {
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.name == label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Merge readiness of a pull request as computed by Github
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeableState {
    Clean,
    Behind,
    Blocked,
    Dirty,
    Draft,
    HasHooks,
    Unstable,
    #[default]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn should_default_to_unknown_state() {
        assert_eq!(MergeableState::default(), MergeableState::Unknown);
    }

    #[test]
    fn should_match_labels_by_name() {
        let pr = PullRequest {
            number: 1,
            url: "https://api.github.com/repos/acme/widgets/pulls/1".to_owned(),
            html_url: "https://github.com/acme/widgets/pull/1".to_owned(),
            labels: vec![
                Label {
                    name: "bug".to_owned(),
                },
                Label {
                    name: "ship-it".to_owned(),
                },
            ],
            mergeable_state: None,
        };

        assert!(pr.has_label("ship-it"));
        assert!(!pr.has_label("enhancement"));
    }

    #[test]
    fn should_deserialize_a_listing_payload() -> Result<()> {
        let payload = r#"[
            {
                "number": 42,
                "url": "https://api.github.com/repos/acme/widgets/pulls/42",
                "html_url": "https://github.com/acme/widgets/pull/42",
                "state": "open",
                "labels": [{ "id": 1, "name": "ship-it" }]
            }
        ]"#;

        let prs = serde_json::from_str::<Vec<PullRequest>>(payload)?;

        assert_eq!(prs.len(), 1);
        assert_eq!(prs[0].number, 42);
        assert!(prs[0].has_label("ship-it"));
        assert!(prs[0].mergeable_state.is_none());

        Ok(())
    }

    #[test]
    fn should_deserialize_a_detail_payload() -> Result<()> {
        let payload = r#"{
            "number": 42,
            "url": "https://api.github.com/repos/acme/widgets/pulls/42",
            "html_url": "https://github.com/acme/widgets/pull/42",
            "labels": [],
            "mergeable": true,
            "mergeable_state": "clean"
        }"#;

        let pr = serde_json::from_str::<PullRequest>(payload)?;

        assert_eq!(pr.mergeable_state, Some(MergeableState::Clean));

        Ok(())
    }
}
