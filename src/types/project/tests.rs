#[cfg(test)]
mod tests {
    use crate::github::models::{
        LanguageNode, OwnerNode, RepositoryNode, Topic, TopicConnection, TopicNode,
    };
    use crate::types::project::{FALLBACK_TECH, NO_DESCRIPTION, PinnedProject};

    fn make_node(
        description: Option<&str>,
        language: Option<&str>,
        topics: &[&str],
    ) -> RepositoryNode {
        RepositoryNode {
            name: "moonrag".to_string(),
            description: description.map(str::to_string),
            url: "https://github.com/someone/moonrag".to_string(),
            owner: OwnerNode {
                login: "someone".to_string(),
            },
            primary_language: language.map(|name| LanguageNode {
                name: name.to_string(),
            }),
            repository_topics: TopicConnection {
                nodes: topics
                    .iter()
                    .map(|name| TopicNode {
                        topic: Topic {
                            name: name.to_string(),
                        },
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_readme_summary_preferred_over_repo_description() {
        let node = make_node(Some("Repo description"), Some("Python"), &[]);
        let project = PinnedProject::from_node(node, Some("Summary from README".to_string()));

        assert_eq!(project.description, "Summary from README");
    }

    #[test]
    fn test_falls_back_to_repo_description() {
        let node = make_node(Some("Repo description"), Some("Python"), &[]);
        let project = PinnedProject::from_node(node, None);

        assert_eq!(project.description, "Repo description");
    }

    #[test]
    fn test_falls_back_to_placeholder() {
        let node = make_node(None, Some("Python"), &[]);
        let project = PinnedProject::from_node(node, None);

        assert_eq!(project.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_blank_summary_falls_through() {
        // 空白摘要视为缺失，继续向后回退
        let node = make_node(Some("Repo description"), None, &[]);
        let project = PinnedProject::from_node(node, Some("   ".to_string()));

        assert_eq!(project.description, "Repo description");
    }

    #[test]
    fn test_blank_description_falls_to_placeholder() {
        let node = make_node(Some(""), None, &[]);
        let project = PinnedProject::from_node(node, None);

        assert_eq!(project.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_tech_language_first_then_topics() {
        let node = make_node(None, Some("Rust"), &["cli", "tooling"]);
        let project = PinnedProject::from_node(node, None);

        assert_eq!(project.tech, vec!["Rust", "cli", "tooling"]);
    }

    #[test]
    fn test_tech_deduplicates_topics() {
        let node = make_node(None, Some("Python"), &["ai", "ai"]);
        let project = PinnedProject::from_node(node, None);

        assert_eq!(project.tech, vec!["Python", "ai"]);
    }

    #[test]
    fn test_tech_deduplicates_language_against_topics() {
        let node = make_node(None, Some("Python"), &["Python", "web"]);
        let project = PinnedProject::from_node(node, None);

        assert_eq!(project.tech, vec!["Python", "web"]);
    }

    #[test]
    fn test_tech_falls_back_to_placeholder_tag() {
        let node = make_node(None, None, &[]);
        let project = PinnedProject::from_node(node, None);

        assert_eq!(project.tech, vec![FALLBACK_TECH]);
    }

    #[test]
    fn test_blank_topic_names_skipped() {
        let node = make_node(None, None, &["", "ai"]);
        let project = PinnedProject::from_node(node, None);

        assert_eq!(project.tech, vec!["ai"]);
    }

    #[test]
    fn test_topics_only_without_language() {
        let node = make_node(None, None, &["ai", "rag"]);
        let project = PinnedProject::from_node(node, None);

        assert_eq!(project.tech, vec!["ai", "rag"]);
    }

    #[test]
    fn test_title_and_url_carried_over() {
        let node = make_node(None, None, &[]);
        let project = PinnedProject::from_node(node, None);

        assert_eq!(project.title, "moonrag");
        assert_eq!(project.github, "https://github.com/someone/moonrag");
    }

    #[test]
    fn test_serialized_shape() {
        let node = make_node(Some("Repo description"), Some("Python"), &["ai"]);
        let project = PinnedProject::from_node(node, None);

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["title"], "moonrag");
        assert_eq!(value["description"], "Repo description");
        assert_eq!(value["tech"], serde_json::json!(["Python", "ai"]));
        assert_eq!(value["github"], "https://github.com/someone/moonrag");
    }
}
