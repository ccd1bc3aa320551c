//! Static catalog of discovery topic areas.
//!
//! Entries are immutable and referenced by id from
//! [`ProjectConfiguration::selected_areas`](super::project::ProjectConfiguration).

/// A focus area the questionnaire can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicArea {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Gradient tag, e.g. `"from-blue-500 to-purple-500"`.
    pub color: &'static str,
    /// Canned questions used when the area is selected for generation.
    pub questions: &'static [&'static str],
}

pub const TOPIC_AREAS: [TopicArea; 8] = [
    TopicArea {
        id: "business-process",
        name: "Business Process",
        description: "Current workflows, procedures, and business rules",
        icon: "🔄",
        color: "from-blue-500 to-purple-500",
        questions: &[
            "Which end-to-end workflows does this project touch?",
            "Where do manual hand-offs or approvals slow the process down?",
            "Which business rules are documented, and which live only in people's heads?",
        ],
    },
    TopicArea {
        id: "data-management",
        name: "Data Management",
        description: "Data sources, quality, governance, and flow",
        icon: "📊",
        color: "from-green-500 to-blue-500",
        questions: &[
            "What are the authoritative sources for the data this project relies on?",
            "How is data quality measured and who owns remediation?",
            "What retention, archival, or governance policies apply?",
        ],
    },
    TopicArea {
        id: "system-integration",
        name: "System Integration",
        description: "API connections, data exchange, and interfaces",
        icon: "🔗",
        color: "from-purple-500 to-pink-500",
        questions: &[
            "Which systems must exchange data with the new solution?",
            "Are the integrations real-time, batch, or event driven?",
            "Who maintains the existing interfaces and their documentation?",
        ],
    },
    TopicArea {
        id: "user-experience",
        name: "User Experience",
        description: "User needs, workflows, and interface requirements",
        icon: "👥",
        color: "from-orange-500 to-red-500",
        questions: &[
            "Who are the primary user groups and what are their goals?",
            "Which tasks do users find most frustrating today?",
            "Are there accessibility or device requirements to support?",
        ],
    },
    TopicArea {
        id: "security-compliance",
        name: "Security & Compliance",
        description: "Security requirements, regulations, and standards",
        icon: "🔒",
        color: "from-red-500 to-purple-500",
        questions: &[
            "Which regulations or standards does this project need to satisfy?",
            "How are users authenticated and authorized today?",
            "What data is classified as sensitive or personally identifiable?",
        ],
    },
    TopicArea {
        id: "performance-scaling",
        name: "Performance & Scaling",
        description: "Load requirements, performance metrics, scalability",
        icon: "⚡",
        color: "from-yellow-500 to-orange-500",
        questions: &[
            "What peak load and concurrent usage do you expect?",
            "Which response times are acceptable for critical operations?",
            "How do you expect usage to grow over the next two years?",
        ],
    },
    TopicArea {
        id: "infrastructure",
        name: "Infrastructure",
        description: "Hardware, hosting, deployment, and maintenance",
        icon: "🏗️",
        color: "from-gray-500 to-blue-500",
        questions: &[
            "Where will the solution be hosted (on-premises, cloud, hybrid)?",
            "What environments exist for development, testing, and production?",
            "Who is responsible for ongoing maintenance and monitoring?",
        ],
    },
    TopicArea {
        id: "change-management",
        name: "Change Management",
        description: "Training, adoption, communication, and transition",
        icon: "🔄",
        color: "from-teal-500 to-green-500",
        questions: &[
            "Which teams will be most affected by this change?",
            "How will users be trained and supported during rollout?",
            "How will adoption and success be measured after go-live?",
        ],
    },
];

/// Look up a catalog entry by id.
pub fn find_topic_area(id: &str) -> Option<&'static TopicArea> {
    TOPIC_AREAS.iter().find(|area| area.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = TOPIC_AREAS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), TOPIC_AREAS.len());
    }

    #[test]
    fn test_find_topic_area() {
        let area = find_topic_area("security-compliance").unwrap();
        assert_eq!(area.name, "Security & Compliance");
        assert!(find_topic_area("astrology").is_none());
    }

    #[test]
    fn test_every_area_has_questions() {
        for area in &TOPIC_AREAS {
            assert!(!area.questions.is_empty(), "{} has no questions", area.id);
        }
    }
}
