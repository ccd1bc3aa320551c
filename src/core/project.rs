//! Project configuration collected by the first two wizard steps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of engagement the questionnaire is drafted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    SystemImplementation,
    ProcessImprovement,
    DigitalTransformation,
    Integration,
    Modernization,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::SystemImplementation,
        ProjectType::ProcessImprovement,
        ProjectType::DigitalTransformation,
        ProjectType::Integration,
        ProjectType::Modernization,
    ];

    /// Stable identifier, as used in plain-text output and serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::SystemImplementation => "system-implementation",
            ProjectType::ProcessImprovement => "process-improvement",
            ProjectType::DigitalTransformation => "digital-transformation",
            ProjectType::Integration => "integration",
            ProjectType::Modernization => "modernization",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::SystemImplementation => "System Implementation",
            ProjectType::ProcessImprovement => "Process Improvement",
            ProjectType::DigitalTransformation => "Digital Transformation",
            ProjectType::Integration => "System Integration",
            ProjectType::Modernization => "Legacy Modernization",
        }
    }

    pub fn next(self) -> ProjectType {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> ProjectType {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected duration of the engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "1-3-months")]
    OneToThreeMonths,
    #[serde(rename = "3-6-months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12-months")]
    SixToTwelveMonths,
    #[serde(rename = "12-plus-months")]
    TwelvePlusMonths,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::OneToThreeMonths,
        Timeline::ThreeToSixMonths,
        Timeline::SixToTwelveMonths,
        Timeline::TwelvePlusMonths,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Timeline::OneToThreeMonths => "1-3-months",
            Timeline::ThreeToSixMonths => "3-6-months",
            Timeline::SixToTwelveMonths => "6-12-months",
            Timeline::TwelvePlusMonths => "12-plus-months",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeline::OneToThreeMonths => "1-3 months",
            Timeline::ThreeToSixMonths => "3-6 months",
            Timeline::SixToTwelveMonths => "6-12 months",
            Timeline::TwelvePlusMonths => "12+ months",
        }
    }

    pub fn next(self) -> Timeline {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Timeline {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, offset: usize) -> T {
    let idx = all.iter().position(|&v| v == current).unwrap_or(0);
    all[(idx + offset) % all.len()]
}

/// Everything the user has told the wizard about the project.
///
/// Starts empty and is mutated field by field; lives only as long as the
/// session that owns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    pub name: String,
    pub client: String,
    #[serde(rename = "type")]
    pub project_type: Option<ProjectType>,
    pub timeline: Option<Timeline>,
    pub context: String,
    pub ai_enabled: bool,
    pub selected_areas: Vec<String>,
}

impl ProjectConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name and client are both present (whitespace does not count).
    pub fn has_basics(&self) -> bool {
        !self.name.trim().is_empty() && !self.client.trim().is_empty()
    }

    pub fn has_areas(&self) -> bool {
        !self.selected_areas.is_empty()
    }

    pub fn is_area_selected(&self, area_id: &str) -> bool {
        self.selected_areas.iter().any(|id| id == area_id)
    }

    /// Select the area if absent, deselect it otherwise. Returns the new
    /// selection state of `area_id`.
    pub fn toggle_area(&mut self, area_id: &str) -> bool {
        if let Some(pos) = self.selected_areas.iter().position(|id| id == area_id) {
            self.selected_areas.remove(pos);
            false
        } else {
            self.selected_areas.push(area_id.to_string());
            true
        }
    }

    /// Identifier form of the project type, empty when unset.
    pub fn type_str(&self) -> &'static str {
        self.project_type.map(ProjectType::as_str).unwrap_or("")
    }

    /// Identifier form of the timeline, empty when unset.
    pub fn timeline_str(&self) -> &'static str {
        self.timeline.map(Timeline::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_configuration_is_empty() {
        let config = ProjectConfiguration::new();
        assert!(config.name.is_empty());
        assert!(config.project_type.is_none());
        assert!(!config.ai_enabled);
        assert!(!config.has_basics());
        assert!(!config.has_areas());
    }

    #[test]
    fn test_has_basics_ignores_whitespace() {
        let mut config = ProjectConfiguration::new();
        config.name = "Acme Portal".into();
        config.client = "   ".into();
        assert!(!config.has_basics());
        config.client = "Acme Corp".into();
        assert!(config.has_basics());
    }

    #[test]
    fn test_toggle_area() {
        let mut config = ProjectConfiguration::new();
        assert!(config.toggle_area("data-management"));
        assert!(config.is_area_selected("data-management"));
        assert!(config.toggle_area("infrastructure"));
        assert!(!config.toggle_area("data-management"));
        assert_eq!(config.selected_areas, vec!["infrastructure".to_string()]);
    }

    #[test]
    fn test_project_type_cycles() {
        let mut t = ProjectType::SystemImplementation;
        for _ in 0..ProjectType::ALL.len() {
            t = t.next();
        }
        assert_eq!(t, ProjectType::SystemImplementation);
        assert_eq!(ProjectType::SystemImplementation.prev(), ProjectType::Modernization);
    }

    #[test]
    fn test_timeline_identifiers() {
        assert_eq!(Timeline::TwelvePlusMonths.as_str(), "12-plus-months");
        assert_eq!(Timeline::TwelvePlusMonths.label(), "12+ months");
        let json = serde_json::to_string(&Timeline::OneToThreeMonths).unwrap();
        assert_eq!(json, "\"1-3-months\"");
    }

    #[test]
    fn test_serializes_with_original_field_names() {
        let mut config = ProjectConfiguration::new();
        config.project_type = Some(ProjectType::DigitalTransformation);
        config.ai_enabled = true;
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "digital-transformation");
        assert_eq!(value["aiEnabled"], true);
        assert!(value["selectedAreas"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_type_str_empty_when_unset() {
        let config = ProjectConfiguration::new();
        assert_eq!(config.type_str(), "");
        assert_eq!(config.timeline_str(), "");
    }
}
