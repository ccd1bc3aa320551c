//! Root layout computation: wizard column + preview column + status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the preview is stacked under the wizard.
pub const STACK_THRESHOLD: u16 = 100;
/// Height of the step progress indicator.
pub const STEPS_HEIGHT: u16 = 3;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Step progress indicator.
    pub steps: Rect,
    /// Active step panel.
    pub panel: Rect,
    /// Questionnaire preview.
    pub preview: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
    pub stacked: bool,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);
        let content = rows[0];
        let status = rows[1];

        let stacked = area.width < STACK_THRESHOLD;
        let columns = if stacked {
            Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(content)
        } else {
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(content)
        };

        let wizard = Layout::vertical([Constraint::Length(STEPS_HEIGHT), Constraint::Min(1)])
            .split(columns[0]);

        AppLayout {
            steps: wizard[0],
            panel: wizard[1],
            preview: columns[1],
            status,
            stacked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_is_side_by_side() {
        let area = Rect::new(0, 0, 160, 40);
        let layout = AppLayout::compute(area);
        assert!(!layout.stacked);
        assert_eq!(layout.steps.height, STEPS_HEIGHT);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.panel.width + layout.preview.width, area.width);
        assert_eq!(layout.panel.y, STEPS_HEIGHT);
    }

    #[test]
    fn test_narrow_layout_stacks() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = AppLayout::compute(area);
        assert!(layout.stacked);
        assert_eq!(layout.preview.width, 80);
        assert!(layout.preview.y >= layout.panel.y + layout.panel.height);
    }

    #[test]
    fn test_status_is_last_row() {
        let area = Rect::new(0, 0, 120, 30);
        let layout = AppLayout::compute(area);
        assert_eq!(layout.status.y, 29);
    }
}
