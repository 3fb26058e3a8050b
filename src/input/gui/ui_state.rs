use std::time::Duration;

use crate::controllers::data::parameter_snapshot::ParameterSnapshot;

/// Sidebar control values, edited by egui widgets every frame.
pub struct GuiUiState {
    pub lambda: f64,
    pub x_min: u32,
    pub x_max: u32,
    pub step_delay_secs: f64,
    pub highlight_enabled: bool,
    pub highlight_x: u32,
}

impl Default for GuiUiState {
    fn default() -> Self {
        Self {
            lambda: 4.0,
            x_min: 0,
            x_max: 20,
            step_delay_secs: 0.1,
            highlight_enabled: false,
            highlight_x: 2,
        }
    }
}

impl GuiUiState {
    #[must_use]
    pub fn snapshot(&self) -> ParameterSnapshot {
        ParameterSnapshot {
            lambda: self.lambda,
            x_min: self.x_min,
            x_max: self.x_max,
            step_delay: Duration::from_secs_f64(self.step_delay_secs),
            highlight: self.highlight_enabled.then_some(self.highlight_x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_carries_the_edited_values() {
        let state = GuiUiState {
            lambda: 12.5,
            x_min: 0,
            x_max: 30,
            step_delay_secs: 0.25,
            highlight_enabled: true,
            highlight_x: 7,
        };

        let params = state.snapshot();

        assert_eq!(params.lambda, 12.5);
        assert_eq!(params.x_max, 30);
        assert_eq!(params.step_delay, Duration::from_millis(250));
        assert_eq!(params.highlight, Some(7));
    }

    #[test]
    fn test_disabled_highlight_is_none() {
        let state = GuiUiState::default();

        assert_eq!(state.snapshot().highlight, None);
    }
}
