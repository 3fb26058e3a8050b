use std::sync::Mutex;

use crate::controllers::data::frame::PlotFrame;
use crate::controllers::ports::display::DisplayPort;

/// Keeps only the most recent frame. The event loop polls it once per redraw,
/// so frames emitted faster than the display refreshes are coalesced.
pub struct LatestFramePresenter {
    frame: Mutex<Option<PlotFrame>>,
}

impl DisplayPort for LatestFramePresenter {
    fn present(&self, frame: PlotFrame) {
        *self.frame.lock().unwrap() = Some(frame);
    }
}

impl Default for LatestFramePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl LatestFramePresenter {
    pub fn new() -> Self {
        Self {
            frame: Mutex::new(None),
        }
    }

    pub fn take(&self) -> Option<PlotFrame> {
        self.frame.lock().unwrap().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::domain::Domain;
    use crate::core::data::rate::Rate;
    use crate::core::poisson::pmf::pmf;

    fn frame(lambda: f64) -> PlotFrame {
        let dist = pmf(Domain::new(0, 20).unwrap(), Rate::new(lambda).unwrap());
        PlotFrame::from_distribution(dist)
    }

    #[test]
    fn test_take_returns_none_when_nothing_presented() {
        let presenter = LatestFramePresenter::new();

        assert!(presenter.take().is_none());
    }

    #[test]
    fn test_later_frames_replace_earlier_ones() {
        let presenter = LatestFramePresenter::new();

        presenter.present(frame(2.0));
        presenter.present(frame(5.0));

        let latest = presenter.take().unwrap();
        assert_eq!(latest.distribution.rate().value(), 5.0);
        assert!(presenter.take().is_none());
    }
}
