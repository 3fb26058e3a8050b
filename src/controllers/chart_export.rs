use std::path::Path;
use std::time::Instant;

use crate::controllers::data::parameter_snapshot::ParameterSnapshot;
use crate::controllers::density::controller::density_view;
use crate::controllers::errors::FrameError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_canvas::PixelCanvas;
use crate::presenters::chart::rasterizer::rasterize;

/// Renders one static distribution chart and hands it to a file presenter.
pub struct ChartExportController<P: FilePresenterPort> {
    presenter: P,
    canvas: Option<PixelCanvas>,
}

impl<P: FilePresenterPort> ChartExportController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            canvas: None,
        }
    }

    pub fn generate(
        &mut self,
        params: &ParameterSnapshot,
        width: u32,
        height: u32,
    ) -> Result<(), FrameError> {
        println!("Rendering Poisson distribution chart...");
        println!("Lambda: {:.2}", params.lambda);
        println!("Image size: {}x{}", width, height);

        let view = density_view(params)?;

        let start = Instant::now();
        let canvas = rasterize(&view.frame, width, height);
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);

        self.canvas = Some(canvas);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(canvas) = &self.canvas {
            self.presenter.present(canvas, filepath)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockFilePresenter {
        presented: Mutex<Vec<(u32, u32)>>,
    }

    impl MockFilePresenter {
        fn new() -> Self {
            Self {
                presented: Mutex::new(Vec::new()),
            }
        }
    }

    impl FilePresenterPort for MockFilePresenter {
        fn present(&self, canvas: &PixelCanvas, _filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented
                .lock()
                .unwrap()
                .push((canvas.width(), canvas.height()));
            Ok(())
        }
    }

    #[test]
    fn test_generate_then_write_presents_the_canvas() {
        let mut controller = ChartExportController::new(MockFilePresenter::new());

        controller
            .generate(&ParameterSnapshot::default(), 320, 240)
            .unwrap();
        controller.write("unused.ppm").unwrap();

        let presented = controller.presenter.presented.lock().unwrap();
        assert_eq!(*presented, vec![(320, 240)]);
    }

    #[test]
    fn test_write_without_generate_presents_nothing() {
        let controller = ChartExportController::new(MockFilePresenter::new());

        controller.write("unused.ppm").unwrap();

        assert!(controller.presenter.presented.lock().unwrap().is_empty());
    }

    #[test]
    fn test_generate_rejects_an_empty_domain() {
        let mut controller = ChartExportController::new(MockFilePresenter::new());
        let params = ParameterSnapshot {
            x_min: 9,
            x_max: 3,
            ..ParameterSnapshot::default()
        };

        let result = controller.generate(&params, 320, 240);

        assert!(matches!(result, Err(FrameError::Domain(_))));
    }
}
