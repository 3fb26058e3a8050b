use crate::controllers::data::frame::PlotFrame;

/// Output boundary of the controllers: something that can show one plot
/// frame. Rendering is synchronous and, from the controller's perspective,
/// side-effect free beyond "frame shown".
pub trait DisplayPort: Send + Sync {
    fn present(&self, frame: PlotFrame);
}
