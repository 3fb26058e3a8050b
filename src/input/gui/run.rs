use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::input::gui::app::App;

pub struct RunGuiCommand {}

impl Default for RunGuiCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RunGuiCommand {
    pub fn new() -> Self {
        Self {}
    }

    /// Opens the window and runs the event loop until it is closed.
    pub fn execute(&self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Poisson Explorer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let mut app = App::new(window, &event_loop);
        let mut redraw_pending = true;

        event_loop
            .run(|event, elwt| {
                match event {
                    Event::WindowEvent {
                        ref event,
                        window_id,
                    } if window_id == window.id() => {
                        let (egui_consumed, egui_repaint) =
                            app.handle_window_event(window, event);

                        match event {
                            WindowEvent::CloseRequested => {
                                elwt.exit();
                            }
                            WindowEvent::RedrawRequested => {
                                redraw_pending = false;

                                let (egui_output, commands) = app.update_ui(window);
                                app.egui_state.handle_platform_output(
                                    window,
                                    egui_output.platform_output.clone(),
                                );

                                app.apply_commands(commands);
                                app.tick();

                                if egui_output
                                    .viewport_output
                                    .values()
                                    .any(|v| v.repaint_delay.is_zero())
                                {
                                    redraw_pending = true;
                                }

                                // Animation frames pace themselves off the
                                // redraw clock, so keep redrawing while one
                                // is in flight.
                                if app.is_animating() {
                                    redraw_pending = true;
                                }

                                if let Err(e) = app.render(egui_output) {
                                    eprintln!("Render error: {e}");
                                    elwt.exit();
                                }
                            }
                            WindowEvent::Resized(size) => {
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                                app.scale_factor = *scale_factor;
                                app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                                let size = window.inner_size();
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            _ => {
                                if egui_consumed || egui_repaint {
                                    redraw_pending = true;
                                }
                            }
                        }
                    }
                    Event::AboutToWait => {
                        if redraw_pending {
                            window.request_redraw();
                        }
                    }
                    _ => {}
                }
            })
            .expect("Event loop error");
    }
}
