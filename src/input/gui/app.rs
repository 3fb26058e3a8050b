//! Windowed chart application: an egui control panel over a pixels
//! framebuffer holding the rasterized chart.

use std::sync::Arc;
use std::time::Instant;

use egui::Context;
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiWinitState;
use pixels::{Pixels, SurfaceTexture, wgpu};
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::animation::{AnimationCommand, AnimationController, AnimationPhase};
use crate::controllers::data::frame::PlotFrame;
use crate::controllers::density::density_view;
use crate::controllers::ports::DisplayPort;
use crate::core::data::rate::Rate;
use crate::core::poisson::{NORMAL_APPROXIMATION_THRESHOLD, stats};
use crate::input::gui::ui_state::GuiUiState;
use crate::presenters::chart::rasterizer::rasterize;
use crate::presenters::latest_frame::LatestFramePresenter;

pub struct App {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
    pub scale_factor: f64,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
    controller: AnimationController,
    display: Arc<LatestFramePresenter>,
    ui_state: GuiUiState,
    last_frame: Option<PlotFrame>,
    last_tick: Instant,
    last_error_message: Option<String>,
}

impl App {
    pub fn new(window: &'static Window, event_loop: &EventLoop<()>) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let display = Arc::new(LatestFramePresenter::new());
        let controller =
            AnimationController::new(Arc::clone(&display) as Arc<dyn DisplayPort>);

        Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
            scale_factor,
            egui_ctx,
            egui_state,
            controller,
            display,
            ui_state: GuiUiState::default(),
            last_frame: None,
            last_tick: Instant::now(),
            last_error_message: None,
        }
    }

    /// One scheduling step: feed the elapsed wall time to the animation
    /// controller, then pick up whatever frame it emitted. While idle, the
    /// chart just tracks the sliders directly.
    pub fn tick(&mut self) {
        let params = self.ui_state.snapshot();
        let elapsed = self.last_tick.elapsed();
        self.last_tick = Instant::now();

        if let Err(error) = self.controller.advance(elapsed, &params) {
            self.last_error_message = Some(error.to_string());
        }

        if let Some(frame) = self.display.take() {
            self.last_frame = Some(frame);
        } else if self.controller.session().phase() == AnimationPhase::Idle {
            match density_view(&params) {
                Ok(view) => {
                    self.last_frame = Some(view.frame);
                    self.last_error_message = None;
                }
                Err(error) => self.last_error_message = Some(error.to_string()),
            }
        }
    }

    pub fn apply_commands(&mut self, commands: Vec<AnimationCommand>) {
        let params = self.ui_state.snapshot();
        for command in commands {
            match self.controller.handle_command(command, &params) {
                Ok(()) => self.last_error_message = None,
                Err(error) => self.last_error_message = Some(error.to_string()),
            }
        }

        if let Some(frame) = self.display.take() {
            self.last_frame = Some(frame);
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.is_running()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.width = width;
        self.height = height;

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
        self.pixels
            .resize_buffer(width, height)
            .expect("Failed to resize buffer");
    }

    fn draw_chart(&mut self) {
        let Some(frame) = &self.last_frame else {
            for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
                pixel.copy_from_slice(&[255, 255, 255, 255]);
            }
            return;
        };

        let canvas = rasterize(frame, self.width, self.height);
        let src = canvas.buffer();
        let dest = self.pixels.frame_mut();

        for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = 255;
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.draw_chart();

        let egui_ctx = self.egui_ctx.clone();
        let egui_renderer = &mut self.egui_renderer;
        let size_in_pixels = [self.width, self.height];

        self.pixels.render_with(|encoder, render_target, context| {
            // The scaling pass draws the chart framebuffer first.
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep the chart content
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    /// Runs the egui frame; returns the paint output plus any animation
    /// commands the user clicked this frame.
    pub fn update_ui(&mut self, window: &Window) -> (egui::FullOutput, Vec<AnimationCommand>) {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut commands = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Poisson Controls")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 320.0])
                .show(ctx, |ui| {
                    ui.heading("Poisson Explorer");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Lambda:");
                        ui.add(egui::Slider::new(&mut self.ui_state.lambda, 0.1..=60.0));
                    });

                    ui.horizontal(|ui| {
                        ui.label("x range:");
                        ui.add(egui::DragValue::new(&mut self.ui_state.x_min));
                        ui.label("to");
                        ui.add(egui::DragValue::new(&mut self.ui_state.x_max));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Step delay (s):");
                        ui.add(egui::Slider::new(
                            &mut self.ui_state.step_delay_secs,
                            0.01..=1.0,
                        ));
                    });

                    ui.horizontal(|ui| {
                        ui.checkbox(&mut self.ui_state.highlight_enabled, "Highlight x =");
                        ui.add(egui::DragValue::new(&mut self.ui_state.highlight_x));
                    });

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Start").clicked() {
                            commands.push(AnimationCommand::Start);
                        }
                        if ui.button("Pause").clicked() {
                            commands.push(AnimationCommand::Pause);
                        }
                        if ui.button("Resume").clicked() {
                            commands.push(AnimationCommand::Resume);
                        }
                    });
                    ui.horizontal(|ui| {
                        if ui.button("Stop").clicked() {
                            commands.push(AnimationCommand::Stop);
                        }
                        if ui.button("Repeat").clicked() {
                            commands.push(AnimationCommand::Repeat);
                        }
                    });

                    ui.separator();
                    if let Ok(rate) = Rate::new(self.ui_state.lambda) {
                        let moments = stats(rate);
                        ui.label(format!("Mean: {:.4}", moments.mean));
                        ui.label(format!("Variance: {:.4}", moments.variance));
                        ui.label(format!("Std dev: {:.4}", moments.std_dev));
                        if rate.value() >= NORMAL_APPROXIMATION_THRESHOLD {
                            ui.label("Approaching the normal distribution");
                        }
                    }
                    if self.ui_state.highlight_enabled {
                        if let Some(frame) = &self.last_frame {
                            if let Some(mass) =
                                frame.distribution.mass_at(self.ui_state.highlight_x)
                            {
                                ui.label(format!(
                                    "P(X = {}) = {:.4}",
                                    self.ui_state.highlight_x, mass
                                ));
                            }
                        }
                    }

                    ui.separator();
                    ui.label(format!("Phase: {:?}", self.controller.session().phase()));
                    ui.label(format!(
                        "Frame: {}",
                        self.controller.session().frame_index()
                    ));
                    if let Some(frame) = &self.last_frame {
                        ui.label(frame.label.clone());
                    }
                    ui.label(format!("Window size: {}x{}", self.width, self.height));

                    if let Some(message) = &self.last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        (output, commands)
    }

    /// Forwards an event to egui; returns (consumed, repaint).
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
