use crate::controllers::interactive::{InputEvent, InteractiveController};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::input::gui::app::bindings::{key_to_event, wheel_to_event};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::{GuiAppState, saved_title};
use crate::input::gui::events::GuiEvent;
use crate::presenters::file::image_file::ImageFilePresenter;
use egui::{Context, Key, KeyboardShortcut, Modifiers};
use egui_winit::State as EguiWinitState;
use std::path::PathBuf;
use winit::error::EventLoopError;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::keyboard::PhysicalKey;
use winit::window::Window;

const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

#[derive(Debug, Default, Clone, Copy)]
struct MenuActions {
    save: bool,
    reset: bool,
}

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: InteractiveController,
    file_presenter: ImageFilePresenter,
    state: GuiAppState,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            presenter,
            controller,
            file_presenter: ImageFilePresenter::new(),
            state: GuiAppState::default(),
            egui_ctx,
            egui_state,
        }
    }

    /// Runs the event loop until the window is closed.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), EventLoopError> {
        let window = self.window;

        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                if self.presenter.poll() {
                    self.state.redraw_pending = true;
                }
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                self.handle_window_event(event, elwt);
            }
            Event::AboutToWait => {
                if self.state.redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
    }

    fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<GuiEvent>,
    ) {
        let response = self.egui_state.on_window_event(self.window, event);
        if response.repaint {
            self.state.redraw_pending = true;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.controller.shutdown();
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                self.state.redraw_pending = false;

                let egui_output = self.update_ui();

                if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
                    tracing::error!(%err, "render failed");
                    self.controller.shutdown();
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height, elwt);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.resize(size.width, size.height, elwt);
            }
            WindowEvent::KeyboardInput { event, .. } if !response.consumed => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(input) = key_to_event(key_code) {
                        self.send(input);
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !response.consumed => {
                if let Some(input) = wheel_to_event(*delta) {
                    self.send(input);
                }
            }
            _ => {}
        }
    }

    fn resize(&mut self, width: u32, height: u32, elwt: &EventLoopWindowTarget<GuiEvent>) {
        if let Err(err) = self.presenter.resize(width, height) {
            tracing::error!(%err, width, height, "failed to resize surface");
            self.controller.shutdown();
            elwt.exit();
            return;
        }
        self.state.redraw_pending = true;
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let mut actions = MenuActions::default();

        let state = &mut self.state;
        let last_error = self.presenter.last_error();

        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            if ctx.input_mut(|input| input.consume_shortcut(&SAVE_SHORTCUT)) {
                actions.save = true;
            }

            egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
                egui::menu::bar(ui, |ui| {
                    ui.menu_button("File", |ui| {
                        let save = egui::Button::new("Save")
                            .shortcut_text(ctx.format_shortcut(&SAVE_SHORTCUT));
                        if ui.add(save).clicked() {
                            actions.save = true;
                            ui.close_menu();
                        }
                        if ui.button("Reset").clicked() {
                            actions.reset = true;
                            ui.close_menu();
                        }
                    });

                    ui.separator();
                    ui.label("Save as:");
                    ui.text_edit_singleline(&mut state.save_path);

                    if let Some(message) = last_error {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    } else if let Some(message) = &state.status_message {
                        ui.label(message);
                    }
                });
            });
        });

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        if egui_output
            .viewport_output
            .values()
            .any(|viewport| viewport.repaint_delay.is_zero())
        {
            self.state.redraw_pending = true;
        }

        if actions.save {
            self.save_current_frame();
        }
        if actions.reset {
            self.send(InputEvent::Reset);
        }

        egui_output
    }

    fn send(&mut self, input: InputEvent) {
        if let Err(err) = self.controller.submit(input) {
            tracing::warn!(%err, ?input, "input dropped");
        }
    }

    fn save_current_frame(&mut self) {
        self.state.redraw_pending = true;

        let Some(frame) = self.presenter.current_frame() else {
            self.state.status_message = Some("Nothing rendered yet".to_owned());
            return;
        };

        let filepath = PathBuf::from(self.state.save_path.trim());

        match self.file_presenter.present(&frame.pixel_buffer, &filepath) {
            Ok(()) => {
                tracing::info!(
                    path = %filepath.display(),
                    generation = frame.generation,
                    "saved frame"
                );
                self.window.set_title(&saved_title(&filepath));
                self.state.status_message = Some(format!("Saved {}", filepath.display()));
            }
            Err(err) => {
                tracing::warn!(%err, path = %filepath.display(), "save failed");
                self.state.status_message = Some(err.to_string());
            }
        }
    }
}
