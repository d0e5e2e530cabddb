use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::controller::ControllerError;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_mandelbrot::{TimedFrame, render_mandelbrot_timed};
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

enum Command {
    Input(InputEvent),
    Shutdown,
}

/// Handle given to the display side for pushing input into the render
/// thread. Events are processed in the order they are sent.
#[derive(Clone)]
pub struct InputSender {
    sender: Sender<Command>,
}

impl InputSender {
    pub fn send(&self, event: InputEvent) -> Result<(), ControllerError> {
        self.sender
            .send(Command::Input(event))
            .map_err(|_| ControllerError::Disconnected)
    }
}

/// Owns the viewport and the single render thread.
///
/// The thread renders the initial viewport, then blocks on the input
/// channel. Each event is applied, rendered and presented before the next
/// one is taken, so at most one render pass is ever in flight.
pub struct InteractiveController {
    input_sender: InputSender,
    shutdown: Arc<AtomicBool>,
    last_completed_generation: Arc<AtomicU64>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        viewport: Viewport,
        config: RenderConfig,
    ) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        let shutdown = Arc::new(AtomicBool::new(false));
        let last_completed_generation = Arc::new(AtomicU64::new(0));
        let worker_shutdown = Arc::clone(&shutdown);
        let worker_generation = Arc::clone(&last_completed_generation);

        let worker = thread::spawn(move || {
            Self::worker_loop(
                &receiver,
                presenter_port.as_ref(),
                viewport,
                config,
                &worker_shutdown,
                &worker_generation,
            );
        });

        Self {
            input_sender: InputSender { sender },
            shutdown,
            last_completed_generation,
            worker: Some(worker),
        }
    }

    #[must_use]
    pub fn input_sender(&self) -> InputSender {
        self.input_sender.clone()
    }

    pub fn submit(&self, event: InputEvent) -> Result<(), ControllerError> {
        self.input_sender.send(event)
    }

    /// Generation of the last frame or error handed to the presenter, 0
    /// before the initial render completes.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.last_completed_generation.load(Ordering::Acquire)
    }

    /// Stops the render thread after the pass in flight, discarding any
    /// events still queued, then waits for it to exit.
    pub fn shutdown(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        // wakes the thread if it is idle in recv
        let _ = self.input_sender.sender.send(Command::Shutdown);

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                tracing::error!("render thread panicked");
            }
        }
    }

    fn worker_loop(
        receiver: &Receiver<Command>,
        presenter_port: &dyn InteractiveControllerPresenterPort,
        mut viewport: Viewport,
        config: RenderConfig,
        shutdown: &AtomicBool,
        last_completed_generation: &AtomicU64,
    ) {
        let mut generation = 1;
        Self::render_and_present(presenter_port, viewport, config, generation);
        last_completed_generation.store(generation, Ordering::Release);

        while let Ok(command) = receiver.recv() {
            let event = match command {
                Command::Input(_) if shutdown.load(Ordering::Acquire) => break,
                Command::Input(event) => event,
                Command::Shutdown => break,
            };

            event.apply(&mut viewport);
            generation += 1;

            if event == InputEvent::Reset {
                tracing::info!("view reset");
            }
            tracing::debug!(
                ?event,
                generation,
                center_x = viewport.center_x(),
                center_y = viewport.center_y(),
                size = viewport.size(),
                "input applied"
            );

            Self::render_and_present(presenter_port, viewport, config, generation);
            last_completed_generation.store(generation, Ordering::Release);
        }

        tracing::debug!(generation, "render thread stopped");
    }

    fn render_and_present(
        presenter_port: &dyn InteractiveControllerPresenterPort,
        viewport: Viewport,
        config: RenderConfig,
        generation: u64,
    ) {
        match render_mandelbrot_timed(viewport, config) {
            Ok(TimedFrame {
                pixel_buffer,
                render_duration,
            }) => {
                tracing::info!(
                    generation,
                    render_ms = render_duration.as_millis() as u64,
                    "frame ready"
                );

                presenter_port.present(RenderEvent::Frame(FrameData {
                    generation,
                    viewport,
                    pixel_buffer,
                    render_duration,
                }));
            }
            Err(err) => {
                tracing::warn!(generation, error = %err, "render failed");

                presenter_port.present(RenderEvent::Error(RenderError {
                    generation,
                    message: err.to_string(),
                }));
            }
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
