use crate::controllers::interactive::InteractiveController;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::window_title;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use std::marker::PhantomData;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

/// Opens the explorer window and blocks until it is closed.
pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    viewport: Viewport,
    config: RenderConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, viewport: Viewport, config: RenderConfig) -> Self {
        Self {
            presenter_factory,
            viewport,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let resolution = self.config.resolution();
        let side = f64::from(resolution);

        // pixels needs the window for the lifetime of the process
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(window_title(resolution))
                .with_inner_size(LogicalSize::new(side, side))
                .with_min_inner_size(LogicalSize::new(128.0, 128.0))
                .with_resizable(true)
                .build(&event_loop)?,
        ));

        let presenter: P = self
            .presenter_factory
            .build(window, event_loop_proxy, resolution)?;
        let controller =
            InteractiveController::new(presenter.share_adapter(), self.viewport, self.config);

        tracing::info!(
            resolution,
            center_x = self.viewport.center_x(),
            center_y = self.viewport.center_y(),
            size = self.viewport.size(),
            "window opened"
        );

        GuiApp::new(window, &event_loop, presenter, controller).run(event_loop)?;

        Ok(())
    }
}
