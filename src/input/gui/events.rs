/// User events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A new render event is waiting in the presenter adapter.
    ///
    /// The handler decides whether it warrants a redraw.
    Wake,
}
