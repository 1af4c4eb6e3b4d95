use leptos::*;
use shared::{ConnectionState, DashboardView, Reading, ViewRenderer};

/// Renders into a reactive [`DashboardView`]; components subscribe to the
/// signal and redraw the DOM and chart.
#[derive(Clone, Copy)]
pub struct SignalView(pub RwSignal<DashboardView>);

impl ViewRenderer for SignalView {
    fn show_latest(&mut self, reading: &Reading) {
        self.0.update(|view| view.show_latest(reading));
    }

    fn append_rows(&mut self, readings: &[Reading]) {
        if !readings.is_empty() {
            self.0.update(|view| view.append_rows(readings));
        }
    }

    fn clear(&mut self) {
        self.0.update(|view| view.clear());
    }

    fn set_login_visible(&mut self, visible: bool) {
        self.0.update(|view| view.set_login_visible(visible));
    }

    fn show_login_error(&mut self, message: &str) {
        self.0.update(|view| view.show_login_error(message));
    }

    fn show_connection(&mut self, state: ConnectionState) {
        self.0.update(|view| view.show_connection(state));
    }
}
