use std::{cell::RefCell, rc::Rc};

use shared::{
    ConnectionClient, ConnectionState, Dashboard, DashboardConfig, DashboardError, Transport,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use crate::signal_view::SignalView;

pub type SharedDashboard = Rc<RefCell<Dashboard<SignalView>>>;

fn js_error(context: &str, value: JsValue) -> DashboardError {
    DashboardError::Transport(format!("{context}: {value:?}"))
}

pub struct WebSocketTransport {
    ws: WebSocket,
}

impl Transport for WebSocketTransport {
    fn send(&mut self, text: &str) -> shared::Result<()> {
        self.ws
            .send_with_str(text)
            .map_err(|e| js_error("send failed", e))
    }
}

/// A browser WebSocket wired to a [`ConnectionClient`].
///
/// Dropping it detaches the handlers and closes the socket, so a discarded
/// connection can no longer touch the dashboard.
pub struct Connection {
    ws: WebSocket,
    _on_open: Closure<dyn FnMut()>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl Connection {
    pub fn open(
        config: &DashboardConfig,
        user_id: &str,
        dashboard: SharedDashboard,
    ) -> shared::Result<Self> {
        let encoded = String::from(js_sys::encode_uri_component(user_id));
        let url = config.endpoint_url(&encoded);
        log::info!("Connecting to {url}");

        let ws = WebSocket::new(&url).map_err(|e| js_error("cannot open WebSocket", e))?;
        let client = Rc::new(RefCell::new(ConnectionClient::connect(
            user_id,
            WebSocketTransport { ws: ws.clone() },
        )));
        dashboard
            .borrow_mut()
            .connection_changed(ConnectionState::Connecting);

        let on_open = {
            let client = client.clone();
            let dashboard = dashboard.clone();
            Closure::<dyn FnMut()>::new(move || {
                log::info!("Connected to WebSocket");
                client.borrow_mut().on_open(&mut dashboard.borrow_mut());
            })
        };

        let on_message = {
            let client = client.clone();
            let dashboard = dashboard.clone();
            Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
                match event.data().as_string() {
                    Some(text) => client
                        .borrow_mut()
                        .on_message(&text, &mut dashboard.borrow_mut()),
                    None => log::warn!("Ignoring non-text WebSocket message"),
                }
            })
        };

        let on_error = {
            let client = client.clone();
            let dashboard = dashboard.clone();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                log::error!("WebSocket error: {:?}", event.type_());
                client.borrow_mut().on_error(&mut dashboard.borrow_mut());
            })
        };

        let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |event: CloseEvent| {
            log::info!(
                "WebSocket connection closed (code {}, reason {:?})",
                event.code(),
                event.reason()
            );
            client.borrow_mut().on_close(&mut dashboard.borrow_mut());
        });

        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Ok(Self {
            ws,
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        })
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onerror(None);
        self.ws.set_onclose(None);
        if let Err(e) = self.ws.close() {
            log::warn!("Failed to close WebSocket: {e:?}");
        }
    }
}
