//! Browser WebSocket wrapper for the chat push channel.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};

use super::events::{ClientEvent, ServerEvent};

/// Connection to one chat room. Joins the room as soon as the socket opens
/// and hands every recognized push frame to the callback. Dropping the
/// handle closes the connection.
pub struct RoomSocket {
    ws: WebSocket,
    _on_open: Closure<dyn FnMut()>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(ErrorEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl RoomSocket {
    pub fn connect<F, S>(
        ws_url: &str,
        room_id: i64,
        on_event: F,
        on_status: S,
    ) -> Result<Self, String>
    where
        F: Fn(ServerEvent) + 'static,
        S: Fn(bool) + Clone + 'static,
    {
        let ws = WebSocket::new(ws_url)
            .map_err(|_| format!("failed to open websocket to {ws_url}"))?;

        let join_ws = ws.clone();
        let open_status = on_status.clone();
        let on_open = Closure::<dyn FnMut()>::new(move || {
            let frame = ClientEvent::JoinRoom { room_id }.to_frame();
            if join_ws.send_with_str(&frame).is_err() {
                log::warn!("failed to send join frame for room {room_id}");
            }
            open_status(true);
        });
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                return;
            };
            if let Some(server_event) = ServerEvent::parse(&text) {
                on_event(server_event);
            }
        });
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let on_error = Closure::<dyn FnMut(ErrorEvent)>::new(move |event: ErrorEvent| {
            log::warn!("websocket error in room {room_id}: {}", event.message());
        });
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |event: CloseEvent| {
            log::debug!(
                "websocket for room {room_id} closed (code {})",
                event.code()
            );
            on_status(false);
        });
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

impl Drop for RoomSocket {
    fn drop(&mut self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onerror(None);
        self.ws.set_onclose(None);
        let _ = self.ws.close();
    }
}
