use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use cluegrid_core::Msg;
use cluegrid_protocol::{SyncMessage, decode_inbound, encode};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, MessageEvent, WebSocket};
use yew::Callback;

#[allow(dead_code)]
struct Handlers {
    onopen: Closure<dyn FnMut(Event)>,
    onmessage: Closure<dyn FnMut(MessageEvent)>,
    onerror: Closure<dyn FnMut(Event)>,
    onclose: Closure<dyn FnMut(Event)>,
}

/// Collaborator channel. Frames sent before the socket opens are queued and
/// flushed on open.
pub(crate) struct SyncChannel {
    ws: WebSocket,
    queued: Rc<RefCell<Vec<String>>>,
    _handlers: Handlers,
}

impl SyncChannel {
    pub(crate) fn connect(url: &str, on_msg: Callback<Msg>) -> anyhow::Result<Self> {
        let ws = WebSocket::new(url).map_err(|err| anyhow!("could not open {url}: {err:?}"))?;
        let queued: Rc<RefCell<Vec<String>>> = Rc::default();

        let onopen = {
            let ws = ws.clone();
            let queued = queued.clone();
            let url = url.to_string();
            Closure::wrap(Box::new(move |_event: Event| {
                log::info!("sync channel connected: {}", url);
                for frame in queued.borrow_mut().drain(..) {
                    if let Err(err) = ws.send_with_str(&frame) {
                        log::warn!("could not send queued frame: {:?}", err);
                    }
                }
            }) as Box<dyn FnMut(Event)>)
        };
        let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                log::error!("dropping non-text frame");
                return;
            };
            match decode_inbound(&text) {
                Ok(inbound) => on_msg.emit(inbound.into()),
                Err(err) => log::error!("dropping inbound frame: {}", err),
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        let onerror = {
            let url = url.to_string();
            Closure::wrap(Box::new(move |_event: Event| {
                log::warn!("sync channel error: {}", url);
            }) as Box<dyn FnMut(Event)>)
        };
        let onclose = {
            let url = url.to_string();
            Closure::wrap(Box::new(move |_event: Event| {
                log::warn!("sync channel closed: {}", url);
            }) as Box<dyn FnMut(Event)>)
        };

        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));

        Ok(Self {
            ws,
            queued,
            _handlers: Handlers {
                onopen,
                onmessage,
                onerror,
                onclose,
            },
        })
    }

    pub(crate) fn send(&self, message: &SyncMessage) {
        let frame = match encode(message) {
            Ok(frame) => frame,
            Err(err) => {
                log::error!("could not encode {:?}: {}", message, err);
                return;
            }
        };

        match self.ws.ready_state() {
            WebSocket::CONNECTING => self.queued.borrow_mut().push(frame),
            WebSocket::OPEN => {
                if let Err(err) = self.ws.send_with_str(&frame) {
                    log::warn!("could not send frame: {:?}", err);
                }
            }
            _ => log::debug!("sync channel closed, dropping {:?}", message),
        }
    }
}

impl Drop for SyncChannel {
    fn drop(&mut self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onerror(None);
        self.ws.set_onclose(None);
        let _ = self.ws.close();
    }
}
