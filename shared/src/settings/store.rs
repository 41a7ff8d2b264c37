//! Contracts the settings drawer writes through, plus an in-memory store.
//!
//! [`SharedSettings`] is the native, headless host for the field
//! controllers; the frontend's Yew reducer implements the same contracts
//! and mirrors its behavior in the browser.

use crate::models::{Config, Message, RequestParams};
use std::cell::RefCell;
use std::rc::Rc;

/// Owner of the current [`Config`] and [`RequestParams`] records.
///
/// Updates always replace the whole record; there is no partial-update API.
pub trait ConfigStore {
    fn config(&self) -> Config;
    fn set_config(&self, next: Config);
    fn req_params(&self) -> RequestParams;
    fn set_req_params(&self, next: RequestParams);
}

/// Persisted chat history. An empty history clears it.
pub trait SessionStore {
    fn update_session(&self, history: Vec<Message>);
}

/// What to do with persisted history after it is replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionWrite {
    /// Delete the stored history.
    Clear,
    Save,
    /// Keep it in memory only.
    Skip,
}

/// An empty history always clears storage; anything else is stored only
/// while session saving is on.
pub fn session_write(config: &Config, history: &[Message]) -> SessionWrite {
    if history.is_empty() {
        SessionWrite::Clear
    } else if config.save_session {
        SessionWrite::Save
    } else {
        SessionWrite::Skip
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SettingsEvent {
    ConfigChanged(Config),
    RequestParamsChanged(RequestParams),
    SessionUpdated { len: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&SettingsEvent)>;

#[derive(Default)]
struct Inner {
    config: Config,
    req_params: RequestParams,
    history: Vec<Message>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Observable settings owned by the application and shared by handle.
///
/// Cloning is cheap; all clones see the same records and listeners.
#[derive(Clone, Default)]
pub struct SharedSettings {
    inner: Rc<RefCell<Inner>>,
}

impl SharedSettings {
    pub fn new(config: Config, req_params: RequestParams) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                config,
                req_params,
                ..Default::default()
            })),
        }
    }

    pub fn history(&self) -> Vec<Message> {
        self.inner.borrow().history.clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&SettingsEvent) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    // Listeners run after the borrow is dropped so they can read the store.
    fn notify(&self, event: SettingsEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&event);
        }
    }
}

impl ConfigStore for SharedSettings {
    fn config(&self) -> Config {
        self.inner.borrow().config.clone()
    }

    fn set_config(&self, next: Config) {
        tracing::debug!(
            has_api_key = next.has_api_key(),
            fontsize = next.fontsize,
            save_session = next.save_session,
            pre_prompt = next.pre_prompt,
            "config replaced"
        );
        self.inner.borrow_mut().config = next.clone();
        self.notify(SettingsEvent::ConfigChanged(next));
    }

    fn req_params(&self) -> RequestParams {
        self.inner.borrow().req_params.clone()
    }

    fn set_req_params(&self, next: RequestParams) {
        tracing::debug!(temperature = next.temperature, "request params replaced");
        self.inner.borrow_mut().req_params = next.clone();
        self.notify(SettingsEvent::RequestParamsChanged(next));
    }
}

impl SessionStore for SharedSettings {
    fn update_session(&self, history: Vec<Message>) {
        let len = history.len();
        tracing::debug!(len, "session history replaced");
        self.inner.borrow_mut().history = history;
        self.notify(SettingsEvent::SessionUpdated { len });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_empty_history_always_clears() {
        for save_session in [true, false] {
            let config = Config {
                save_session,
                ..Config::default()
            };
            assert_eq!(session_write(&config, &[]), SessionWrite::Clear);
        }
    }

    #[test]
    fn test_history_saved_only_while_enabled() {
        let history = vec![Message::user("hi")];
        let on = Config {
            save_session: true,
            ..Config::default()
        };
        let off = Config {
            save_session: false,
            ..Config::default()
        };
        assert_eq!(session_write(&on, &history), SessionWrite::Save);
        assert_eq!(session_write(&off, &history), SessionWrite::Skip);
    }

    #[test]
    fn test_setters_replace_whole_records() {
        let store = SharedSettings::default();
        let next = Config {
            api_key: "sk-new".to_string(),
            ..store.config()
        };
        store.set_config(next.clone());
        assert_eq!(store.config(), next);

        let params = RequestParams {
            temperature: 0.2,
            ..store.req_params()
        };
        store.set_req_params(params.clone());
        assert_eq!(store.req_params(), params);
    }

    #[test]
    fn test_listeners_see_every_event() {
        let store = SharedSettings::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        store.update_session(vec![Message::user("hi"), Message::assistant("hello")]);
        store.set_req_params(RequestParams::default());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], SettingsEvent::SessionUpdated { len: 2 });
        assert!(matches!(seen[1], SettingsEvent::RequestParamsChanged(_)));
    }

    #[test]
    fn test_listener_can_read_store() {
        let store = SharedSettings::default();
        let reader = store.clone();
        let observed = Rc::new(Cell::new(false));
        let flag = observed.clone();
        store.subscribe(move |_| flag.set(reader.config().pre_prompt));

        store.set_config(Config {
            pre_prompt: true,
            ..Config::default()
        });
        assert!(observed.get());
    }

    #[test]
    fn test_unsubscribe() {
        let store = SharedSettings::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.set_config(Config::default());
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_config(Config::default());
        assert_eq!(calls.get(), 1);
    }
}
