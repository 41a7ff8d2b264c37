use crate::storage::{self, CONFIG_KEY, REQ_PARAMS_KEY, SESSION_KEY};
use shared::models::*;
use shared::settings::{ConfigStore, SessionStore, SessionWrite, session_write};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub config: Config,
    pub req_params: RequestParams,
    /// Session history for the chat view; the drawer only ever clears it.
    pub history: Vec<Message>,
}

impl Default for State {
    fn default() -> Self {
        let config: Config = storage::load(CONFIG_KEY);
        let history = if config.save_session {
            storage::load(SESSION_KEY)
        } else {
            Vec::new()
        };
        Self {
            config,
            req_params: storage::load(REQ_PARAMS_KEY),
            history,
        }
    }
}

pub enum Action {
    SetConfig(Config),
    SetReqParams(RequestParams),
    UpdateSession(Vec<Message>),
}

impl Reducible for State {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            Action::SetConfig(config) => {
                if let Err(e) = storage::save(CONFIG_KEY, &config) {
                    tracing::error!("Failed to persist config: {:?}", e);
                }
                next.config = config;
            }
            Action::SetReqParams(params) => {
                if let Err(e) = storage::save(REQ_PARAMS_KEY, &params) {
                    tracing::error!("Failed to persist request params: {:?}", e);
                }
                next.req_params = params;
            }
            Action::UpdateSession(history) => {
                match session_write(&next.config, &history) {
                    SessionWrite::Clear => storage::clear(SESSION_KEY),
                    SessionWrite::Save => {
                        if let Err(e) = storage::save(SESSION_KEY, &history) {
                            tracing::error!("Failed to persist session: {:?}", e);
                        }
                    }
                    SessionWrite::Skip => {}
                }
                next.history = history;
            }
        }

        next.into()
    }
}

pub type StoreContext = UseReducerHandle<State>;

/// Store contracts over the reducer handle captured at render time.
#[derive(Clone, PartialEq)]
pub struct StoreHandle(pub StoreContext);

impl ConfigStore for StoreHandle {
    fn config(&self) -> Config {
        self.0.config.clone()
    }

    fn set_config(&self, next: Config) {
        self.0.dispatch(Action::SetConfig(next));
    }

    fn req_params(&self) -> RequestParams {
        self.0.req_params.clone()
    }

    fn set_req_params(&self, next: RequestParams) {
        self.0.dispatch(Action::SetReqParams(next));
    }
}

impl SessionStore for StoreHandle {
    fn update_session(&self, history: Vec<Message>) {
        self.0.dispatch(Action::UpdateSession(history));
    }
}
