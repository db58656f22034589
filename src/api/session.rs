use std::sync::{Arc, Mutex};

use crate::session::QuizSession;

use super::types::{buffer_state, convert_to_events};
use super::{KanaBufferState, KanaEvent, KanaKeyResponse};

#[derive(uniffi::Object)]
pub struct KanaSession {
    session: Mutex<QuizSession>,
}

impl KanaSession {
    pub(super) fn wrap(session: QuizSession) -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(session),
        })
    }
}

#[uniffi::export]
impl KanaSession {
    fn handle_key(&self, code: u32) -> KanaKeyResponse {
        let mut session = self.session.lock().unwrap();
        let resp = session.handle_key(code);
        convert_to_events(resp, session.buffer())
    }

    fn prompt(&self) -> Option<String> {
        let session = self.session.lock().unwrap();
        session.prompt().map(str::to_string)
    }

    fn buffer_state(&self) -> KanaBufferState {
        let session = self.session.lock().unwrap();
        buffer_state(session.buffer())
    }

    fn remaining(&self) -> u32 {
        let session = self.session.lock().unwrap();
        session.remaining() as u32
    }

    /// Judge the current buffer against the current question. Non-mutating;
    /// the shell decides whether to advance.
    fn submit(&self) -> bool {
        let session = self.session.lock().unwrap();
        session.submit()
    }

    /// Move to the next question. `consumed` is false once the pool is
    /// exhausted; otherwise the events carry the new surface and the
    /// cleared buffer.
    fn advance(&self) -> KanaKeyResponse {
        let mut session = self.session.lock().unwrap();
        let Some(action) = session.advance() else {
            return KanaKeyResponse {
                consumed: false,
                events: Vec::new(),
            };
        };
        let mut events = Vec::new();
        match action {
            crate::router::SurfaceAction::Install(resource) => {
                events.push(KanaEvent::InstallLayout {
                    resource_id: resource.0,
                });
            }
            crate::router::SurfaceAction::NativeFallback => {
                events.push(KanaEvent::UseNativeSurface);
            }
            crate::router::SurfaceAction::None => {}
        }
        events.push(KanaEvent::SetBuffer {
            state: buffer_state(session.buffer()),
        });
        KanaKeyResponse {
            consumed: true,
            events,
        }
    }
}
