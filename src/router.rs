use tracing::{debug, debug_span, warn};

use crate::buffer::TextBuffer;
use crate::keycode::{KeyAction, KeyCode, KeyMap};
use crate::layout::{LayoutRegistry, LayoutResourceId, LayoutVariant};

/// What the rendering surface should do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceAction {
    /// Leave the surface as-is.
    None,
    /// Install the resolved layout resource.
    Install(LayoutResourceId),
    /// Fall back to the platform's native text-entry surface.
    NativeFallback,
}

/// Result of routing one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    pub surface: SurfaceAction,
    /// Enter is reserved for submission and mutates nothing here; the shell
    /// may wire it to its own submit action.
    pub enter_pressed: bool,
}

impl KeyResponse {
    fn consumed() -> Self {
        Self {
            consumed: true,
            surface: SurfaceAction::None,
            enter_pressed: false,
        }
    }

    fn not_consumed() -> Self {
        Self {
            consumed: false,
            ..Self::consumed()
        }
    }
}

/// Routes raw key codes from the active layout to either the layout
/// registry or the focused text buffer.
///
/// Owns the active-layout state; borrows the buffer only for the duration
/// of one call. Every key event is handled synchronously and exactly once,
/// through exactly one of four branches: layout switch, backspace, enter,
/// printable insert.
#[derive(Debug)]
pub struct InputController {
    keymap: KeyMap,
    registry: LayoutRegistry,
    active_layout: Option<LayoutVariant>,
}

impl InputController {
    /// Fresh controller with no layout installed yet; callers follow up
    /// with [`reset`](Self::reset) or [`set_layout`](Self::set_layout) and
    /// forward the returned surface action.
    pub fn new(registry: LayoutRegistry, keymap: KeyMap) -> Self {
        Self {
            keymap,
            registry,
            active_layout: None,
        }
    }

    /// `None` while the native text-entry surface is in use.
    pub fn active_layout(&self) -> Option<LayoutVariant> {
        self.active_layout
    }

    /// Switch to `variant`, or fall back to the native surface when the
    /// registry has no resource for it. The fallback is the documented
    /// degraded mode, not an error; buffer content is never touched.
    pub fn set_layout(&mut self, variant: LayoutVariant) -> SurfaceAction {
        match self.registry.resolve(variant) {
            Some(resource) => {
                self.active_layout = Some(variant);
                SurfaceAction::Install(resource)
            }
            None => {
                warn!(?variant, "layout resource missing, using native surface");
                self.active_layout = None;
                SurfaceAction::NativeFallback
            }
        }
    }

    /// Drop any custom layout and use the native text-entry surface.
    pub fn set_native(&mut self) -> SurfaceAction {
        self.active_layout = None;
        SurfaceAction::NativeFallback
    }

    /// Re-initialize to the primary hiragana layout. The buffer is left
    /// untouched.
    pub fn reset(&mut self) -> SurfaceAction {
        self.set_layout(LayoutVariant::HiraganaPrimary)
    }

    /// Process one key event against the focused buffer.
    pub fn handle_key(&mut self, buffer: &mut TextBuffer, code: KeyCode) -> KeyResponse {
        let _span = debug_span!("handle_key", code).entered();
        match self.keymap.classify(code) {
            Some(KeyAction::SwitchLayout(variant)) => {
                let mut resp = KeyResponse::consumed();
                resp.surface = self.set_layout(variant);
                resp
            }
            Some(KeyAction::Backspace) => {
                buffer.delete_before_cursor();
                KeyResponse::consumed()
            }
            Some(KeyAction::Enter) => {
                let mut resp = KeyResponse::consumed();
                resp.enter_pressed = true;
                resp
            }
            Some(KeyAction::Insert(ch)) => {
                buffer.insert(&ch.to_string());
                KeyResponse::consumed()
            }
            None => {
                debug!(code, "key code outside defined domain, ignored");
                KeyResponse::not_consumed()
            }
        }
    }
}
