pub mod api;
pub mod backend;
pub mod buffer;
pub mod deck;
pub mod kana;
pub mod keycode;
pub mod layout;
pub mod numbers;
pub mod question;
pub mod router;
pub mod session;
pub mod trace_init;
pub mod vocab;

uniffi::setup_scaffolding!();
