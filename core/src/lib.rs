//! Domain model for the random character chat: the persona, the message log,
//! the session state container and the seams (responder, clock, preference
//! store) that the browser frontend and the server plug into.

pub mod character;
pub mod clock;
pub mod config;
pub mod error;
pub mod message;
pub mod responder;
pub mod session;
pub mod theme;

pub use character::Character;
pub use clock::Clock;
pub use config::ChatConfig;
pub use error::ChatError;
pub use message::{Message, Sender};
pub use responder::{Responder, SimulatedResponder};
pub use session::{ChatController, PendingReply, RequestToken, SessionState, SessionStore};
pub use theme::{MemoryPreferenceStore, PreferenceStore, Theme, ThemePreference};
