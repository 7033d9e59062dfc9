//! Core page-behavior logic, independent of the live document.
//!
//! - [`cursor`] - Cursor smoothing, ripples, hover registry
//! - [`button`] / [`download`] / [`filename`] - Download buttons
//! - [`gallery`] - Screenshot lightbox
//! - [`links`] / [`reveal`] - Navigation and section reveal
//! - [`mobile`] - Mobile style override plans

pub mod button;
pub mod cursor;
pub mod download;
pub mod error;
pub mod filename;
pub mod gallery;
pub mod links;
pub mod mobile;
pub mod reveal;

pub use button::{ButtonPhase, ButtonState};
pub use cursor::{CursorState, HoverRegistry, Ripple};
pub use download::{ClickAction, DownloadBackend, DownloadOutcome, FetchedFile, plan_click, run_download};
pub use error::{DomError, DownloadError};
pub use gallery::{Lightbox, ModalDialog};
pub use mobile::{MobileAdapterConfig, StyleOp, Target};
pub use reveal::RevealState;
