//! Client-side pieces of the contact workflow: the form controller and the
//! scroll-reveal collaborator shim.

pub mod form;
pub mod reveal;

pub use form::{ContactForm, Field, FieldErrors, SubmitStatus};
pub use reveal::{init_reveal_once, NoopReveal, RevealConfig, RevealEffects};
