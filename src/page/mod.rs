//! The portfolio page around the 3D backdrop

mod contact;
mod content;
mod controller;
mod shell;

pub use contact::{ContactForm, SubmissionSink, SubmitError, UnwiredSink};
pub use content::{Experience, PortfolioContent, Profile, Project, ProjectTag, Service, SocialLink};
pub use controller::{PageController, Section};
pub use shell::{Anchor, PageShell};
