//! Template selection and rendering for packsmith.
//!
//! Maps a resolved project configuration onto a generation plan, then
//! renders each planned file from its declarative fragment tree. The crate
//! is pure: it never touches the filesystem. The CLI's project writer
//! consumes the [`Manifest`] this crate produces.

pub mod error;
pub mod fragment;
pub mod plan;
pub mod renderer;
pub mod templates;

pub use error::{TemplateError, TemplateResult};
pub use fragment::{Cond, Expr, Field, Fragment, Template};
pub use plan::{generate, render_plan, select_plan, GenerationPlan, Manifest, PlanEntry, RenderedFile};
pub use renderer::render;
