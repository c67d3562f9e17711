//! Builder synthesis.
//!
//! The pure half of the engine: `ClassFacts -> BuilderPlan`. Nothing in here
//! touches a host tree; hosts see the result only through
//! [`BuilderPlan::into_members`].

mod class;
mod filter;
mod methods;
mod naming;
mod plan;
mod templates;

pub use class::ClassSynthesizer;
pub use filter::{is_participating, participating};
pub use methods::{MethodSynthesizer, render_type_param_decls, render_type_params};
pub use naming::{
    BUILD_METHOD_NAME, BUILDER_CLASS_NAME, DEFAULT_PREFIX, FACTORY_METHOD_NAME, builder_param_name,
    resolve_setter_name,
};
pub use plan::BuilderPlan;
pub use templates::BodyTemplate;
