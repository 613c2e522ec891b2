//! Application services - orchestrate use cases.
//!
//! The three generators plan, the materializer writes, and
//! `ScaffoldService` ties them together per request.

pub mod component_generator;
pub mod materializer;
pub mod module_generator;
pub mod project_generator;
pub mod scaffold_service;
pub mod template_engine;

pub use component_generator::ComponentGenerator;
pub use materializer::Materializer;
pub use module_generator::ModuleGenerator;
pub use project_generator::ProjectGenerator;
pub use scaffold_service::ScaffoldService;
pub use template_engine::TemplateEngine;
