//! Language Adapter Framework
//!
//! Each target language provides an adapter that turns a resolved lookup into
//! framework-idiomatic text. The resolver never sees language-specific logic.
//!
//! Adapters keep their variation configuration in tables keyed by
//! `(component, variation)`. A missing key means "no extra properties", not an
//! error: existence is the registry's business.

pub mod extjs;
pub mod framework;
pub mod react;
pub mod typescript;
pub mod vanilla;

pub use extjs::ExtJsAdapter;
pub use framework::{default_adapters, LanguageAdapter};
pub use react::ReactAdapter;
pub use typescript::TypeScriptAdapter;
pub use vanilla::VanillaAdapter;
