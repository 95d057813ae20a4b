//! param-providers: la extensión de parámetros dinámicos.
//!
//! Este crate provee:
//! - Providers concretos, cada uno con un subconjunto distinto de
//!   capacidades del contrato `DynamicProvider`.
//! - `ProviderSpec`: descripción declarativa (JSON) de un provider.
//! - `ProviderRegistry`: tipos instalados + versión del paquete; actúa como
//!   `ExtensionLocator` para el detector del core.
//!
//! Nota: ningún provider ejecuta ni analiza código de scripts; sólo
//! consultan tablas y sustituyen placeholders.

pub mod error;
pub mod providers;
pub mod registry;
pub mod spec;

pub use error::SpecError;
pub use providers::{CascadeTableProvider, FailingProvider, JobScopedProvider, LegacyFilterProvider,
                    ReferenceTemplateProvider, StaticChoicesProvider};
pub use registry::ProviderRegistry;
pub use spec::ProviderSpec;
