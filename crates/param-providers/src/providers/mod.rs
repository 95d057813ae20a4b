//! Implementaciones concretas de `DynamicProvider`.
//!
//! | provider                    | capacidades                               |
//! |-----------------------------|-------------------------------------------|
//! | `StaticChoicesProvider`     | default_choices                           |
//! | `CascadeTableProvider`      | render_choices, default_choices, referenced |
//! | `JobScopedProvider`         | choices_for_job, default_choices          |
//! | `LegacyFilterProvider`      | legacy_choices, filter_parameters         |
//! | `ReferenceTemplateProvider` | render_choices, referenced                |
//! | `FailingProvider`           | todas (siempre falla)                     |

mod cascade_table;
mod failing;
mod job_scoped;
mod legacy_filter;
mod reference_template;
mod static_choices;

pub use cascade_table::CascadeTableProvider;
pub use failing::FailingProvider;
pub use job_scoped::JobScopedProvider;
pub use legacy_filter::LegacyFilterProvider;
pub use reference_template::ReferenceTemplateProvider;
pub use static_choices::StaticChoicesProvider;
