//! param-core: motor de renderizado y normalización de parámetros de job.
//!
//! Dado el listado ordenado de descriptores de un job y un mapa de valores
//! actuales, produce una descripción canónica y tipada de cada parámetro
//! (valor actual, tipo de input, choices ordenadas, dependencias, error).
//!
//! Módulos:
//! - `model`: descriptores (entrada), parámetros renderizados (salida),
//!   clasificación de tipo de input y mapa de valores actuales.
//! - `provider`: contrato `DynamicProvider` con capacidades opcionales.
//! - `normalize`: colapsa las formas heterogéneas de resultado a `Vec<String>`.
//! - `dependencies`: extracción de parámetros referenciados.
//! - `invoker`: cadena de fallback sobre las capacidades del provider.
//! - `renderer`: render de un único descriptor (total, nunca falla).
//! - `orchestrator`: render de todos los parámetros de un job.
//! - `detection`: disponibilidad (cacheada) de la extensión de providers.
pub mod constants;
pub mod dependencies;
pub mod errors;
pub mod invoker;
pub mod model;
pub mod normalize;
pub mod orchestrator;
pub mod detection;
pub mod provider;
pub mod renderer;

pub use dependencies::DependencyExtractor;
pub use errors::{InvokeError, LocateError, ProviderError};
pub use invoker::{Invocation, InvokerOptions, ProviderInvoker};
pub use model::{input_kind_of, CurrentValues, DescriptorKind, InputKind, JobContext, JobDefinition, ParameterDescriptor,
                RenderedJobParameters, RenderedParameter};
pub use normalize::{normalize, LabeledOption, RawResult, Scalar};
pub use orchestrator::{JobParameterRenderer, RenderMode};
pub use detection::{ExtensionLocator, ExtensionDetector, NoExtension, ResolvedExtension};
pub use provider::{Capability, DynamicProvider, RawDependencies};
pub use renderer::ParameterRenderer;
