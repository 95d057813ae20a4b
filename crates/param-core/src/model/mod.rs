//! Modelos del motor: descriptores de entrada, valores actuales, contexto de
//! job y las estructuras renderizadas que se entregan al serializador.

pub mod descriptor;
pub mod job;
pub mod kind;
pub mod rendered;
pub mod values;

pub use descriptor::{DescriptorKind, ParameterDescriptor};
pub use job::{JobContext, JobDefinition};
pub use kind::{input_kind_of, InputKind};
pub use rendered::{RenderedJobParameters, RenderedParameter};
pub use values::CurrentValues;
