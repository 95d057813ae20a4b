//! Orquestador: renderiza todos los parámetros de un job.
//!
//! Itera los descriptores en el orden declarado (el orden de salida es
//! significativo para quien pinta el formulario) y nunca aborta por el error
//! de un parámetro. El detector sólo aporta metadata: no decide si se intenta el
//! render dinámico.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::model::{CurrentValues, JobDefinition, RenderedJobParameters, RenderedParameter};
use crate::detection::ExtensionDetector;
use crate::renderer::ParameterRenderer;

/// Estrategia de iteración sobre los parámetros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Sequential,
    /// Un parámetro por tarea de rayon; el orden de salida se conserva.
    Parallel,
}

#[derive(Debug, Clone)]
pub struct JobParameterRenderer {
    detector: Arc<ExtensionDetector>,
    renderer: ParameterRenderer,
    mode: RenderMode,
}

impl JobParameterRenderer {
    pub fn new(detector: Arc<ExtensionDetector>, renderer: ParameterRenderer) -> Self {
        Self { detector, renderer, mode: RenderMode::Sequential }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn detector(&self) -> &ExtensionDetector {
        &self.detector
    }

    pub fn render(&self, job: &JobDefinition, values: &CurrentValues) -> RenderedJobParameters {
        let available = self.detector.is_available();
        let version = self.detector.version();
        debug!("render_job:start job={} params={} extension={available}",
               job.context.full_name,
               job.parameters.len());

        let ctx = &job.context;
        let parameters: Vec<RenderedParameter> = match self.mode {
            RenderMode::Sequential => job.parameters.iter().map(|d| self.renderer.render(d, ctx, values)).collect(),
            RenderMode::Parallel => job.parameters.par_iter().map(|d| self.renderer.render(d, ctx, values)).collect(),
        };

        debug!("render_job:done job={} errors={}",
               ctx.full_name,
               parameters.iter().filter(|p| p.has_error()).count());
        RenderedJobParameters { job_name: ctx.name.clone(),
                                job_full_name: ctx.full_name.clone(),
                                job_url: ctx.url.clone(),
                                build_with_parameters_url: ctx.build_with_parameters_url(),
                                active_extension_available: available,
                                active_extension_version: version,
                                parameters }
    }

    /// Renderiza sólo el parámetro `name`; `None` si el job no lo declara.
    pub fn render_one(&self, job: &JobDefinition, name: &str, values: &CurrentValues) -> Option<RenderedParameter> {
        job.parameter(name).map(|d| self.renderer.render(d, &job.context, values))
    }
}
