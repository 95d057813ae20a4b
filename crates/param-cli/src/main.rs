//! CLI de operador: renderiza parámetros de un job del catálogo sin levantar
//! el servidor.
//!
//! Códigos de salida: 0 ok, 2 uso (clap), 4 job/parámetro inexistente,
//! 5 catálogo inválido.
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use paramflow_rust::http::parse_params;
use paramflow_rust::{build_renderer, telemetry, AppConfig, Catalog};

const EXIT_NOT_FOUND: u8 = 4;
const EXIT_CATALOG: u8 = 5;

#[derive(Debug, Parser)]
#[command(name = "param-cli", version, about = "Renderizado de parámetros de job")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Renderiza los parámetros de un job e imprime el JSON resultante.
    Render(RenderArgs),
    /// Lista los jobs del catálogo.
    List {
        #[arg(long, env = "PARAMFLOW_CATALOG", default_value = "catalog.json")]
        catalog: PathBuf,
    },
}

#[derive(Debug, Args)]
struct RenderArgs {
    #[arg(long, env = "PARAMFLOW_CATALOG", default_value = "catalog.json")]
    catalog: PathBuf,
    /// Nombre completo del job (`folder/job`).
    #[arg(long)]
    job: String,
    /// Valores actuales: `a:1,b:[x,y]`.
    #[arg(long, default_value = "")]
    params: String,
    /// Renderiza un único parámetro.
    #[arg(long)]
    parameter: Option<String>,
    #[arg(long)]
    parallel: bool,
    /// Simula una instalación sin la extensión de providers.
    #[arg(long)]
    no_extension: bool,
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    telemetry::init();
    let cli = Cli::parse();
    match cli.command {
        Command::List { catalog } => list(&catalog),
        Command::Render(args) => render(args),
    }
}

fn load(path: &Path) -> Result<Catalog, ExitCode> {
    Catalog::load(path).map_err(|e| {
                           eprintln!("[param-cli] catálogo inválido ({}): {e}", path.display());
                           ExitCode::from(EXIT_CATALOG)
                       })
}

fn list(path: &Path) -> ExitCode {
    let catalog = match load(path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    for name in catalog.job_names() {
        println!("{name}");
    }
    ExitCode::SUCCESS
}

fn render(args: RenderArgs) -> ExitCode {
    let catalog = match load(&args.catalog) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let Some(job) = catalog.get(args.job.trim()) else {
        eprintln!("[param-cli] job no encontrado: {}", args.job);
        return ExitCode::from(EXIT_NOT_FOUND);
    };
    let config = AppConfig { parallel: args.parallel,
                             extension_enabled: !args.no_extension,
                             provider_timeout: args.timeout_ms.map(Duration::from_millis),
                             ..AppConfig::default() };
    let renderer = build_renderer(&config);
    let values = parse_params(&args.params);

    let output = match &args.parameter {
        Some(name) => match renderer.render_one(&job.definition, name, &values) {
            Some(p) => serde_json::to_string_pretty(&p),
            None => {
                eprintln!("[param-cli] parámetro '{name}' no existe en {}", args.job);
                return ExitCode::from(EXIT_NOT_FOUND);
            }
        },
        None => serde_json::to_string_pretty(&renderer.render(&job.definition, &values)),
    };
    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[param-cli] error serializando: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from(["param-cli", "render", "--catalog", "c.json", "--job", "team/deploy",
                                       "--params", "env:prod", "--no-extension", "--timeout-ms", "250"]).unwrap();
        let Command::Render(args) = cli.command else { panic!("expected render") };
        assert_eq!(args.job, "team/deploy");
        assert!(args.no_extension);
        assert!(!args.parallel);
        assert_eq!(args.timeout_ms, Some(250));
    }
}
