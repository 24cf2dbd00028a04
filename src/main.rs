use anyhow::{Context, Result};
use std::env;
use std::process::ExitCode;
use tracing::{error, info};

mod core;
mod logging;

use crate::core::{convert_and_report, AppConfig, IconSize};
use logging::setup_logging;

/// Argumentos de línea de comandos ya separados
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    show_help: bool,
    config_path: Option<String>,
    sizes: Option<Vec<IconSize>>,
    positional: Vec<String>,
}

/// Exit codes del proceso
const EXIT_OK: u8 = 0;
const EXIT_INPUT_MISSING: u8 = 1;
const EXIT_CONVERSION_FAILED: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// Entry point: una conversión de `input` a `output`
fn main() -> ExitCode {
    if let Err(e) = setup_logging() {
        eprintln!("⚠️ No se pudo inicializar logging: {}", e);
    }

    ExitCode::from(run(env::args().skip(1)))
}

/// Ejecutar el CLI y devolver el exit code:
/// 0 = ok (o conversión fallida sin `strict_exit_code`),
/// 1 = entrada inexistente (o conversión fallida con `strict_exit_code`),
/// 2 = argumentos o configuración inválidos
fn run(args: impl IntoIterator<Item = String>) -> u8 {
    let args = match parse_args(args) {
        Ok(args) => args,
        Err(e) => {
            println!("[ERROR] Error: {:#}", e);
            return EXIT_USAGE;
        }
    };

    if args.show_help {
        show_help_message();
        return EXIT_OK;
    }

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {:#}", e);
            println!("[ERROR] Error: {:#}", e);
            return EXIT_USAGE;
        }
    };

    // Chequeo explícito antes de convertir: sale con 1 sin pasar por el converter
    if !config.input.exists() {
        println!("[ERROR] Error: file not found: {}", config.input.display());
        return EXIT_INPUT_MISSING;
    }

    info!("🚀 Convirtiendo {}", config.input.display());
    let ok = convert_and_report(&config.input, config.output.as_deref(), &config.sizes);
    exit_code_for(ok, &config)
}

/// Una conversión fallida solo cambia el exit code en modo estricto
fn exit_code_for(ok: bool, config: &AppConfig) -> u8 {
    if !ok && config.strict_exit_code {
        EXIT_CONVERSION_FAILED
    } else {
        EXIT_OK
    }
}

/// Config: archivo (--config o ico-convert.json) + overrides de CLI.
/// Los tamaños se validan recién en el converter
fn resolve_config(args: &CliArgs) -> Result<AppConfig> {
    let mut config = match &args.config_path {
        Some(path) => AppConfig::load_from(path.as_ref())?,
        None => AppConfig::load()?,
    };

    config.apply_positional(&args.positional);
    if let Some(sizes) = &args.sizes {
        config.sizes = sizes.clone();
    }

    Ok(config)
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => parsed.show_help = true,
            "--config" => {
                let path = args.next().context("--config requiere una ruta")?;
                parsed.config_path = Some(path);
            }
            "--sizes" => {
                let list = args.next().context("--sizes requiere una lista, ej: 16x16,32x32")?;
                let sizes = list
                    .split(',')
                    .map(|s| s.parse::<IconSize>().map_err(anyhow::Error::msg))
                    .collect::<Result<Vec<_>>>()?;
                parsed.sizes = Some(sizes);
            }
            other if other.starts_with("--") => {
                anyhow::bail!("opción desconocida: {}", other);
            }
            positional => parsed.positional.push(positional.to_string()),
        }
    }

    if parsed.positional.len() > 2 {
        anyhow::bail!("demasiados argumentos: se esperan como máximo INPUT y OUTPUT");
    }

    Ok(parsed)
}

/// Muestra mensaje de ayuda CLI
fn show_help_message() {
    println!("🖼️ ico-convert - JPEG → icono .ico multi-resolución");
    println!();
    println!("USO:");
    println!("  ico-convert [OPTIONS] [INPUT [OUTPUT]]");
    println!();
    println!("OPCIONES:");
    println!("  --config <FILE>   Usa ese JSON en lugar de ico-convert.json");
    println!("  --sizes <LIST>    Tamaños separados por coma (default: 16x16,32x32,48x48)");
    println!("  --help           Muestra este mensaje de ayuda");
    println!();
    println!("CONFIGURACIÓN:");
    println!("  Se busca ico-convert.json junto al ejecutable y luego en el directorio actual");
    println!("  Sin argumentos convierte ./img/pawapoke.jpg en ./img/favicon.ico");
    println!();
    println!("EJEMPLOS:");
    println!("  ico-convert                          # Conversión por defecto");
    println!("  ico-convert photo.jpg                # Genera photo.ico");
    println!("  ico-convert logo.jpg app.ico --sizes 16,32,48,256");
}
