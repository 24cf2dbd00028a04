use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::sizes::{default_sizes, IconSize};

/// Nombre del archivo de configuración opcional
pub const CONFIG_FILE_NAME: &str = "ico-convert.json";

/// Configuración de una conversión
/// Los valores por defecto reproducen la invocación histórica del script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Imagen de entrada (normalmente JPEG)
    pub input: PathBuf,

    /// Destino .ico; `null` = misma ruta que la entrada con extensión `.ico`
    pub output: Option<PathBuf>,

    /// Tamaños a embeber, en orden
    pub sizes: Vec<IconSize>,

    /// Si es true, una conversión fallida termina con exit code 1.
    /// Por defecto false: solo la falta del archivo de entrada cambia el exit code
    pub strict_exit_code: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("./img/pawapoke.jpg"),
            output: Some(PathBuf::from("./img/favicon.ico")),
            sizes: default_sizes(),
            strict_exit_code: false,
        }
    }
}

impl AppConfig {
    /// Buscar ico-convert.json junto al ejecutable y luego en el directorio actual.
    /// Si no existe ninguno se usan los valores por defecto (no se crea archivo)
    pub fn load() -> Result<Self> {
        for candidate in config_candidates() {
            if candidate.is_file() {
                return Self::load_from(&candidate);
            }
        }

        debug!("📁 {} no encontrado, usando configuración por defecto", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    /// Cargar configuración desde un JSON específico
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("📁 Cargando configuración desde: {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Error leyendo configuración: {}", path.display()))?;

        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Error parseando {} - JSON inválido", path.display()))?;

        info!("✅ Configuración cargada desde {}", path.display());
        debug!("🔧 Entrada: {}", config.input.display());
        debug!("🔧 Tamaños: {}", config.sizes.len());

        Ok(config)
    }

    /// Aplicar argumentos posicionales: `[INPUT [OUTPUT]]`
    /// Una entrada nueva sin salida explícita deriva la salida de la entrada
    pub fn apply_positional(&mut self, positional: &[String]) {
        if let Some(input) = positional.first() {
            self.input = PathBuf::from(input);
            self.output = positional.get(1).map(PathBuf::from);
        }
    }
}

/// Rutas candidatas para ico-convert.json, en orden de prioridad
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Prioridad: carpeta del ejecutable
    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join(CONFIG_FILE_NAME));
        }
    }

    // Fallback a directorio actual
    candidates.push(PathBuf::from(CONFIG_FILE_NAME));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_historic_invocation() {
        let config = AppConfig::default();
        assert_eq!(config.input, PathBuf::from("./img/pawapoke.jpg"));
        assert_eq!(config.output, Some(PathBuf::from("./img/favicon.ico")));
        assert_eq!(config.sizes, default_sizes());
        assert!(!config.strict_exit_code);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "input": "logo.jpg", "output": null, "sizes": [[64, 64]] }"#)
                .unwrap();
        assert_eq!(config.input, PathBuf::from("logo.jpg"));
        assert_eq!(config.output, None);
        assert_eq!(config.sizes, vec![IconSize::square(64)]);
        assert!(!config.strict_exit_code);
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join(format!("ico-convert-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{ "strict_exit_code": true }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert!(config.strict_exit_code);
        assert_eq!(config.input, AppConfig::default().input);
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let path = env::temp_dir().join(format!("ico-convert-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, "{ not json").unwrap();

        let result = AppConfig::load_from(&path);
        let _ = fs::remove_file(&path);

        assert!(result.is_err());
        assert!(AppConfig::load_from(Path::new("/nonexistent/ico-convert.json")).is_err());
    }

    #[test]
    fn test_positional_overrides() {
        let mut config = AppConfig::default();
        config.apply_positional(&[]);
        assert_eq!(config, AppConfig::default());

        config.apply_positional(&["photo.jpg".to_string()]);
        assert_eq!(config.input, PathBuf::from("photo.jpg"));
        assert_eq!(config.output, None);

        config.apply_positional(&["a.jpg".to_string(), "b.ico".to_string()]);
        assert_eq!(config.input, PathBuf::from("a.jpg"));
        assert_eq!(config.output, Some(PathBuf::from("b.ico")));
    }
}
