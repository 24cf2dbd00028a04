use std::path::PathBuf;
use thiserror::Error;

/// Errores posibles de una conversión a .ico
#[derive(Debug, Error)]
pub enum ConvertError {
    /// El archivo de entrada no existe
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// La librería de imágenes no pudo abrir/decodificar la entrada
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Falló el armado del contenedor ICO o la escritura a disco
    #[error("failed to write icon {}: {reason}", .path.display())]
    Encode { path: PathBuf, reason: String },
}

impl ConvertError {
    pub fn encode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Encode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
