/// Módulo de conversión - imagen → contenedor .ico multi-resolución
/// Decode, resize y layout ICO los resuelve el crate `image`

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, ExtendedColorType};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::core::error::ConvertError;
use crate::core::sizes::{join_sizes, IconSize};

/// Resultado de una conversión exitosa
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sizes: Vec<IconSize>,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[OK] Converted: {} -> {}",
            self.input.display(),
            self.output.display()
        )?;
        write!(f, "  Sizes: {}", join_sizes(&self.sizes))
    }
}

/// Ruta de salida por defecto: misma ruta con la extensión reemplazada por `.ico`
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension("ico")
}

/// Convertir `input` a un .ico con un frame por cada tamaño de `sizes`
///
/// Si `output` es `None` se usa [`derive_output_path`]. El archivo destino
/// se sobrescribe, y solo se crea cuando el ICO completo ya está en memoria:
/// una conversión fallida no deja archivos truncados.
pub fn convert(
    input: &Path,
    output: Option<&Path>,
    sizes: &[IconSize],
) -> Result<Conversion, ConvertError> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| derive_output_path(input));

    debug!("🖼️ Convirtiendo {} -> {}", input.display(), output.display());

    if !input.exists() {
        return Err(ConvertError::NotFound { path: input.to_path_buf() });
    }

    let img = image::open(input).map_err(|source| ConvertError::Decode {
        path: input.to_path_buf(),
        source,
    })?;

    let img = normalize_color(img);
    let bytes = encode_ico(&img, sizes, &output)?;

    fs::write(&output, &bytes).map_err(|e| ConvertError::encode(&output, e))?;

    info!(
        "✅ Icono generado: {} ({} frames, {} bytes)",
        output.display(),
        sizes.len(),
        bytes.len()
    );

    Ok(Conversion {
        input: input.to_path_buf(),
        output,
        sizes: sizes.to_vec(),
    })
}

/// Variante con reporte por consola: imprime `[OK]`/`[ERROR]` y devuelve bool
pub fn convert_and_report(input: &Path, output: Option<&Path>, sizes: &[IconSize]) -> bool {
    match convert(input, output, sizes) {
        Ok(conversion) => {
            println!("{}", conversion);
            true
        }
        Err(e) => {
            error!("❌ Conversión fallida: {}", e);
            println!("[ERROR] Error: {}", e);
            false
        }
    }
}

/// Forzar RGB de 3 canales (se descarta alpha/paleta)
fn normalize_color(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::Rgb8 => img,
        other => {
            debug!("🎨 Modo de color {:?} -> Rgb8", other);
            DynamicImage::ImageRgb8(img.into_rgb8())
        }
    }
}

/// Armar el contenedor ICO en memoria, un frame PNG por tamaño
fn encode_ico(img: &DynamicImage, sizes: &[IconSize], output: &Path) -> Result<Vec<u8>, ConvertError> {
    if sizes.is_empty() {
        return Err(ConvertError::encode(output, "no icon sizes requested"));
    }

    let mut frames = Vec::with_capacity(sizes.len());
    for size in sizes {
        size.validate().map_err(|reason| ConvertError::encode(output, reason))?;

        let resized = img
            .resize_exact(size.width, size.height, FilterType::Lanczos3)
            .into_rgb8();
        let frame = IcoFrame::as_png(
            resized.as_raw(),
            size.width,
            size.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| ConvertError::encode(output, e))?;

        debug!("🧩 Frame {} listo", size);
        frames.push(frame);
    }

    let mut buffer = Vec::new();
    IcoEncoder::new(&mut buffer)
        .encode_images(&frames)
        .map_err(|e| ConvertError::encode(output, e))?;

    Ok(buffer)
}
