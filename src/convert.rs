use std::path::Path;

use tracing::{debug, warn};

use crate::{
    classify,
    config::Config,
    document::Document,
    error::KtxifyResult,
    paths,
    rewrite::rewrite_texture_references,
};

/// External compression step. Implementations must leave a compressed
/// texture at exactly `output`; the caller has already derived the uri it
/// will record in the document from that path.
pub trait Encoder {
    fn encode(&self, input: &Path, output: &Path, extra_args: &[String]) -> KtxifyResult<()>;
}

/// Verbatim file duplication for assets that bypass the encoder.
pub trait FileCopier {
    fn copy(&self, src: &Path, dst: &Path) -> KtxifyResult<()>;
}

/// Non-fatal conditions recorded during the image loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageWarning {
    /// Data-URI payload; lives inside the document and is never converted.
    Embedded { image: usize },
    /// No uri at all (bufferView-backed image).
    NoUri { image: usize },
    /// Not a format the encoder accepts; the file was copied verbatim.
    UnsupportedFormat { image: usize, extension: String },
}

/// Outcome of [`convert_images`]; the pipeline uses `converted` to gate
/// extension activation and the CLI reports the rest.
#[derive(Debug, Default)]
pub struct ConvertReport {
    pub converted: usize,
    pub copied: usize,
    pub warnings: Vec<ImageWarning>,
}

impl ConvertReport {
    pub fn any_converted(&self) -> bool {
        self.converted > 0
    }
}

/// Walks `doc.images` once, in the index order present at entry, and rewrites
/// the document around each convertible image.
///
/// Supported images are encoded and their texture references repointed via
/// the basisu extension; with `keep_fallback` the converted uri lands on a
/// freshly appended image entry so the original index stays intact.
/// Unsupported images are copied verbatim and left untouched in the
/// document. Entries appended during the loop are never revisited.
///
/// Encoder and copier failures abort the whole run; the partially mutated
/// document must then be discarded, not persisted.
pub fn convert_images(
    doc: &mut Document,
    cfg: &Config,
    input_doc: &Path,
    output_doc: &Path,
    encoder: &dyn Encoder,
    copier: &dyn FileCopier,
) -> KtxifyResult<ConvertReport> {
    let mut report = ConvertReport::default();
    let image_count = doc.images.len();

    for i in 0..image_count {
        let Some(uri) = doc.images[i].uri.clone() else {
            warn!(image = i, "image has no uri (bufferView payload), skipping");
            report.warnings.push(ImageWarning::NoUri { image: i });
            continue;
        };

        if classify::is_embedded(&uri) {
            warn!(image = i, "image is an embedded data URI, skipping");
            report.warnings.push(ImageWarning::Embedded { image: i });
            continue;
        }

        let ext = classify::file_extension(&uri);
        if !classify::is_supported_raster_format(ext) {
            warn!(
                image = i,
                extension = ext,
                supported = ?classify::SUPPORTED_INPUT_FORMATS,
                "unsupported source format, copying verbatim"
            );
            copier.copy(
                &paths::sibling_path(input_doc, &uri),
                &paths::sibling_path(output_doc, &uri),
            )?;
            report.copied += 1;
            report.warnings.push(ImageWarning::UnsupportedFormat {
                image: i,
                extension: ext.to_string(),
            });
            continue;
        }

        let converted_uri = paths::replace_extension(&uri, cfg.target_extension());
        encoder.encode(
            &paths::sibling_path(input_doc, &uri),
            &paths::sibling_path(output_doc, &converted_uri),
            &cfg.extra_encoder_args,
        )?;

        let converted_index = if cfg.keep_fallback {
            // The original entry keeps its uri and index; the converted uri
            // lands on a fresh entry at the end of the array.
            let mut duplicate = doc.images[i].clone();
            duplicate.uri = Some(converted_uri);
            doc.images.push(duplicate);
            doc.images.len() - 1
        } else {
            doc.images[i].uri = Some(converted_uri);
            i
        };

        rewrite_texture_references(doc, i, converted_index, cfg.keep_fallback);
        report.converted += 1;
        debug!(image = i, converted_index, uri = %uri, "converted image");
    }

    Ok(report)
}
