use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use tracing::info;

use crate::{
    buffers::copy_buffers,
    config::Config,
    convert::{ConvertReport, Encoder, FileCopier, convert_images},
    document::Document,
    error::{KtxifyError, KtxifyResult},
    extension::activate_basisu_extension,
    paths::ensure_parent_dir,
};

/// Runs the whole transformation: load, convert, activate, write, copy.
///
/// Nothing is persisted until every image has been processed, so a fatal
/// failure mid-loop leaves the output untouched and the partially mutated
/// in-memory document is simply dropped.
#[tracing::instrument(skip(cfg, encoder, copier))]
pub fn compress_gltf(
    input: &Path,
    output: &Path,
    cfg: Config,
    encoder: &dyn Encoder,
    copier: &dyn FileCopier,
) -> KtxifyResult<ConvertReport> {
    let cfg = cfg.normalized();
    let mut doc = read_document(input)?;

    let report = convert_images(&mut doc, &cfg, input, output, encoder, copier)?;
    if report.any_converted() {
        activate_basisu_extension(&mut doc, &cfg);
    }
    doc.check_image_references()?;

    write_document(&doc, output)?;
    copy_buffers(&doc, input, output, copier)?;

    info!(
        converted = report.converted,
        copied = report.copied,
        warnings = report.warnings.len(),
        "wrote {}",
        output.display()
    );
    Ok(report)
}

pub fn read_document(path: &Path) -> KtxifyResult<Document> {
    let f = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            KtxifyError::missing_input(format!("input glTF '{}' is not found", path.display()))
        } else {
            KtxifyError::io(format!("failed to open '{}': {e}", path.display()))
        }
    })?;
    serde_json::from_reader(BufReader::new(f))
        .map_err(|e| KtxifyError::serde(format!("failed to parse glTF '{}': {e}", path.display())))
}

pub fn write_document(doc: &Document, path: &Path) -> KtxifyResult<()> {
    ensure_parent_dir(path)?;
    let f = File::create(path)
        .map_err(|e| KtxifyError::io(format!("failed to create '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(BufWriter::new(f), doc)
        .map_err(|e| KtxifyError::serde(format!("failed to write glTF '{}': {e}", path.display())))
}
