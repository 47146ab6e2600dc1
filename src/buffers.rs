use std::path::Path;

use tracing::debug;

use crate::{classify, convert::FileCopier, document::Document, error::KtxifyResult, paths};

/// Copies every file-backed buffer next to the output document, mirroring the
/// relative uri. Embedded and GLB-internal buffers are left as-is; the
/// document itself is not mutated.
pub fn copy_buffers(
    doc: &Document,
    input_doc: &Path,
    output_doc: &Path,
    copier: &dyn FileCopier,
) -> KtxifyResult<()> {
    for (i, buf) in doc.buffers.iter().enumerate() {
        let Some(uri) = buf.uri.as_deref() else {
            continue;
        };
        if classify::is_embedded(uri) {
            continue;
        }
        debug!(buffer = i, uri, "copying buffer");
        copier.copy(
            &paths::sibling_path(input_doc, uri),
            &paths::sibling_path(output_doc, uri),
        )?;
    }
    Ok(())
}
