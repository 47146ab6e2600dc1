use crate::{config::Config, document::Document};

/// glTF extension through which textures reference Basis Universal payloads.
pub const KHR_TEXTURE_BASISU: &str = "KHR_texture_basisu";

/// Registers the extension in the document's metadata lists. Called once,
/// after the image loop, and only when at least one image was converted.
pub fn activate_basisu_extension(doc: &mut Document, cfg: &Config) {
    push_unique(&mut doc.extensions_used, KHR_TEXTURE_BASISU);
    if cfg.require_extension {
        push_unique(&mut doc.extensions_required, KHR_TEXTURE_BASISU);
    }
}

fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|n| n == name) {
        list.push(name.to_string());
    }
}
