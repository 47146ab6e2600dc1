use crate::document::Document;

/// Repoints every texture that referenced image `original` at image
/// `converted` through the basisu extension.
///
/// With `keep_fallback` the plain `source` stays on the texture so legacy
/// viewers keep rendering the original image; without it the plain link is
/// severed, since the data at `original` is no longer in its original format.
/// Textures that never referenced `original` are left untouched.
pub fn rewrite_texture_references(
    doc: &mut Document,
    original: usize,
    converted: usize,
    keep_fallback: bool,
) {
    for tex in &mut doc.textures {
        if tex.source != Some(original) {
            continue;
        }
        if !keep_fallback {
            tex.source = None;
        }
        tex.set_basisu_source(converted);
    }
}
