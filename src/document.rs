use serde_json::{Map, Value};

use crate::{
    error::{KtxifyError, KtxifyResult},
    extension::KHR_TEXTURE_BASISU,
};

/// Root of a parsed glTF 2.0 asset.
///
/// Only the arrays the transformation touches are modeled; everything else
/// (scenes, nodes, meshes, accessors, ...) is captured verbatim in `rest` and
/// written back untouched on serialization.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub textures: Vec<Texture>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buffers: Vec<Buffer>,

    #[serde(
        rename = "extensionsUsed",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub extensions_used: Vec<String>,

    #[serde(
        rename = "extensionsRequired",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub extensions_required: Vec<String>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// An entry in `Document::images`. Identity is the entry's index; the array
/// is append-only so indices held by textures stay valid across a run.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Image {
    /// Relative file path or data URI. Absent for bufferView-backed images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Texture {
    /// Plain image reference, for viewers without compressed-texture support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<usize>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extensions: Map<String, Value>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Buffer {
    /// Relative file path or data URI. Absent for GLB-internal buffers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Texture {
    /// Image index referenced through the `KHR_texture_basisu` extension.
    pub fn basisu_source(&self) -> Option<usize> {
        self.extensions
            .get(KHR_TEXTURE_BASISU)?
            .get("source")?
            .as_u64()
            .map(|v| v as usize)
    }

    pub fn set_basisu_source(&mut self, image_index: usize) {
        self.extensions.insert(
            KHR_TEXTURE_BASISU.to_string(),
            serde_json::json!({ "source": image_index }),
        );
    }
}

impl Document {
    /// Checks that every image index held by a texture (plain `source` or the
    /// basisu extension payload) points into `images`.
    pub fn check_image_references(&self) -> KtxifyResult<()> {
        for (i, tex) in self.textures.iter().enumerate() {
            if let Some(src) = tex.source
                && src >= self.images.len()
            {
                return Err(KtxifyError::document(format!(
                    "texture {i} references image {src}, but there are only {} images",
                    self.images.len()
                )));
            }
            if let Some(src) = tex.basisu_source()
                && src >= self.images.len()
            {
                return Err(KtxifyError::document(format!(
                    "texture {i} references image {src} via {KHR_TEXTURE_BASISU}, \
                     but there are only {} images",
                    self.images.len()
                )));
            }
        }
        Ok(())
    }
}
