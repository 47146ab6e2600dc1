//! ktxify rewrites a glTF 2.0 asset so its textures reference Basis Universal
//! compressed images (KTX2) via `KHR_texture_basisu`, optionally keeping the
//! original images as a fallback for viewers without extension support.
//!
//! # Pipeline overview
//!
//! 1. **Load**: parse the input document; unmodeled glTF fields are carried
//!    through untouched ([`Document`])
//! 2. **Convert**: per image, classify (embedded / supported / unsupported),
//!    run the [`Encoder`] collaborator, rewrite texture references
//! 3. **Activate**: register the extension once anything converted
//! 4. **Write**: serialize the document and mirror auxiliary buffer files
//!
//! Compression itself happens in an external encoder binary (`toktx` in the
//! shipped [`ToktxEncoder`]); the engine only rewrites the document and is
//! exercised against in-memory collaborators in tests.
#![forbid(unsafe_code)]

pub mod buffers;
pub mod classify;
pub mod config;
pub mod convert;
pub mod document;
pub mod encode_toktx;
pub mod error;
pub mod extension;
pub mod paths;
pub mod pipeline;
pub mod rewrite;

pub use config::Config;
pub use convert::{ConvertReport, Encoder, FileCopier, ImageWarning, convert_images};
pub use document::{Buffer, Document, Image, Texture};
pub use encode_toktx::{StdFileCopier, ToktxEncoder, is_toktx_on_path};
pub use error::{KtxifyError, KtxifyResult};
pub use extension::KHR_TEXTURE_BASISU;
pub use pipeline::compress_gltf;
