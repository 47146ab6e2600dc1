/// Run configuration. Only `require_extension` and `keep_fallback` steer the
/// document mutation; the rest passes through to the encoder untouched.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// List `KHR_texture_basisu` under `extensionsRequired` as well as
    /// `extensionsUsed`.
    pub require_extension: bool,

    /// Keep each original image alongside its converted copy so viewers
    /// without extension support can still render the asset.
    pub keep_fallback: bool,

    /// Emit `.ktx` containers instead of the default `.ktx2`.
    pub use_ktx_container: bool,

    /// Extra arguments forwarded verbatim to the encoder binary.
    pub extra_encoder_args: Vec<String>,
}

impl Config {
    /// Applies the fallback rule: a kept legacy image means legacy viewers
    /// must still function, so the extension cannot be mandatory.
    pub fn normalized(mut self) -> Self {
        if self.keep_fallback {
            self.require_extension = false;
        }
        self
    }

    /// File extension of the container the encoder emits.
    pub fn target_extension(&self) -> &'static str {
        if self.use_ktx_container { "ktx" } else { "ktx2" }
    }
}
