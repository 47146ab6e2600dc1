use std::path::PathBuf;

use clap::Parser;

use ktxify::{Config, StdFileCopier, ToktxEncoder, is_toktx_on_path};

/// Compress glTF textures to KTX2/Basis Universal (requires `toktx` on PATH).
#[derive(Parser, Debug)]
#[command(name = "ktxify", version)]
struct Cli {
    /// Input glTF containing .png/.pam/.ppm/.pgm textures.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output glTF path. Converted and copied files land next to it.
    #[arg(long)]
    out: PathBuf,

    /// Also list KHR_texture_basisu under extensionsRequired.
    /// Ignored when --keep-fallback is set.
    #[arg(long)]
    require_extension: bool,

    /// Keep each original image alongside its converted copy so viewers
    /// without extension support can still render the asset.
    #[arg(long)]
    keep_fallback: bool,

    /// Emit legacy .ktx containers instead of .ktx2.
    #[arg(long)]
    ktx: bool,

    /// Extra argument forwarded verbatim to toktx (repeatable).
    #[arg(long = "encoder-arg")]
    encoder_args: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !is_toktx_on_path() {
        anyhow::bail!("toktx is required for texture compression, but was not found on PATH");
    }

    let cfg = Config {
        require_extension: cli.require_extension,
        keep_fallback: cli.keep_fallback,
        use_ktx_container: cli.ktx,
        extra_encoder_args: cli.encoder_args,
    };
    let encoder = ToktxEncoder::from_config(&cfg);

    let report = ktxify::compress_gltf(&cli.in_path, &cli.out, cfg, &encoder, &StdFileCopier)?;

    eprintln!(
        "wrote {} ({} converted, {} copied, {} warnings)",
        cli.out.display(),
        report.converted,
        report.copied,
        report.warnings.len()
    );
    Ok(())
}
