use std::path::{Path, PathBuf};

use ktxify::{Config, Encoder, KtxifyResult, StdFileCopier, compress_gltf};

/// Stands in for toktx: writes a marker payload at the requested output path.
struct FakeEncoder;

impl Encoder for FakeEncoder {
    fn encode(&self, input: &Path, output: &Path, _extra: &[String]) -> KtxifyResult<()> {
        use anyhow::Context as _;
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent).context("create encoder output dir")?;
        }
        std::fs::write(output, format!("ktx2 of {}", input.display()))
            .context("write fake ktx2")?;
        Ok(())
    }
}

struct Workspace {
    _dir: tempfile::TempDir,
    in_doc: PathBuf,
    out_doc: PathBuf,
}

fn workspace(doc: &serde_json::Value, files: &[(&str, &[u8])]) -> Workspace {
    let dir = tempfile::tempdir().unwrap();
    let in_dir = dir.path().join("in");
    std::fs::create_dir_all(&in_dir).unwrap();
    std::fs::create_dir_all(dir.path().join("out")).unwrap();

    let in_doc = in_dir.join("scene.gltf");
    std::fs::write(&in_doc, serde_json::to_vec_pretty(doc).unwrap()).unwrap();
    for (name, bytes) in files {
        let path = in_dir.join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, bytes).unwrap();
    }

    Workspace {
        out_doc: dir.path().join("out/scene.gltf"),
        _dir: dir,
        in_doc,
    }
}

fn output_json(ws: &Workspace) -> serde_json::Value {
    serde_json::from_slice(&std::fs::read(&ws.out_doc).unwrap()).unwrap()
}

#[test]
fn converts_in_place_and_requires_the_extension() {
    let ws = workspace(
        &serde_json::json!({
            "asset": { "version": "2.0" },
            "images": [{ "uri": "a.png" }],
            "textures": [{ "source": 0 }],
        }),
        &[("a.png", b"png bytes")],
    );

    let cfg = Config {
        require_extension: true,
        ..Config::default()
    };
    let report = compress_gltf(&ws.in_doc, &ws.out_doc, cfg, &FakeEncoder, &StdFileCopier).unwrap();
    assert_eq!(report.converted, 1);

    assert_eq!(
        output_json(&ws),
        serde_json::json!({
            "asset": { "version": "2.0" },
            "images": [{ "uri": "a.ktx2" }],
            "textures": [{ "extensions": { "KHR_texture_basisu": { "source": 0 } } }],
            "extensionsUsed": ["KHR_texture_basisu"],
            "extensionsRequired": ["KHR_texture_basisu"],
        })
    );

    let encoded = ws.out_doc.parent().unwrap().join("a.ktx2");
    assert!(std::fs::read_to_string(encoded).unwrap().starts_with("ktx2 of"));
}

#[test]
fn keep_fallback_appends_and_never_requires_the_extension() {
    let ws = workspace(
        &serde_json::json!({
            "asset": { "version": "2.0" },
            "images": [{ "uri": "a.png" }],
            "textures": [{ "source": 0 }],
        }),
        &[("a.png", b"png bytes")],
    );

    // require_extension is requested but must be forced off by the fallback.
    let cfg = Config {
        require_extension: true,
        keep_fallback: true,
        ..Config::default()
    };
    compress_gltf(&ws.in_doc, &ws.out_doc, cfg, &FakeEncoder, &StdFileCopier).unwrap();

    assert_eq!(
        output_json(&ws),
        serde_json::json!({
            "asset": { "version": "2.0" },
            "images": [{ "uri": "a.png" }, { "uri": "a.ktx2" }],
            "textures": [{
                "source": 0,
                "extensions": { "KHR_texture_basisu": { "source": 1 } },
            }],
            "extensionsUsed": ["KHR_texture_basisu"],
        })
    );
}

#[test]
fn unsupported_image_round_trips_byte_identical() {
    let jpg: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x13, 0x37];
    let ws = workspace(
        &serde_json::json!({
            "asset": { "version": "2.0" },
            "images": [{ "uri": "photos/cat.jpg" }],
            "textures": [{ "source": 0 }],
        }),
        &[("photos/cat.jpg", jpg)],
    );

    let report = compress_gltf(
        &ws.in_doc,
        &ws.out_doc,
        Config::default(),
        &FakeEncoder,
        &StdFileCopier,
    )
    .unwrap();
    assert_eq!(report.converted, 0);
    assert_eq!(report.copied, 1);

    // Document untouched: no extension activation, no texture mutation.
    assert_eq!(
        output_json(&ws),
        serde_json::json!({
            "asset": { "version": "2.0" },
            "images": [{ "uri": "photos/cat.jpg" }],
            "textures": [{ "source": 0 }],
        })
    );

    let mirrored = ws.out_doc.parent().unwrap().join("photos/cat.jpg");
    assert_eq!(std::fs::read(mirrored).unwrap(), jpg);
}

#[test]
fn embedded_images_gate_extension_activation() {
    let ws = workspace(
        &serde_json::json!({
            "asset": { "version": "2.0" },
            "images": [{ "uri": "data:image/png;base64,AAAA" }],
            "textures": [{ "source": 0 }],
        }),
        &[],
    );

    let cfg = Config {
        require_extension: true,
        ..Config::default()
    };
    let report = compress_gltf(&ws.in_doc, &ws.out_doc, cfg, &FakeEncoder, &StdFileCopier).unwrap();

    assert_eq!(report.converted, 0);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(
        output_json(&ws),
        serde_json::json!({
            "asset": { "version": "2.0" },
            "images": [{ "uri": "data:image/png;base64,AAAA" }],
            "textures": [{ "source": 0 }],
        })
    );
}

#[test]
fn auxiliary_buffers_are_mirrored_next_to_the_output() {
    let ws = workspace(
        &serde_json::json!({
            "asset": { "version": "2.0" },
            "buffers": [
                { "uri": "scene.bin", "byteLength": 4 },
                { "uri": "data:application/octet-stream;base64,AAAA", "byteLength": 3 },
            ],
        }),
        &[("scene.bin", b"\x01\x02\x03\x04")],
    );

    compress_gltf(
        &ws.in_doc,
        &ws.out_doc,
        Config::default(),
        &FakeEncoder,
        &StdFileCopier,
    )
    .unwrap();

    let mirrored = ws.out_doc.parent().unwrap().join("scene.bin");
    assert_eq!(std::fs::read(mirrored).unwrap(), b"\x01\x02\x03\x04");
}

#[test]
fn unmodeled_gltf_fields_survive_the_transformation() {
    let ws = workspace(
        &serde_json::json!({
            "asset": { "version": "2.0", "generator": "exporter 9.1" },
            "scene": 0,
            "scenes": [{ "nodes": [0] }],
            "nodes": [{ "mesh": 0 }],
            "images": [{ "uri": "a.png", "name": "albedo" }],
            "textures": [{ "source": 0, "sampler": 0, "name": "tex0" }],
            "samplers": [{ "magFilter": 9729 }],
        }),
        &[("a.png", b"png bytes")],
    );

    compress_gltf(
        &ws.in_doc,
        &ws.out_doc,
        Config::default(),
        &FakeEncoder,
        &StdFileCopier,
    )
    .unwrap();

    let out = output_json(&ws);
    assert_eq!(out["asset"]["generator"], "exporter 9.1");
    assert_eq!(out["scenes"], serde_json::json!([{ "nodes": [0] }]));
    assert_eq!(out["samplers"], serde_json::json!([{ "magFilter": 9729 }]));
    assert_eq!(out["images"][0]["name"], "albedo");
    assert_eq!(out["textures"][0]["sampler"], 0);
    assert_eq!(out["textures"][0]["name"], "tex0");
}

#[test]
fn encode_failure_leaves_no_output_document() {
    struct BrokenEncoder;
    impl Encoder for BrokenEncoder {
        fn encode(&self, _: &Path, _: &Path, _: &[String]) -> KtxifyResult<()> {
            Err(ktxify::KtxifyError::encode("toktx exited with status 1"))
        }
    }

    let ws = workspace(
        &serde_json::json!({
            "asset": { "version": "2.0" },
            "images": [{ "uri": "a.png" }],
        }),
        &[("a.png", b"png bytes")],
    );

    let err = compress_gltf(
        &ws.in_doc,
        &ws.out_doc,
        Config::default(),
        &BrokenEncoder,
        &StdFileCopier,
    )
    .unwrap_err();

    assert!(matches!(err, ktxify::KtxifyError::Encode(_)));
    assert!(!ws.out_doc.exists());
}

#[test]
fn missing_input_fails_before_any_work() {
    let dir = tempfile::tempdir().unwrap();
    let err = compress_gltf(
        &dir.path().join("absent.gltf"),
        &dir.path().join("out.gltf"),
        Config::default(),
        &FakeEncoder,
        &StdFileCopier,
    )
    .unwrap_err();
    assert!(matches!(err, ktxify::KtxifyError::MissingInput(_)));
}
