use std::fs;
use std::path::{Path, PathBuf};

use config::Config;
use pipeline::{OutputTarget, PipelineError, WlscanCompiler};
use semantics::DestructorArgsPolicy;

fn core_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../adapters/tests/fixtures/wayland-core.xml")
}

fn write_xml(dir: &Path, name: &str, xml: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, xml).expect("Failed to write protocol file");
    path
}

const DESTRUCTOR_WITH_ARGS: &str = r#"<protocol name="odd">
  <interface name="wl_thing" version="1">
    <request name="release" type="destructor">
      <arg name="serial" type="uint"/>
    </request>
  </interface>
</protocol>"#;

#[test]
fn test_compile_to_file() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let out = dir.path().join("src").join("wayland_client_protocol.rs");

    let compiler = WlscanCompiler::default();
    compiler
        .compile(&core_fixture(), &OutputTarget::File(out.clone()))
        .expect("compilation should succeed");

    let written = fs::read_to_string(&out).expect("output file should exist");
    assert!(written.starts_with("// Generated by wlscan. Do not edit.\n"));
    assert!(written.contains("pub fn wl_display_sync("));
    assert_eq!(written, compiler.render(&core_fixture()).expect("render"));
}

#[test]
fn test_schema_error_leaves_no_output() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let input = write_xml(dir.path(), "bad.xml", DESTRUCTOR_WITH_ARGS);
    let out = dir.path().join("out.rs");

    let err = WlscanCompiler::default()
        .compile(&input, &OutputTarget::File(out.clone()))
        .expect_err("destructor with arguments is rejected by default");
    assert!(matches!(err, PipelineError::Schema(_)));
    assert!(err.to_string().contains("wl_thing.release"));
    assert!(!out.exists());
}

#[test]
fn test_config_controls_policy_and_options() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let input = write_xml(dir.path(), "odd.xml", DESTRUCTOR_WITH_ARGS);

    let mut config = Config::default();
    config.validation.destructor_args = DestructorArgsPolicy::Ignore;
    config.codegen.runtime_module = "crate::native".to_string();

    let rendered =
        WlscanCompiler::from_config(&config).render(&input).expect("ignore policy accepts it");
    assert!(rendered.contains("use crate::native::*;"));
    assert!(rendered.contains("pub fn wl_thing_release(wl_thing: *mut Struct_wl_thing) -> () {"));
}

#[test]
fn test_dump_ir() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("ir").join("wayland.ir.json");

    WlscanCompiler::default().dump_ir(&core_fixture(), &path).expect("dump should succeed");
    let loaded = ir::Protocol::from_file(&path).expect("dumped IR should load");
    assert_eq!(loaded.name.as_deref(), Some("wayland"));
    assert!(loaded.get_interface("wl_registry").is_some());
}

#[test]
fn test_one_load_feeds_module_and_ir() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let out = dir.path().join("protocol.rs");
    let ir_path = dir.path().join("protocol.ir.json");

    let compiler = WlscanCompiler::default();
    let protocol = compiler.load(&core_fixture()).expect("fixture should load");
    compiler.write_ir(&protocol, &ir_path).expect("IR should be written");
    compiler.emit(&protocol, &OutputTarget::File(out.clone())).expect("module should be written");

    let module = fs::read_to_string(&out).expect("output file should exist");
    assert_eq!(module, compiler.render(&core_fixture()).expect("render"));
    assert_eq!(ir::Protocol::from_file(&ir_path).expect("dumped IR should load"), protocol);
}

#[test]
fn test_missing_input() {
    let err = WlscanCompiler::default()
        .render(Path::new("/nonexistent/protocol.xml"))
        .expect_err("missing input must fail");
    assert!(matches!(err, PipelineError::Schema(adapters::SchemaError::Io(_))));
}
