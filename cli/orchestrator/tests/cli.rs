// run the wlscan binary against the shared protocol fixture
use std::path::PathBuf;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../adapters/tests/fixtures/wayland-core.xml")
}

fn wlscan(config_home: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wlscan"));
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn prints_module_to_stdout() {
    let tmp = tempdir().unwrap();
    wlscan(tmp.path())
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("// Generated by wlscan. Do not edit."))
        .stdout(predicate::str::contains("pub const WL_DISPLAY_SYNC: ::libc::c_uint = 0;"))
        .stdout(predicate::str::contains("pub fn wl_registry_bind("));
}

#[test]
fn writes_output_file_and_ir() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("gen").join("protocol.rs");
    let ir = tmp.path().join("gen").join("protocol.ir.json");
    wlscan(tmp.path())
        .arg(fixture())
        .arg("-o")
        .arg(&out)
        .arg("--dump-ir")
        .arg(&ir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let module = std::fs::read_to_string(&out).unwrap();
    assert!(module.contains("pub fn wl_surface_destroy("));
    assert!(std::fs::read_to_string(&ir).unwrap().contains("\"wl_shell_surface\""));
}

#[test]
fn rejects_destructor_with_args_unless_allowed() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("odd.xml");
    std::fs::write(
        &input,
        r#"<protocol name="odd">
  <interface name="wl_thing" version="1">
    <request name="release" type="destructor"><arg name="serial" type="uint"/></request>
  </interface>
</protocol>"#,
    )
    .unwrap();
    let out = tmp.path().join("odd.rs");

    wlscan(tmp.path())
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("wl_thing.release"));
    assert!(!out.exists());

    wlscan(tmp.path()).arg(&input).arg("--allow-destructor-args").assert().success().stdout(
        predicate::str::contains("wl_proxy_destroy(wl_thing as *mut Struct_wl_proxy);"),
    );
}

#[test]
fn reads_explicit_config() {
    let tmp = tempdir().unwrap();
    let config = tmp.path().join("wlscan.toml");
    std::fs::write(&config, "[codegen]\nruntime_module = \"crate::ffi\"\nemit_docs = true\n").unwrap();
    wlscan(tmp.path())
        .arg(fixture())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("use crate::ffi::*;"))
        .stdout(predicate::str::contains("/// "));
}

#[test]
fn missing_input_fails() {
    let tmp = tempdir().unwrap();
    wlscan(tmp.path())
        .arg(tmp.path().join("absent.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
