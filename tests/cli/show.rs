//! Tests for `keyprops show`.

use crate::support::*;

#[test]
fn test_show_masks_passwords() {
    let t = Test::valid();

    let output = t.show();
    assert_success(&output);
    assert_stdout_contains(&output, "release");
    assert_stdout_contains(&output, "********");
    assert_stdout_contains(&output, "JKS");
    assert_stdout_excludes(&output, "p1\n");
    assert_stdout_excludes(&output, "p2\n");
}

#[test]
fn test_show_reveal() {
    let t = Test::valid();

    let output = t.cmd().args(["show", "--reveal"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "p1");
    assert_stdout_contains(&output, "p2");
}

#[test]
fn test_show_json_fields() {
    let t = Test::valid();

    let json = t.show_json(&[]);
    assert_eq!(json["keyAlias"], "release");
    assert_eq!(json["keyPassword"], "********");
    assert_eq!(json["storePassword"], "********");
    assert_eq!(
        json["storeFile"],
        t.app().join("release.jks").display().to_string()
    );
    assert_eq!(json["keystore"]["format"], "jks");
    assert_eq!(json["keystore"]["size"], 8);
    assert_eq!(json["keystore"]["sha256"].as_str().unwrap().len(), 64);
}

#[test]
fn test_show_json_reveal() {
    let t = Test::valid();

    let json = t.show_json(&["--reveal"]);
    assert_eq!(json["keyPassword"], "p1");
    assert_eq!(json["storePassword"], "p2");
}

#[test]
fn test_show_pkcs12() {
    let t = Test::new();
    t.write_properties("keyAlias=upload\nkeyPassword=a\nstorePassword=b\nstoreFile=upload.p12\n");
    t.write_keystore("upload.p12", PKCS12_BYTES);

    let json = t.show_json(&[]);
    assert_eq!(json["keystore"]["format"], "pkcs12");
}

#[test]
fn test_show_fails_like_check() {
    let t = Test::new();

    let output = t.show();
    assert_failure(&output);
    assert_stderr_contains(&output, "key.properties not found at");
}
