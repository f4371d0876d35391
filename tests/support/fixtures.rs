//! Test fixtures and constants.

/// A complete key.properties matching the release scenario.
pub const VALID_PROPERTIES: &str = "\
keyAlias=release
keyPassword=p1
storePassword=p2
storeFile=release.jks
";

/// key.properties as generated by the Flutter docs, with comments and spacing.
pub const FLUTTER_STYLE_PROPERTIES: &str = r#"
# Generated for release builds. Do not commit.
storePassword = correct horse battery
keyPassword = staple
keyAlias = upload
storeFile = ../keys/upload-keystore.jks
"#;

/// Leading bytes of a JKS keystore.
pub const JKS_BYTES: &[u8] = &[0xFE, 0xED, 0xFE, 0xED, 0x00, 0x00, 0x00, 0x02];

/// Leading bytes of a PKCS#12 keystore.
pub const PKCS12_BYTES: &[u8] = &[0x30, 0x82, 0x0A, 0x4C, 0x02, 0x01, 0x03];
