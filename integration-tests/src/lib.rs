//! Shared fixtures for the cross-crate tests.

/// A profile file with one fully specified and one partial profile, in TOML.
pub const PROFILES_TOML: &str = r#"
[[profiles]]
name = "Hillclimb"
area = 2.2
aoa = 28.0
velocity = 40.0

[[profiles]]
name = "Low Drag"
aoa = 4.0
"#;

/// The same profiles as [`PROFILES_TOML`], in YAML.
pub const PROFILES_YAML: &str = "
profiles:
  - name: Hillclimb
    area: 2.2
    aoa: 28.0
    velocity: 40.0
  - name: Low Drag
    aoa: 4.0
";

/// The same profiles as [`PROFILES_TOML`], in JSON.
pub const PROFILES_JSON: &str = r#"{
  "profiles": [
    { "name": "Hillclimb", "area": 2.2, "aoa": 28.0, "velocity": 40.0 },
    { "name": "Low Drag", "aoa": 4.0 }
  ]
}"#;
