use module_meta::{descriptors_match, ManifestConfig, ModuleDescriptor, ModuleSpec, ProjectModel};

#[test]
fn test_queries_are_stable_across_repeated_calls() {
    let spec = ModuleSpec::builder("core")
        .source_files(["Main.x", "Util.x"])
        .classpath_root("/lib/a.jar")
        .jar_name("core.jar")
        .build();

    assert_eq!(spec.name(), spec.name());
    assert_eq!(spec.jar_name(), spec.jar_name());
    assert_eq!(spec.source_files(), spec.source_files());
    assert_eq!(spec.test_source_files(), spec.test_source_files());
    assert_eq!(spec.classpath_roots(), spec.classpath_roots());
}

#[test]
fn test_sequence_queries_preserve_construction_order() {
    let spec = ModuleSpec::builder("core")
        .source_files(["Main.x", "Util.x"])
        .classpath_root("/lib/a.jar")
        .jar_name("core.jar")
        .build();

    assert_eq!(spec.name(), "core");
    assert_eq!(spec.source_files(), ["Main.x", "Util.x"]);
    assert!(spec.test_source_files().is_empty());
    assert_eq!(spec.classpath_roots(), ["/lib/a.jar"]);
    assert_eq!(spec.jar_name(), "core.jar");
}

#[test]
fn test_fully_empty_module_answers_every_query() {
    let spec = ModuleSpec::builder("").jar_name("").build();

    assert_eq!(spec.name(), "");
    assert_eq!(spec.jar_name(), "");
    assert!(spec.source_files().is_empty());
    assert!(spec.test_source_files().is_empty());
    assert!(spec.classpath_roots().is_empty());
}

#[test]
fn test_distinct_representations_are_observably_equivalent() {
    // Same module data through three unrelated representations.
    let built = ModuleSpec::builder("core")
        .source_files(["src/Main.kt", "src/Util.kt"])
        .test_source_file("test/MainTest.kt")
        .classpath_root("/lib/runtime.jar")
        .jar_name("core.jar")
        .build();

    let manifest = ManifestConfig::from_toml_str(
        r#"
[manifest]
name = "demo"
description = "demo"
version = "1.0"

[[modules]]
name = "core"
sources = ["src/Main.kt", "src/Util.kt"]
test_sources = ["test/MainTest.kt"]
classpath = ["/lib/runtime.jar"]
jar = "core.jar"
"#,
    )
    .unwrap();
    let from_manifest = manifest.find_module("core").unwrap();

    let model = ProjectModel::from_json_str(
        r#"{
            "project": "demo",
            "modules": [
                {
                    "id": "core",
                    "layout": {
                        "sources": ["src/Main.kt", "src/Util.kt"],
                        "testSources": ["test/MainTest.kt"],
                        "classpath": ["/lib/runtime.jar"]
                    },
                    "artifact": "core.jar"
                }
            ]
        }"#,
    )
    .unwrap();
    let from_model = model.find_module("core").unwrap();

    assert!(descriptors_match(&built, from_manifest));
    assert!(descriptors_match(&built, from_model));
    assert!(descriptors_match(from_manifest, from_model));
}

#[test]
fn test_snapshot_of_any_representation_is_equivalent() {
    let manifest = ManifestConfig::from_toml_str(
        r#"
[manifest]
name = "demo"
description = "demo"
version = "1.0"

[[modules]]
name = "web"
sources = ["src/Server.kt"]
"#,
    )
    .unwrap();
    let module = manifest.find_module("web").unwrap();

    let snapshot = ModuleSpec::from_descriptor(module);
    assert!(descriptors_match(module, &snapshot));
    assert_eq!(snapshot.jar_name(), "web.jar");
}

#[test]
fn test_source_and_test_overlap_is_not_rejected() {
    let spec = ModuleSpec::builder("mixed")
        .source_file("src/Shared.kt")
        .test_source_file("src/Shared.kt")
        .build();

    assert_eq!(spec.source_files(), ["src/Shared.kt"]);
    assert_eq!(spec.test_source_files(), ["src/Shared.kt"]);
}

#[cfg(feature = "cli")]
#[test]
fn test_cli_config_is_a_conforming_representation() {
    use module_meta::CliConfig;

    let config = CliConfig {
        name: "core".to_string(),
        sources: vec!["src/Main.kt".to_string(), "src/Util.kt".to_string()],
        test_sources: vec!["test/MainTest.kt".to_string()],
        classpath: vec!["/lib/runtime.jar".to_string()],
        jar: "core.jar".to_string(),
        verbose: false,
        json: false,
    };

    let built = ModuleSpec::builder("core")
        .source_files(["src/Main.kt", "src/Util.kt"])
        .test_source_files(["test/MainTest.kt"])
        .classpath_root("/lib/runtime.jar")
        .jar_name("core.jar")
        .build();

    assert!(descriptors_match(&config, &built));
}
