mod common;

use common::TestEnv;
use serde_json::json;

fn project(env: &TestEnv) {
    env.write_rules(r#"{"map": ["js.src"], "toolkits": [], "builds": []}"#);
    env.write_file(
        "app.json",
        r#"{
    "name": "legacy-app",
    "js": {
        "src": ["app/src", "app/overrides"]
    }
}"#,
    );
    env.write_file("app/src/Main.js", "Ext.define('Main', {});");
    env.write_file("app/src/view/List.js", "Ext.define('List', {});");
}

#[test]
fn test_prepare_stages_sources_and_rewrites_manifest() {
    let env = TestEnv::new();
    project(&env);

    let result = env.run(&["--prepare"]);
    assert_eq!(result.exit_code, 0, "output:\n{}", result.combined_output());

    // Sources copied into the staging folder
    assert_eq!(
        env.read_file(".stagehand-build/app/src/Main.js"),
        "Ext.define('Main', {});"
    );
    assert_eq!(
        env.read_file(".stagehand-build/app/src/view/List.js"),
        "Ext.define('List', {});"
    );

    // Manifest points at the staged copies
    let manifest = env.read_json("app.json");
    assert_eq!(
        manifest["js"]["src"],
        json!([".stagehand-build/app/src", ".stagehand-build/app/overrides"])
    );
}

#[test]
fn test_prepare_missing_source_directory_is_skipped() {
    let env = TestEnv::new();
    project(&env);

    let result = env.run(&["--prepare"]);

    assert_eq!(result.exit_code, 0);
    assert!(!env.path(".stagehand-build/app/overrides").exists());
}

#[test]
fn test_prepare_writes_manifest_backup() {
    let env = TestEnv::new();
    project(&env);
    let original = env.read_file("app.json");

    let result = env.run(&["--prepare"]);

    assert_eq!(result.exit_code, 0);
    assert_eq!(env.read_file("app.json.stagehand-backup"), original);
}

#[test]
fn test_prepare_twice_does_not_double_prefix() {
    let env = TestEnv::new();
    project(&env);

    assert_eq!(env.run(&["--prepare"]).exit_code, 0);
    let after_once = env.read_json("app.json");

    assert_eq!(env.run(&["--prepare"]).exit_code, 0);
    let after_twice = env.read_json("app.json");

    assert_eq!(after_once, after_twice);
}

#[test]
fn test_prepare_refreshes_stale_staged_copies() {
    let env = TestEnv::new();
    project(&env);
    env.write_file(".stagehand-build/app/src/Stale.js", "old");

    let result = env.run(&["--prepare"]);

    assert_eq!(result.exit_code, 0);
    assert!(!env.path(".stagehand-build/app/src/Stale.js").exists());
    assert!(env.path(".stagehand-build/app/src/Main.js").exists());
}

#[test]
fn test_prepare_bootstraps_missing_templates() {
    let env = TestEnv::new();
    project(&env);

    let result = env.run(&["--prepare"]);

    assert_eq!(result.exit_code, 0);
    assert!(env.path(".babelrc").exists());
}

#[test]
fn test_prepare_never_overwrites_existing_templates() {
    let env = TestEnv::new();
    project(&env);
    env.write_file(".babelrc", r#"{"presets": ["my-custom-preset"]}"#);

    let result = env.run(&["--prepare"]);

    assert_eq!(result.exit_code, 0);
    assert_eq!(
        env.read_file(".babelrc"),
        r#"{"presets": ["my-custom-preset"]}"#
    );
}

#[test]
fn test_prepare_expands_toolkit_placeholders() {
    let env = TestEnv::new();
    env.write_rules(r#"{"map": ["js.src"], "toolkits": ["classic", "modern"]}"#);
    env.write_file(
        "app.json",
        r#"{"js": {"src": ["${toolkit.name}/src"]}}"#,
    );
    env.write_file("classic/src/Button.js", "classic button");
    env.write_file("modern/src/Button.js", "modern button");

    let result = env.run(&["--prepare"]);

    assert_eq!(result.exit_code, 0);
    assert_eq!(
        env.read_file(".stagehand-build/classic/src/Button.js"),
        "classic button"
    );
    assert_eq!(
        env.read_file(".stagehand-build/modern/src/Button.js"),
        "modern button"
    );

    // Placeholder entries keep their marker form in the manifest
    let manifest = env.read_json("app.json");
    assert_eq!(
        manifest["js"]["src"],
        json!([".stagehand-build/${toolkit.name}/src"])
    );
}

#[test]
fn test_prepare_with_package_dir_manifest() {
    let env = TestEnv::new();
    env.write_rules(r#"{"map": ["sencha.src"]}"#);
    env.write_file(
        "package.json",
        r#"{"name": "legacy-pkg", "sencha": {"src": ["${package.dir}/src"]}}"#,
    );
    env.write_file("src/Util.js", "util");

    let result = env.run(&["--prepare"]);

    assert_eq!(result.exit_code, 0);
    assert_eq!(env.read_file(".stagehand-build/src/Util.js"), "util");

    let manifest = env.read_json("package.json");
    assert_eq!(
        manifest["sencha"]["src"],
        json!(["${package.dir}/.stagehand-build/src"])
    );
}

#[test]
fn test_prepare_leaves_unmapped_fields_alone() {
    let env = TestEnv::new();
    env.write_rules(r#"{"map": ["js.src", "css.src"]}"#);
    env.write_file(
        "app.json",
        r#"{"name": "legacy-app", "js": {"src": ["app/src"]}}"#,
    );
    env.write_file("app/src/Main.js", "code");

    let result = env.run(&["--prepare"]);

    assert_eq!(result.exit_code, 0);
    let manifest = env.read_json("app.json");
    assert_eq!(manifest["name"], json!("legacy-app"));
    assert_eq!(manifest["js"]["src"], json!([".stagehand-build/app/src"]));
    assert!(manifest.get("css").is_none());
}
