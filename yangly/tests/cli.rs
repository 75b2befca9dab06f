//! End-to-end tests for the command line driver.

use clap::Parser;
use std::fs;
use std::path::Path;
use yangly::cli::{Cli, run};

const DEVICE_OLD: &str = r#"<module name="acme-device" namespace="urn:acme:device">
    <revision date="2023-01-01"/>
    <leaf name="legacy"><type kind="string"/></leaf>
</module>"#;

const DEVICE_NEW: &str = r#"<module name="acme-device" namespace="urn:acme:device">
    <revision date="2024-03-01"/>
    <revision date="2023-01-01"/>
    <container name="system">
        <leaf name="hostname" mandatory="true"><type kind="string"/></leaf>
        <leaf name="uptime"><type kind="uint64"/></leaf>
    </container>
    <leaf name="stats" config-only="true"><type kind="uint32"/></leaf>
</module>"#;

const ROUTING: &str = r#"<module name="acme-routing">
    <list name="route" key="prefix">
        <leaf name="prefix"><type kind="string"/></leaf>
        <leaf name="metric"><type kind="uint8"/></leaf>
    </list>
</module>"#;

const RPCS_ONLY: &str = r#"<module name="acme-ops"><rpc name="reboot"/></module>"#;

const BROKEN: &str = r#"<module name="acme-broken"><leaf name="x"><type kind="string"/></module>"#;

const BAD_KEY: &str = r#"<module name="acme-bad"><list name="l" key="id"/></module>"#;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("Failed to write fixture");
}

fn cli(input: &Path, out: &Path, extra: &[&str]) -> Cli {
    let mut args = vec![
        "yangly".to_string(),
        "--path".to_string(),
        input.display().to_string(),
        "--out".to_string(),
        out.display().to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::try_parse_from(args).expect("Failed to parse arguments")
}

#[test]
fn test_run_generates_one_file_per_module() {
    let input = tempfile::tempdir().expect("Failed to create temp dir");
    let out = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(input.path().join("vendor")).expect("Failed to create dir");
    write(input.path(), "device-old.xml", DEVICE_OLD);
    write(input.path(), "device.xml", DEVICE_NEW);
    write(&input.path().join("vendor"), "routing.xml", ROUTING);
    write(input.path(), "ops.xml", RPCS_ONLY);
    write(input.path(), "README.md", "not a module");

    let summary = run(&cli(input.path(), out.path(), &[])).expect("Run failed");

    assert!(summary.is_success());
    assert_eq!(summary.skipped, 1);
    assert_eq!(
        summary.written,
        vec![
            out.path().join("acme-device.ts"),
            out.path().join("acme-routing.ts"),
        ]
    );
    assert!(!out.path().join("acme-ops.ts").exists());

    let device = fs::read_to_string(out.path().join("acme-device.ts")).expect("Missing output");
    assert_eq!(
        device,
        "// Module: acme-device@2024-03-01 (Namespace: urn:acme:device)\n\n\
         export interface AcmeDevice {\n\
         system?: {\n\
         hostname: string;\n\
         uptime?: bigint;\n\
         };\n\
         }\n"
    );

    let routing = fs::read_to_string(out.path().join("acme-routing.ts")).expect("Missing output");
    assert!(routing.starts_with("// Module: acme-routing (Namespace: none)\n\n"));
    assert!(routing.contains("route?: {\nmetric?: number;\nprefix?: string;\n};"));
    assert!(routing.contains("metric?: number;"));
}

#[test]
fn test_run_missing_directory_is_not_an_error() {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    let out = root.path().join("dist");

    let summary = run(&cli(&root.path().join("absent"), &out, &[])).expect("Run failed");

    assert_eq!(summary, yangly::cli::RunSummary::default());
    assert!(!out.exists());
}

#[test]
fn test_run_no_matching_files() {
    let input = tempfile::tempdir().expect("Failed to create temp dir");
    let out = tempfile::tempdir().expect("Failed to create temp dir");
    write(input.path(), "device.yang", DEVICE_NEW);

    let summary = run(&cli(input.path(), out.path(), &[])).expect("Run failed");
    assert!(summary.written.is_empty());
    assert!(summary.is_success());
}

#[test]
fn test_run_counts_errors_and_continues() {
    let input = tempfile::tempdir().expect("Failed to create temp dir");
    let out = tempfile::tempdir().expect("Failed to create temp dir");
    write(input.path(), "broken.xml", BROKEN);
    write(input.path(), "bad.xml", BAD_KEY);
    write(input.path(), "routing.xml", ROUTING);

    let summary = run(&cli(input.path(), out.path(), &[])).expect("Run failed");

    assert_eq!(summary.errors, 2);
    assert!(!summary.is_success());
    assert_eq!(summary.written, vec![out.path().join("acme-routing.ts")]);
}

#[test]
fn test_run_bail_stops_at_first_error() {
    let input = tempfile::tempdir().expect("Failed to create temp dir");
    let out = tempfile::tempdir().expect("Failed to create temp dir");
    write(input.path(), "a-bad.xml", BAD_KEY);
    write(input.path(), "routing.xml", ROUTING);

    let err = run(&cli(input.path(), out.path(), &["--bail"])).unwrap_err();

    assert!(format!("{:#}", err).contains("invalid module acme-bad"));
    assert!(!out.path().join("acme-routing.ts").exists());
}

#[test]
fn test_run_alias_style_without_header() {
    let input = tempfile::tempdir().expect("Failed to create temp dir");
    let out = tempfile::tempdir().expect("Failed to create temp dir");
    write(input.path(), "routing.xml", ROUTING);

    run(&cli(
        input.path(),
        out.path(),
        &["--style", "alias", "--no-header"],
    ))
    .expect("Run failed");

    let routing = fs::read_to_string(out.path().join("acme-routing.ts")).expect("Missing output");
    assert!(routing.starts_with("export type AcmeRouting = {\n"));
    assert!(routing.ends_with("};\n"));
}

#[test]
fn test_run_custom_extension_creates_output_dir() {
    let input = tempfile::tempdir().expect("Failed to create temp dir");
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    let out = root.path().join("gen/ts");
    write(input.path(), "routing.yin.xml", ROUTING);
    write(input.path(), "device.model", DEVICE_NEW);

    let summary = run(&cli(input.path(), &out, &["-e", "model"])).expect("Run failed");

    assert_eq!(summary.written, vec![out.join("acme-device.ts")]);
}

#[test]
fn test_run_emits_modules_with_fallback_leaves() {
    let input = tempfile::tempdir().expect("Failed to create temp dir");
    let out = tempfile::tempdir().expect("Failed to create temp dir");
    write(
        input.path(),
        "loose.xml",
        r#"<module name="acme-loose">
            <leaf name="ok"><type kind="string"/></leaf>
            <leaf name="x"/>
        </module>"#,
    );

    let summary = run(&cli(input.path(), out.path(), &["--no-header"])).expect("Run failed");

    assert!(summary.is_success());
    let loose = fs::read_to_string(out.path().join("acme-loose.ts")).expect("Missing output");
    assert_eq!(
        loose,
        "export interface AcmeLoose {\nok?: string;\nx?: unknown;\n}\n"
    );
}

#[test]
fn test_run_rejects_module_names_outside_output_dir() {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    let input = root.path().join("in");
    let out = root.path().join("out");
    fs::create_dir(&input).expect("Failed to create dir");
    let absolute = root.path().join("absolute-escape");

    write(
        &input,
        "a.xml",
        r#"<module name="../relative-escape"><leaf name="x"><type kind="string"/></leaf></module>"#,
    );
    write(
        &input,
        "b.xml",
        &format!(
            r#"<module name="{}"><leaf name="x"><type kind="string"/></leaf></module>"#,
            absolute.display()
        ),
    );
    write(&input, "routing.xml", ROUTING);

    let summary = run(&cli(&input, &out, &[])).expect("Run failed");

    assert_eq!(summary.errors, 2);
    assert_eq!(summary.written, vec![out.join("acme-routing.ts")]);
    assert!(!root.path().join("relative-escape.ts").exists());
    assert!(!root.path().join("absolute-escape.ts").exists());
}
