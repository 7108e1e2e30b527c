//! Integration tests for sniffdef.
//!
//! Drives a whole run the way the binary does: config file, layout
//! directory, generation and output writing.

use std::fs;

use sniffdef::cli::OutputTarget;
use sniffdef::config::GenerationConfig;
use sniffdef::generate::generate;
use sniffdef::layouts::load_layouts;
use sniffdef_core::{default_registry, Emitter, Encoding, Error, Protocol, SchemaVersion};

const UDP_LAYOUT: &str = "\
-- trimmed udp layout
(poller string,                     -- 1
 capture_begin u64,
 capture_end u64,
 port_client u16,
 port_server u16,
 traffic_bytes_client u64 {bytes})
";

#[test]
fn test_config_file_to_program() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("sniffdef.toml");
    fs::write(
        &config_path,
        r#"
transport = "files"
protocols = ["tcp", "non_ip"]

[files]
prefix = "/data/"
compressed = true
"#,
    )
    .unwrap();

    let plan = GenerationConfig::from_file(&config_path)
        .unwrap()
        .resolve()
        .unwrap();
    let report = generate(&default_registry(), &plan).unwrap();
    assert!(report.is_complete());

    let program = Emitter::new(plan.style).render_program(&report.definitions);
    assert!(program.starts_with("-- vim: ft=sql expandtab\n\nDEFINE LAZY tcp AS\n"));
    assert!(program.contains("FILES \"/data/tcp_v30.*csv.lz4\"\n      PREPROCESSED WITH \"lz4 -d -c\"\n      THEN DELETE\n"));
    assert!(program.contains("DEFINE LAZY 'non-ip' AS\n"));
    assert!(program.contains("FILES \"/data/non_ip_v30.*csv.lz4\""));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GenerationConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_layout_directory_overrides_and_rejects() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("udp.txt"), UDP_LAYOUT).unwrap();
    fs::write(dir.path().join("icmp.txt"), "(poller string, capture_begin u64, capture_end u64?)").unwrap();

    let config = GenerationConfig {
        protocols: vec!["udp".into(), "icmp".into(), "dns".into()],
        ..Default::default()
    };
    let plan = config.resolve().unwrap();

    let mut registry = default_registry();
    let loaded = load_layouts(
        &mut registry,
        dir.path(),
        &plan.protocols,
        &plan.versions,
        plan.encoding,
    )
    .unwrap();
    assert_eq!(loaded, 1);

    let report = generate(&registry, &plan).unwrap();
    let names: Vec<_> = report.definitions.iter().map(|d| d.name()).collect();
    assert_eq!(names, ["udp", "dns"]);

    let udp = &report.definitions[0];
    assert!(udp.text().contains("     traffic_bytes_client u64 {bytes})\n"));
    assert_eq!(udp.text().matches(',').count(), 5);

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].key.protocol, Protocol::Icmp);
    assert!(matches!(report.skipped[0].error, Error::SchemaValidation { .. }));
}

#[test]
fn test_output_dir_writes_one_program_per_definition() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("defs");

    let config = GenerationConfig {
        encoding: "rowbinary".into(),
        transport: "bus".into(),
        style: sniffdef::config::Style::Parameterized,
        protocols: vec!["other_ip".into(), "sql".into()],
        ..Default::default()
    };
    let plan = config.resolve().unwrap();
    let report = generate(&default_registry(), &plan).unwrap();

    OutputTarget::Dir(out.clone())
        .write(&Emitter::new(plan.style), &report.definitions)
        .unwrap();

    let other_ip = fs::read_to_string(out.join("other-ip_ext.ramen")).unwrap();
    assert!(other_ip.starts_with("-- vim: ft=sql expandtab\n\nPARAMETERS\n  kafka_broker_list DEFAULTS TO \"localhost:9092\""));
    assert!(other_ip.contains("KAFKA TOPIC \"pvx.chb.other_ip\""));

    let sql = fs::read_to_string(out.join("sql_ext.ramen")).unwrap();
    assert!(sql.contains("DEFINE LAZY sql_ext AS"));
    assert!(sql.contains("KAFKA TOPIC \"pvx.chb.databases\""));
    assert_eq!(fs::read_dir(&out).unwrap().count(), 2);
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all.ramen");

    let plan = GenerationConfig::default().resolve().unwrap();
    let report = generate(&default_registry(), &plan).unwrap();
    OutputTarget::File(path.clone())
        .write(&Emitter::new(plan.style), &report.definitions)
        .unwrap();

    let program = fs::read_to_string(&path).unwrap();
    assert_eq!(program.matches("DEFINE LAZY ").count(), Protocol::ALL.len());
    assert!(program.ends_with("capture_end * 1e-6;\n"));
}

#[test]
fn test_legacy_version_coexists() {
    let mut registry = default_registry();
    let v29 = SchemaVersion::new("v29").unwrap();
    let mut legacy = Protocol::Tcp.v30_fields();
    legacy.truncate(13);
    registry
        .register(
            sniffdef_core::SchemaKey::new(Protocol::Tcp, v29, Encoding::Csv),
            legacy,
        )
        .unwrap();

    let config = GenerationConfig {
        versions: vec!["v29".into()],
        protocols: vec!["tcp".into()],
        ..Default::default()
    };
    let report = generate(&registry, &config.resolve().unwrap()).unwrap();
    let text = report.definitions[0].text();
    assert!(text.contains("FILES \"/srv/nova/ramen/*.*.tcp_v29.*csv\""));
    assert!(text.contains("     zone_server u32)\n"));
}
