//! Policy settings loaded from a TOML file drive the installed hook.

#[path = "common/testhost/mod.rs"]
mod testhost;

use gatekeeper::{GatekeeperConfig, GatekeeperError, GatekeeperService};
use std::io::Write;
use tempfile::NamedTempFile;
use testhost::statements::*;
use testhost::{TestHost, TestSession, ALICE, POSTGRES};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn activate_from(contents: &str) -> (TestHost, GatekeeperService) {
    let config = GatekeeperConfig::from_toml_str(contents).unwrap();
    let host = TestHost::new();
    let service = GatekeeperService::new();
    assert!(service.activate(&host.slot, config.policy));
    (host, service)
}

#[test]
fn test_empty_config_gives_stock_rules() {
    let (host, _service) = activate_from("");
    let session = TestSession::plain(ALICE);

    host.run(&session, &copy_from_file("/tmp/in.csv")).unwrap();
    host.run(&session, &create_extension("file_fdw")).unwrap();
    assert!(host.run(&session, &copy_to_program("id")).is_err());
}

#[test]
fn test_hardened_config() {
    let (host, _service) = activate_from(
        r#"
[policy]
strict = true
denied_extensions = ["file_fdw", "adminpack"]
"#,
    );
    let session = TestSession::superuser(POSTGRES);

    assert_eq!(
        host.run(&session, &create_extension("adminpack")),
        Err(GatekeeperError::PolicyViolation("adminpack extension not allowed".to_string()))
    );
    assert!(host.run(&session, &copy_from_file("/tmp/in.csv")).is_err());
    assert!(host.run(&session, &create_superuser("eve")).is_err());
    host.run(&session, &vacuum()).unwrap();
}

#[test]
fn test_disabled_config() {
    let (host, _service) = activate_from("[policy]\nenabled = false\n");
    host.run(&TestSession::plain(ALICE).running_as(POSTGRES), &copy_to_program("id")).unwrap();
    assert_eq!(host.utility.count(), 1);
}

#[test]
fn test_config_file_round_trip_into_service() {
    let file = write_config(
        r#"
[policy]
protect_superuser_roles = true

[logging]
level = "debug"
format = "json"
"#,
    );
    let config = GatekeeperConfig::from_file(file.path()).unwrap();
    assert!(config.policy.protect_superuser_roles);
    assert_eq!(config.logging.format, "json");

    let host = TestHost::new();
    let service = GatekeeperService::new();
    service.activate(&host.slot, config.policy);
    assert!(host
        .run(&TestSession::plain(ALICE).running_as(POSTGRES), &alter_role_login("postgres"))
        .is_err());
}

#[test]
fn test_invalid_config_rejected() {
    let file = write_config("[logging]\nformat = \"xml\"\n");
    assert!(GatekeeperConfig::from_file(file.path()).is_err());
}
