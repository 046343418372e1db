use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn settings_flags_are_persisted_and_used_by_deploy() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "settings",
            "--orchestrator",
            "kubernetes",
            "--namespace",
            "staging",
            "--stack-name",
            "web",
            "--parameter",
            "port=80",
            "--parameter",
            "replicas=2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"));

    let settings = ctx.read_settings();
    assert_eq!(settings["dockerapp_orchestrator"].as_str(), Some("kubernetes"));
    assert_eq!(settings["dockerapp_parameters"].as_str(), Some("port=80\nreplicas=2"));
    assert_eq!(settings["dockerapp_kubeconfig"].as_str(), Some(""));

    ctx.install_tool_output("", "", 0);
    ctx.cli().arg("deploy").assert().success();
    assert_eq!(
        ctx.recorded_args().unwrap(),
        vec![
            "deploy",
            "--orchestrator",
            "kubernetes",
            "--name",
            "web",
            "--namespace",
            "staging",
            "-s",
            "port=80",
            "-s",
            "replicas=2"
        ]
    );
}

#[test]
fn show_prints_stored_settings_as_json() {
    let ctx = TestContext::new();
    ctx.write_settings("dockerapp_stackname = \"web\"\n");

    ctx.cli()
        .args(["settings", "--show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"stack_name\": \"web\""))
        .stdout(predicate::str::contains("\"orchestrator\": null"));
}

#[test]
fn unknown_orchestrator_is_rejected_by_the_parser() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["settings", "--orchestrator", "nomad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown orchestrator"));
    assert!(!ctx.settings_path().exists());
}
