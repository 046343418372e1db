use crate::harness::TestContext;
use predicates::prelude::*;
use std::time::{Duration, Instant};

#[test]
fn deploy_prints_banner_then_streams_output() {
    let ctx = TestContext::new();
    ctx.write_settings(
        "dockerapp_applocation = \"hello.dockerapp\"\ndockerapp_stackname = \"hello\"\n",
    );
    ctx.install_tool_output("Creating network hello_default", "Waiting for services", 0);

    ctx.cli()
        .arg("deploy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deploy command: "))
        .stdout(predicate::str::contains("docker-app deploy hello.dockerapp --name hello"))
        .stdout(predicate::str::contains("Creating network hello_default"))
        .stdout(predicate::str::contains("Waiting for services"));

    assert_eq!(
        ctx.recorded_args().unwrap(),
        vec!["deploy", "hello.dockerapp", "--name", "hello"]
    );
}

#[test]
fn deploy_resolves_docker_app_through_path() {
    let ctx = TestContext::new();
    ctx.write_settings("dockerapp_orchestrator = \"swarm\"\n");
    ctx.install_tool_output("Deploying", "", 0);

    ctx.cli_with_tool_on_path()
        .arg("deploy")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Deploy command: docker-app deploy --orchestrator swarm\n"))
        .stdout(predicate::str::contains("Deploying"));
}

#[test]
fn deploy_reports_nonzero_exit_code() {
    let ctx = TestContext::new();
    ctx.install_tool_output("", "stack not found", 3);

    ctx.cli()
        .arg("deploy")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("stack not found"))
        .stdout(predicate::str::contains("docker-app exited with code 3"));
}

#[test]
fn missing_executable_is_reported_as_launch_failure() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("deploy")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Cannot run docker-app: "));
}

#[test]
fn timeout_cancels_a_hanging_deploy() {
    let ctx = TestContext::new();
    ctx.install_tool("exec sleep 30");

    let started = Instant::now();
    ctx.cli().args(["deploy", "--timeout", "1"]).assert().code(130);
    assert!(started.elapsed() < Duration::from_secs(20));
}
