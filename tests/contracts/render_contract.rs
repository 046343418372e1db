use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn render_shows_stderr_before_stdout() {
    let ctx = TestContext::new();
    ctx.write_settings("dockerapp_applocation = \"hello.dockerapp\"\n");
    ctx.install_tool_output("version: \"3.6\"", "deprecated field", 0);

    ctx.cli().arg("render").assert().success().stdout("deprecated field\nversion: \"3.6\"\n");

    assert_eq!(ctx.recorded_args().unwrap(), vec!["render", "hello.dockerapp"]);
}

#[test]
fn render_flags_pass_parameters_and_output() {
    let ctx = TestContext::new();
    ctx.write_settings("dockerapp_parameters = \"port=80\\n\\nreplicas=2\"\n");
    ctx.install_tool_output("", "", 0);

    ctx.cli().args(["render", "--with-parameters", "-o", "out.yml"]).assert().success();

    assert_eq!(
        ctx.recorded_args().unwrap(),
        vec!["render", "-s", "port=80", "-s", "replicas=2", "-o", "out.yml"]
    );
}

#[test]
fn failing_validate_propagates_exit_code() {
    let ctx = TestContext::new();
    ctx.install_tool_output("", "invalid compose file", 1);

    ctx.cli()
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("invalid compose file"));
    assert_eq!(ctx.recorded_args().unwrap(), vec!["validate"]);
}

#[test]
fn inspect_runs_against_selected_application() {
    let ctx = TestContext::new();
    ctx.write_settings("dockerapp_applocation = \"/apps/web.dockerapp\"\n");
    ctx.install_tool_output("web 0.1.0", "", 0);

    ctx.cli().arg("inspect").assert().success().stdout("web 0.1.0\n");
    assert_eq!(ctx.recorded_args().unwrap(), vec!["inspect", "/apps/web.dockerapp"]);
}
