//! End-to-end assembly tests.
//!
//! Assemble the deployment stack the way the binary does and inspect the
//! synthesized descriptor graph through cirrus-assertions.

use cirrus_assertions::Template;
use cirrus_cli::app::{self, FUNCTION_NAME_OUTPUT};
use cirrus_cli::config::AppConfig;
use cirrus_core::ProcessEnv;
use serde_json::json;

#[test]
fn default_assembly_matches_sample_deployment() {
    let stack = app::assemble(&AppConfig::default(), &ProcessEnv::empty());
    let template = Template::from_stack(&stack).unwrap();

    template.resource_count_is("function", 1).unwrap();
    template.resource_count_is("rule", 1).unwrap();
    template.resource_count_is("table", 0).unwrap();

    template
        .has_resource_properties(
            "function",
            "HelloWorld",
            &json!({
                "logical_id": "HelloWorldFunction",
                "code_location": "lambdas/sample-lambda",
                "memory_mb": 128,
                "timeout_seconds": 120,
                "environment": {},
            }),
        )
        .unwrap();

    template
        .has_resource_properties(
            "rule",
            "HourlyRule",
            &json!({
                "schedule": { "type": "rate", "interval": 1, "unit": "hours" },
                "schedule_expression": "rate(1 hour)",
                "description": "Trigger Lambda every hour",
                "target": "HelloWorldFunction",
            }),
        )
        .unwrap();

    template
        .has_output(FUNCTION_NAME_OUTPUT, "HelloWorldFunction")
        .unwrap();
}

#[test]
fn stack_tags_reach_every_resource() {
    let stack = app::assemble(&AppConfig::default(), &ProcessEnv::empty());
    let template = Template::from_stack(&stack).unwrap();

    let expected_tags = json!({
        "tags": {
            "Project": "SampleLambdaDeployment",
            "Environment": "Dev",
        }
    });
    template
        .has_resource_properties("function", "HelloWorld", &expected_tags)
        .unwrap();
    template
        .has_resource_properties("rule", "HourlyRule", &expected_tags)
        .unwrap();
}

#[test]
fn config_overrides_flow_through_assembly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cirrus.toml");
    std::fs::write(
        &path,
        r#"
[stack]
name = "reporting"

[tags]
Team = "Data"

[function]
name = "Reporter"
code = "lambdas/reporter"
memory_mb = 512
timeout_seconds = 30
env_var_names = ["REPORT_BUCKET", "REPORT_PREFIX"]

[table]
name = "Reports"
partition_key = "report_id"
"#,
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    let env = ProcessEnv::from_vars([("REPORT_BUCKET", "reports-dev")]);
    let stack = app::assemble(&config, &env);
    let template = Template::from_stack(&stack).unwrap();

    template
        .has_resource_properties(
            "function",
            "Reporter",
            &json!({
                "memory_mb": 512,
                "timeout_seconds": 30,
                "environment": {
                    "REPORT_BUCKET": "reports-dev",
                    // Unset variables resolve to empty strings.
                    "REPORT_PREFIX": "",
                },
                "tags": { "Team": "Data" },
            }),
        )
        .unwrap();

    template
        .has_resource_properties(
            "table",
            "Reports",
            &json!({
                "partition_key": { "name": "report_id", "attribute_type": "string" },
                "billing_mode": "pay_per_request",
                "retention": "retain",
            }),
        )
        .unwrap();

    template.has_output(FUNCTION_NAME_OUTPUT, "ReporterFunction").unwrap();
}

#[test]
fn synthesized_json_is_engine_loadable() {
    let stack = app::assemble(&AppConfig::default(), &ProcessEnv::empty());
    let json = stack.to_json().unwrap();

    // The wire form is what the external engine diffs; make sure a template
    // loaded back from it answers the same queries.
    let template = Template::from_json(&json).unwrap();
    template.has_resource("function", "HelloWorld").unwrap();
    template.has_resource("rule", "HourlyRule").unwrap();
}
