//! Stack assembly for the sample deployment.
//!
//! A fixed, linear sequence: stack tags, one compute function, one hourly
//! trigger rule targeting it, the optional table from the config's
//! extension point, and one named output exposing the function's generated
//! identifier for manual invocation.

use cirrus_core::{
    ProcessEnv, Stack, StackProps, add_schedule, create_function, create_table, hourly,
};

use crate::config::AppConfig;

/// Name of the output exposing the deployed function's identifier.
pub const FUNCTION_NAME_OUTPUT: &str = "LambdaFunctionName";

/// Assemble the deployment stack described by `config`, resolving function
/// environment variables against the given snapshot.
pub fn assemble(config: &AppConfig, env: &ProcessEnv) -> Stack {
    let mut stack = Stack::new(config.stack_name(), StackProps { tags: config.tags() });

    let function = stack.add_function(create_function(
        &config.function_name(),
        &config.code_location(),
        config.function_options(),
        env,
    ));

    stack.add_rule(add_schedule(
        "HourlyRule",
        &function,
        Some(hourly(1)),
        "Trigger Lambda every hour",
    ));

    if let Some(table) = &config.table {
        stack.add_table(create_table(&table.name, AppConfig::table_options(table)));
    }

    stack.add_output(
        FUNCTION_NAME_OUTPUT,
        &function.logical_id,
        "Lambda function name for manual testing",
    );

    stack
}
