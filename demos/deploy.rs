use cmdform::{definition, Parameter};
use std::env;

fn main() {
    let deploy =
        definition!(r"deploy $service $extra* --region[r]=us-east --replicas[n]=1 --force[f]?")
            .about("Deploy a service.")
            .describe("replicas", "How many copies to run.");
    let mut resolved: Vec<Parameter> = Vec::default();
    let mut position = 0;

    // A deliberately small matcher: `--name=value`, `-n=value`, `--flag`, and positionals.
    for token in env::args().skip(1) {
        if let Some(option) = token.strip_prefix("--").or_else(|| token.strip_prefix('-')) {
            let (name, value) = option.split_once('=').unwrap_or((option, "1"));

            match deploy.parameter_named(name) {
                Some(parameter) => resolved.push(parameter.resolve(value)),
                None => {
                    eprintln!("Unknown parameter '{token}' for: {deploy}");

                    for parameter in deploy.parameters() {
                        eprintln!("  {parameter}  {}", parameter.description().unwrap_or_default());
                    }

                    return;
                }
            }
        } else {
            match deploy.argument_at(position) {
                Some(argument) => println!("{} = {token}", argument.name()),
                None => {
                    eprintln!("Unexpected argument '{token}' for: {deploy}");
                    return;
                }
            }

            position += 1;
        }
    }

    for parameter in deploy.parameters() {
        let parameter = resolved
            .iter()
            .find(|r| r.name() == parameter.name())
            .unwrap_or(parameter);

        if parameter.is_flag() {
            println!("--{} = {}", parameter.name(), parameter.is_enabled());
        } else if parameter.name() == "replicas" {
            match parameter.as_ranged_int(1, 10) {
                Ok(replicas) => println!("--replicas = {replicas}"),
                Err(error) => eprintln!("{error}"),
            }
        } else {
            match parameter.as_string() {
                Ok(value) => println!("--{} = {value}", parameter.name()),
                Err(error) => eprintln!("{error}"),
            }
        }
    }
}
