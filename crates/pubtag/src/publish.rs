use std::ffi::OsString;
use std::path::Path;

use clap::Args;
use pubtag_core::PublishSettings;
use pubtag_operations::operations::{PublishOperation, PublishOutput, PublishPlan};
use pubtag_operations::providers::{FileSystemManifestReader, NpmRegistryClient};

use crate::error::Result;

#[derive(Args)]
pub(crate) struct PublishArgs {
    /// npm executable used to query the registry and publish
    #[arg(long, env = "PUBTAG_NPM", default_value = "npm")]
    npm: OsString,

    /// Choose the tag and print the publish command without running it
    #[arg(long)]
    dry_run: bool,

    /// Extra arguments passed to `npm publish` (after `--`)
    #[arg(last = true, value_name = "FLAGS")]
    flags: Vec<String>,
}

pub(crate) fn run(args: PublishArgs, package_dir: &Path) -> Result<()> {
    let settings = PublishSettings::default();
    let manifest_reader = FileSystemManifestReader::new(settings.clone());
    let registry = NpmRegistryClient::with_program(args.npm.clone());
    let operation = PublishOperation::with_settings(manifest_reader, registry, settings);

    let output = match operation.plan(package_dir, &args.flags)? {
        PublishPlan::AlreadyPublished(package) => {
            println!("Starting the release process for {}\n", package.name);
            println!(
                "{} already exists on registry {}",
                package.spec(),
                package.registry_url
            );
            println!("\nNo publish performed");
            return Ok(());
        }
        PublishPlan::Ready(output) => output,
    };

    println!("Starting the release process for {}\n", output.package.name);
    let command = command_line(&args.npm.to_string_lossy(), &output);

    if args.dry_run {
        println!("Dry run - no changes will be made.\n");
        println!("Would run: \"{command}\" for {}", output.package.spec());
        return Ok(());
    }

    println!("Running: \"{command}\" for {}", output.package.spec());
    operation.publish(&output)?;
    println!(
        "\nPublished \"{}\" successfully to {}",
        output.package.spec(),
        output.package.registry_url
    );

    Ok(())
}

fn command_line(program: &str, output: &PublishOutput) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(output.request.args());
    parts.join(" ")
}
