use crate::prelude::{println, *};
use bootstrapper_core::required::required_paths;
use bootstrapper_core::types::validate_package_name;

#[derive(Debug, clap::Args, Clone)]
pub struct RequiredArgs {
    /// Python package name
    #[arg(long)]
    pub package: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: RequiredArgs, _global: crate::Global) -> Result<()> {
    validate_package_name(&args.package)?;
    let paths: Vec<String> = required_paths(&args.package).into_iter().collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        for path in paths {
            println!("{}", path);
        }
    }

    Ok(())
}
