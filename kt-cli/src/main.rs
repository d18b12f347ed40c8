mod resources;

use std::path::PathBuf;

use clap::Parser;
use kt_core::prelude::*;
use kt_core::{
    k8s,
    kubeconfig,
    logging,
};

#[derive(Parser)]
#[command(
    name = "kubectl-terminate",
    about = "removes the finalizers and deletes the given resources",
    version
)]
struct TerminateCmd {
    #[arg(
        required = true,
        value_name = "TYPE NAME | TYPE/NAME",
        long_help = "resources to terminate, either as a single TYPE followed by one or more NAMEs, \
                     or as one or more TYPE/NAME pairs"
    )]
    resources: Vec<String>,

    #[arg(long, long_help = "path to the kubeconfig file")]
    kubeconfig: Option<PathBuf>,

    #[arg(short, long, default_value = "", long_help = "the namespace scope for this CLI request")]
    namespace: String,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

async fn run(args: &TerminateCmd) -> EmptyResult {
    let resources = resources::expand(&args.resources, &args.namespace)?;
    let path = kubeconfig::locate(args.kubeconfig.as_deref())?;
    let client = kubeconfig::new_client(&path).await?;

    k8s::terminate(&resources, client).await
}

#[tokio::main]
async fn main() {
    let args = TerminateCmd::parse();
    logging::setup_for_cli(&args.verbosity);

    // errors go to stdout, not stderr
    if let Err(err) = run(&args).await {
        println!("{err}");
        std::process::exit(1);
    }
}
