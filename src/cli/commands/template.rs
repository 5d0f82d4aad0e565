//! Template command - create or show the workspace template.

use anyhow::Result;

use copilot_session_log::config::{log_root, Config};
use copilot_session_log::session::TemplateStore;

#[derive(clap::Args)]
pub struct Args {
    /// Print the template contents instead of its path
    #[arg(long)]
    pub print: bool,
}

pub fn run(args: Args, config: &Config) -> Result<()> {
    let workspace_root = config.resolve_workspace_root(None)?;
    let store = TemplateStore::new(log_root(&workspace_root));
    let text = store.load()?;

    if args.print {
        print!("{text}");
    } else {
        println!("{}", store.template_path().display());
    }

    Ok(())
}
