//! `mcgradle resolve` - print a template resolved against the project.

use anyhow::{Context, Result};
use clap::Args;

use super::common::{ProjectOptions, ProjectSession};
use crate::templating::FormatArg;

/// Resolve a template against the project's replacements.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    /// Template with `@NAME@` tokens and optional `%s`-style directives
    template: String,

    /// Positional format arguments; integers and `true`/`false` are typed
    args: Vec<String>,
}

impl ResolveCommand {
    pub fn execute(self, options: &ProjectOptions) -> Result<()> {
        let session = ProjectSession::open(options)?;
        let args: Vec<FormatArg> = self.args.iter().map(|arg| FormatArg::infer(arg)).collect();

        let resolved = session
            .registry
            .resolve(session.context, &self.template, &args)
            .with_context(|| format!("Failed to resolve '{}'", self.template))?;

        println!("{resolved}");
        Ok(())
    }
}
