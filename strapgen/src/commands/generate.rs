use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use strapgen_codegen::GeneratorConfig;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Root of the Strapi project (defaults to the current directory)
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = GeneratorConfig::new(&self.root);
        let report = ops::generate(&config)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
