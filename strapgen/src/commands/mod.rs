mod generate;

use clap::Parser;
use eyre::Result;
use generate::GenerateCommand;

#[derive(Parser)]
#[command(name = "strapgen")]
#[command(version)]
#[command(about = "Generate TypeScript interfaces from Strapi schemas")]
pub(crate) struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.generate.run()
    }
}
