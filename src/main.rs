use anyhow::Result;
use cachebust::Config;
use cachebust::pipeline;

fn main() -> Result<()> {
    let config = Config::from_cli()?;
    let summary = pipeline::run(&config)?;
    if !config.quiet {
        println!("{summary}");
    }
    Ok(())
}
