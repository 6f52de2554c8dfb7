use super::SessionOptions;
use anyhow::Result;
use colored::Colorize;
use gitsim_server::SimServer;

pub async fn run(options: &SessionOptions, port: u16) -> Result<()> {
    let settings = options.load_settings()?;
    let server = match options.load_seed()? {
        Some(seed) => SimServer::new(settings, options.deterministic).with_default_seed(seed)?,
        None => SimServer::new(settings, options.deterministic),
    };

    println!("{}", "Starting gitsim server...".bold().cyan());
    if let Some(seed) = &options.seed {
        println!("   {}: {:?}", "Seed".bold(), seed);
    }
    println!(
        "   {}: {}",
        "API Server".bold(),
        format!("http://localhost:{}", port).green()
    );
    println!();
    println!("{}", "Press Ctrl+C to stop".dimmed());
    println!();

    let addr = format!("0.0.0.0:{}", port).parse()?;
    server.serve(addr).await?;

    Ok(())
}
