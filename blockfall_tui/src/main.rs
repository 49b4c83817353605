mod application;
mod game_renderer;
mod scoreboard;

use std::io::{self, Write};

use clap::Parser;

/// The game takes no flags or environment variables; clap only fronts
/// `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();

    // Initialize application.
    let stdout = io::BufWriter::new(io::stdout());
    let mut app = application::Application::new(stdout);

    // Catch panics and write error to separate file, so it isn't lost due to app's terminal shenanigans.
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_file_name = format!(
            "blockfall_crash-msg_{}.txt",
            chrono::Utc::now().format("%Y-%m-%d_%Hh%Mm%Ss")
        );
        if let Ok(mut file) = std::fs::File::create(crash_file_name) {
            let _ = file.write(panic_info.to_string().as_bytes());
        }
    }));

    // Run main application.
    let exit_msg = app.run()?;
    println!("{exit_msg}");

    Ok(())
}
