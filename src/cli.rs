use clap::Parser;

/// Command-line surface.
///
/// The asset location and marker are fixed, so there are no functional flags;
/// clap still provides `--help`/`--version` and rejects stray arguments.
#[derive(Parser, Debug)]
#[command(name = "cfkey")]
#[command(version)]
#[command(about = "Extract the CurseForge core API key from the Linux AppImage", long_about = None)]
#[command(after_help = "The key is printed to stdout as `API Key: <key>`.\n\
  Status lines go to stderr; set RUST_LOG=warn to silence them.")]
pub struct Cli {}
