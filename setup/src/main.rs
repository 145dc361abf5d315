//! # Setup CLI
//!
//! Drives the setup start screen headlessly against an in-memory router.
//!
//! ## Usage
//!
//! ```bash
//! setup                                   # print the screen
//! setup createAccount                     # press a button
//! setup --json '{"action":"connectLedger"}'
//! ```
//!
//! Prints the router location after the press. Exits non-zero when the press
//! fails.

use clap::Parser;
use lib_router::MemoryRouter;
use setup::{SetupAction, StartPage};

#[derive(Parser, Debug)]
#[command(name = "setup", about = "Drive the wallet setup start screen")]
struct Cli {
    /// Button to press (createAccount, importAccount, connectLedger)
    action: Option<SetupAction>,

    /// Host message to dispatch, e.g. '{"action":"createAccount"}'
    #[arg(long, conflicts_with = "action")]
    json: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = lib_core::init_config()?;
    setup::debug::init_logger(config)?;

    let router = MemoryRouter::from_config(config)?;
    let page = StartPage::new(router);

    let output = run(cli, &page)?;
    println!("{output}");
    Ok(())
}

/// Execute one invocation. Returns the text to print: the screen, or the
/// router location after a press.
fn run(cli: Cli, page: &StartPage<MemoryRouter>) -> anyhow::Result<String> {
    let result = match (cli.action, cli.json) {
        (None, None) => return Ok(render_screen(page)),
        (_, Some(message)) => page.dispatch_json(&message),
        (Some(action), None) => page.press(action),
    };

    let to = result.map_err(|err| {
        let summary = format!("{} ({})", err.user_message(), err.code());
        anyhow::Error::new(err).context(summary)
    })?;
    tracing::debug!(to = %to, "Press handled");

    Ok(page.navigator().location())
}

fn render_screen(page: &StartPage<MemoryRouter>) -> String {
    let mut out = format!("{}\n\n{}\n\n", page.title(), page.body());
    for button in page.buttons() {
        out.push_str(&format!("  [{}]  {}\n", button.action, button.label));
    }
    out.trim_end().to_string()
}
