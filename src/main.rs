use clap::Parser;
use color_eyre::eyre::{eyre, Report, Result};
use tracing::info;

use wordle_tui::config::Config;
use wordle_tui::game::{Game, GameStatus};
use wordle_tui::session::Session;
use wordle_tui::wordle::MAX_ATTEMPTS;
use wordle_tui::{logging, tui};

fn report(err: anyhow::Error) -> Report {
    eyre!("{err:#}")
}

/// Print the board once the terminal is back to normal.
fn print_summary(game: &Game) {
    for guess in game.guesses() {
        println!("{guess}");
    }
    match game.status() {
        GameStatus::Won => println!("Solved in {}/{MAX_ATTEMPTS}", game.guesses().len()),
        GameStatus::Lost | GameStatus::Playing => println!("The word was {}", game.target()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let config = Config::parse();
    logging::init(&config.log_file).map_err(report)?;
    info!(?config, "starting");

    let capabilities = config.capabilities().map_err(report)?;
    let session = Session::start(capabilities.source, capabilities.validator, config.scoring)
        .await
        .map_err(report)?;

    tui::initialize_panic_handler();
    let mut terminal = tui::init()?;
    let mut app = tui::App::new(session);
    let app_result = app.run(&mut terminal).await;
    tui::restore()?;
    app_result?;

    print_summary(app.session().game());
    Ok(())
}
