mod effects;
mod logging;
mod settings;
mod shell;

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use catalog_core::{update, AppState, Msg};
use catalog_logging::catalog_info;

use crate::effects::EffectRunner;
use crate::logging::LogDestination;
use crate::settings::Settings;

fn main() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let settings = Settings::load_or_default();
    catalog_info!("starting catalog browser for {}", settings.source_url);

    let mut state = AppState::with_options(settings.page_size, settings.excluded_titles.clone());
    let runner = EffectRunner::new(&settings);

    let (state_after_fetch, fetch_effects) = update(
        state,
        Msg::FetchRequested {
            url: settings.source_url.clone(),
        },
    );
    state = state_after_fetch;
    runner.run(fetch_effects);

    print!("{}", shell::help());
    let input_rx = spawn_input_thread();

    loop {
        let mut msgs = runner.poll();

        loop {
            match input_rx.try_recv() {
                Ok(line) => match shell::parse_command(&line) {
                    Some(shell::Command::Quit) => return Ok(()),
                    Some(shell::Command::Help) => print!("{}", shell::help()),
                    Some(shell::Command::Msg(msg)) => msgs.push(msg),
                    None => print!("{}", shell::help()),
                },
                Err(mpsc::TryRecvError::Empty) => break,
                // stdin closed; nothing more can happen interactively.
                Err(mpsc::TryRecvError::Disconnected) => return Ok(()),
            }
        }

        for msg in msgs {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.run(effects);
        }

        if state.consume_dirty() {
            print!("{}", shell::render(&state.view()));
            print!("> ");
            io::stdout().flush().ok();
        }

        thread::sleep(Duration::from_millis(20));
    }
}

fn spawn_input_thread() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        return;
                    }
                }
                Err(_) => return,
            }
        }
    });
    rx
}
