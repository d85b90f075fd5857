/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, error, info, warn};
use std::io::BufRead;
use std::sync::Arc;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorCore;

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Go(i32),
    Status,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("'{0}' is not a valid floor number")]
    InvalidFloor(String),
    #[error("'go' needs a floor number, e.g. 'go 4'")]
    MissingFloor,
    #[error("unknown command '{0}'")]
    Unknown(String),
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    ///
    /// Accepted forms: `<floor>`, `go <floor>`, `status`, `quit`/`exit`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => Ok(None),
            [word] => match word.to_ascii_lowercase().as_str() {
                "quit" | "exit" => Ok(Some(Command::Quit)),
                "status" => Ok(Some(Command::Status)),
                "go" => Err(CommandError::MissingFloor),
                _ => match word.parse::<i32>() {
                    Ok(floor) => Ok(Some(Command::Go(floor))),
                    Err(_) if looks_numeric(word) => {
                        Err(CommandError::InvalidFloor(word.to_string()))
                    }
                    Err(_) => Err(CommandError::Unknown(line.trim().to_string())),
                },
            },
            [keyword, floor] if keyword.eq_ignore_ascii_case("go") => floor
                .parse::<i32>()
                .map(|f| Some(Command::Go(f)))
                .map_err(|_| CommandError::InvalidFloor(floor.to_string())),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

/// An optionally signed run of digits, even if it does not fit in an `i32`.
fn looks_numeric(word: &str) -> bool {
    let digits = word.strip_prefix(['-', '+']).unwrap_or(word);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Feeds floor requests from a line-based reader into the elevator core.
 *
 * Reading blocks outside the core's lock; only `try_add_request` and `state`
 * are ever called on the core. On `quit` or end of input the terminate
 * signal is sent and the sender dropped, which stops the stepper.
 */
pub struct CommandSource<R: BufRead> {
    core: Arc<ElevatorCore>,
    reader: R,
    terminate_tx: cbc::Sender<()>,
}

impl<R: BufRead> CommandSource<R> {
    pub fn new(core: Arc<ElevatorCore>, reader: R, terminate_tx: cbc::Sender<()>) -> Self {
        CommandSource {
            core,
            reader,
            terminate_tx,
        }
    }

    pub fn run(self) {
        let CommandSource {
            core,
            reader,
            terminate_tx,
        } = self;

        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    error!("Error reading command input: {}", e);
                    break;
                }
            };

            match Command::parse(&line) {
                Ok(Some(Command::Go(floor))) => match core.try_add_request(floor) {
                    Ok(()) => info!("Request for floor {} accepted", floor),
                    Err(rejection) => warn!("Request rejected: {}", rejection),
                },
                Ok(Some(Command::Status)) => info!("{}", core.state()),
                Ok(Some(Command::Quit)) => break,
                Ok(None) => {}
                Err(e) => warn!("{}", e),
            }
        }

        debug!("Command input closed");
        let _ = terminate_tx.send(());
    }
}
