use crafting::api::{ClientCommand, Command};
use crafting::Game;
use datamap::Storage;
use log::{debug, error, info};
use prometheus::Registry;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Instant;

pub use configuration::*;
pub use metrics::*;

mod configuration;
mod metrics;

pub enum PlayerRequest {
    Login {
        player: String,
        response: Sender<Vec<ClientCommand>>,
    },
    Perform {
        player: String,
        command: Command,
        response: Sender<Vec<ClientCommand>>,
    },
    Logout {
        player: String,
    },
    Terminate,
}

#[derive(Debug)]
pub enum ServerError {
    Metrics(prometheus::Error),
    Storage(String),
    Stopped,
}

impl From<prometheus::Error> for ServerError {
    fn from(error: prometheus::Error) -> Self {
        Self::Metrics(error)
    }
}

pub struct LocalServerThread {
    pub metrics: ServerMetrics,
    requests: Sender<PlayerRequest>,
    handle: Option<JoinHandle<()>>,
}

impl LocalServerThread {
    pub fn spawn(config: Configuration) -> Result<Self, ServerError> {
        let registry = Registry::new();
        Self::spawn_with_registry(config, &registry)
    }

    pub fn spawn_with_registry(
        config: Configuration,
        registry: &Registry,
    ) -> Result<Self, ServerError> {
        let metrics = ServerMetrics::new(registry)?;
        let (requests, receiver) = channel();
        let (notify_started, started) = channel();
        let thread_metrics = metrics.clone();
        let handle = thread::spawn(move || {
            info!("Start game server thread");
            let mut game = match load_game(&config) {
                Ok(game) => game,
                Err(error) => {
                    error!("Unable to start game, {}", error);
                    let _ = notify_started.send(Err(error));
                    return;
                }
            };
            let _ = notify_started.send(Ok(()));
            run(&mut game, &config, receiver, &thread_metrics);
            flush(&mut game, &thread_metrics);
            info!("Stop game server thread");
        });
        match started.recv() {
            Ok(Ok(())) => Ok(Self {
                metrics,
                requests,
                handle: Some(handle),
            }),
            Ok(Err(error)) => Err(ServerError::Storage(error)),
            Err(_) => Err(ServerError::Stopped),
        }
    }

    pub fn login(&self, player: &str) -> Result<Vec<ClientCommand>, ServerError> {
        let (response, receiver) = channel();
        self.send(PlayerRequest::Login {
            player: player.to_string(),
            response,
        })?;
        receiver.recv().map_err(|_| ServerError::Stopped)
    }

    pub fn perform(
        &self,
        player: &str,
        command: Command,
    ) -> Result<Vec<ClientCommand>, ServerError> {
        let (response, receiver) = channel();
        self.send(PlayerRequest::Perform {
            player: player.to_string(),
            command,
            response,
        })?;
        receiver.recv().map_err(|_| ServerError::Stopped)
    }

    pub fn logout(&self, player: &str) -> Result<(), ServerError> {
        self.send(PlayerRequest::Logout {
            player: player.to_string(),
        })
    }

    pub fn send(&self, request: PlayerRequest) -> Result<(), ServerError> {
        self.requests.send(request).map_err(|_| ServerError::Stopped)
    }

    /// Stops loop and waits for final save.
    pub fn terminate(&mut self) {
        let _ = self.requests.send(PlayerRequest::Terminate);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Game server thread panicked");
            }
        }
    }
}

impl Drop for LocalServerThread {
    fn drop(&mut self) {
        self.terminate();
    }
}

fn load_game(config: &Configuration) -> Result<Game, String> {
    let storage = Storage::open(&config.database).map_err(|error| error.to_string())?;
    let mut game = Game::new(storage, config.game.clone());
    game.load_game_full().map_err(|error| format!("{:?}", error))?;
    Ok(game)
}

fn run(
    game: &mut Game,
    config: &Configuration,
    receiver: Receiver<PlayerRequest>,
    metrics: &ServerMetrics,
) {
    let tick_period = config.tick_period();
    let persist_period = config.persist_period();
    let mut tick = Instant::now();
    let mut persisted = Instant::now();
    loop {
        match receiver.recv_timeout(tick_period.saturating_sub(tick.elapsed())) {
            Ok(PlayerRequest::Terminate) => break,
            Ok(request) => handle_request(game, request, metrics),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        if tick.elapsed() >= tick_period {
            game.update(tick.elapsed().as_secs_f32());
            tick = Instant::now();
        }
        if persisted.elapsed() >= persist_period {
            flush(game, metrics);
            persisted = Instant::now();
        }
    }
}

fn handle_request(game: &mut Game, request: PlayerRequest, metrics: &ServerMetrics) {
    match request {
        PlayerRequest::Login { player, response } => {
            let commands = match game.login(&player) {
                Ok(_) => game.perform_command(&player, Command::GetTiles),
                Err(error) => {
                    error!("Unable to login {}, {:?}", player, error);
                    vec![]
                }
            };
            let _ = response.send(commands);
        }
        PlayerRequest::Perform {
            player,
            command,
            response,
        } => {
            let commands = match game.try_perform_command(&player, command) {
                Ok(commands) => {
                    metrics.commands_performed.inc();
                    commands
                }
                Err(error) => {
                    debug!("Ignore command of {}, {:?}", player, error);
                    metrics.commands_ignored.inc();
                    vec![]
                }
            };
            let _ = response.send(commands);
        }
        PlayerRequest::Logout { player } => {
            if let Err(error) = game.logout(&player) {
                debug!("Unable to logout {}, {:?}", player, error);
            }
        }
        PlayerRequest::Terminate => {}
    }
}

fn flush(game: &mut Game, metrics: &ServerMetrics) {
    match game.save_game() {
        Ok(changeset) => {
            if !changeset.is_empty() {
                metrics.flushes.inc();
            }
        }
        Err(error) => {
            error!("Unable to save game, {:?}", error);
            metrics.flush_failures.inc();
        }
    }
}
