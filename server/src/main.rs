use crafting::api::Command;
use log::{error, info};
use serde::Deserialize;
use server::{Configuration, LocalServerThread};
use std::io::{self, BufRead, Write};

#[derive(Deserialize)]
#[serde(tag = "request", rename_all = "camelCase")]
enum ConsoleRequest {
    Login { player: String },
    Perform { player: String, command: Command },
    Logout { player: String },
}

fn main() {
    env_logger::init();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./server.toml".to_string());
    let config = match Configuration::load(&path) {
        Ok(config) => config,
        Err(error) => {
            error!("Unable to load configuration {}, {:?}", path, error);
            return;
        }
    };
    info!("Database: {}", config.database);
    let mut server = match LocalServerThread::spawn(config) {
        Ok(server) => server,
        Err(error) => {
            error!("Unable to spawn server, {:?}", error);
            return;
        }
    };
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                error!("Unable to read input, {}", error);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let request: ConsoleRequest = match serde_json::from_str(&line) {
            Ok(request) => request,
            Err(error) => {
                error!("Unable to parse request, {}", error);
                continue;
            }
        };
        let response = match request {
            ConsoleRequest::Login { player } => server.login(&player),
            ConsoleRequest::Perform { player, command } => server.perform(&player, command),
            ConsoleRequest::Logout { player } => server.logout(&player).map(|_| vec![]),
        };
        match response {
            Ok(commands) => {
                for command in commands {
                    match serde_json::to_string(&command) {
                        Ok(json) => {
                            let _ = writeln!(stdout, "{}", json);
                        }
                        Err(error) => error!("Unable to write response, {}", error),
                    }
                }
            }
            Err(error) => {
                error!("Server stopped, {:?}", error);
                break;
            }
        }
    }
    server.terminate();
}
