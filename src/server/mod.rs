pub mod network;
pub mod protocol;

use std::io;
use std::net::{TcpListener, TcpStream};

use crate::generators::{Generator, generate};
use crate::navigator::{Look, Navigator};

use protocol::Request;

/// Server settings, already parsed by the binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub width: u16,
    pub height: u16,
    pub generator: Generator,
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 8778,
            width: 15,
            height: 10,
            generator: Generator::RecurBacktrack,
            seed: None,
        }
    }
}

/// Serves labyrinth-walking sessions over TCP, one client at a time.
///
/// Each connection owns its session (grid plus navigator); the server itself
/// keeps only the solve scores for the end-of-run summary.
pub struct Server {
    config: ServerConfig,
    scores: Vec<u32>,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Server {
            config,
            scores: Vec::new(),
        }
    }

    /// Binds the listener and serves connections serially until the process
    /// is stopped.
    pub fn run(&mut self) -> io::Result<()> {
        let address = format!("0.0.0.0:{}", self.config.port);
        let listener = TcpListener::bind(&address)?;
        tracing::info!("[server] listening on {}", address);

        for stream in listener.incoming() {
            let stream = stream?;
            tracing::info!("[server] new connection: {:?}", stream.peer_addr());
            if let Err(e) = self.handle_client(stream) {
                tracing::warn!("[server] connection ended with error: {}", e);
            }
        }
        Ok(())
    }

    /// Runs one client session: wake the agent in a fresh maze, process
    /// moves until victory or until the client sends Done.
    fn handle_client(&mut self, mut stream: TcpStream) -> io::Result<()> {
        let mut session: Option<Navigator> = None;

        loop {
            let message = match network::receive_message(&mut stream) {
                Ok(message) => message,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    tracing::info!("[server] client disconnected");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let reply = match protocol::parse_request(&message) {
                Ok(Request::Awake) => match self.awake() {
                    Ok(mut navigator) => {
                        let look = navigator.look_around();
                        session = Some(navigator);
                        self.look_reply(look)
                    }
                    Err(e) => protocol::error_reply(&e),
                },
                Ok(Request::Move(direction)) => {
                    let mut solved = false;
                    let reply = match session.as_mut() {
                        Some(navigator) => match navigator.walk(direction) {
                            Ok(()) => {
                                let look = navigator.look_around();
                                if let Look::Victory { steps } = look {
                                    self.scores.push(steps);
                                    solved = true;
                                }
                                self.look_reply(look)
                            }
                            Err(e) => protocol::error_reply(&e),
                        },
                        None => {
                            serde_json::json!({ "Error": "no maze in progress, send Awake first" })
                        }
                    };
                    if solved {
                        session = None;
                    }
                    reply
                }
                Ok(Request::Done) => {
                    let reply =
                        protocol::results_reply(self.scores.len(), avg_scores(&self.scores));
                    network::send_message(&mut stream, &reply.to_string())?;
                    tracing::info!(
                        "[server] labyrinth solved {} times with an avg of {} steps",
                        self.scores.len(),
                        avg_scores(&self.scores)
                    );
                    return Ok(());
                }
                Err(e) => serde_json::json!({ "Error": e.to_string() }),
            };

            network::send_message(&mut stream, &reply.to_string())?;
        }
    }

    /// Generates a fresh maze and places the agent at the top-left corner
    /// with the treasure at the bottom-right.
    fn awake(&self) -> Result<Navigator, crate::MazeError> {
        let ServerConfig {
            width,
            height,
            generator,
            seed,
            ..
        } = self.config;
        let grid = generate(generator, width, height, seed)?;
        let start = (0, 0);
        let goal = (width - 1, height - 1);
        Navigator::new(grid, start, goal)
    }

    fn look_reply(&self, look: Look) -> serde_json::Value {
        match look {
            Look::Survey(survey) => protocol::survey_reply(survey),
            Look::Victory { steps } => protocol::victory_reply(steps),
        }
    }
}

/// Average steps over the completed sessions, zero when none finished.
pub fn avg_scores(scores: &[u32]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let total: u64 = scores.iter().map(|&s| s as u64).sum();
    (total / scores.len() as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avg_scores() {
        assert_eq!(avg_scores(&[]), 0);
        assert_eq!(avg_scores(&[10]), 10);
        assert_eq!(avg_scores(&[10, 20, 31]), 20);
    }

    #[test]
    fn test_awake_builds_a_session() {
        let server = Server::new(ServerConfig {
            width: 4,
            height: 3,
            seed: Some(9),
            ..ServerConfig::default()
        });
        let navigator = server.awake().unwrap();
        assert_eq!(navigator.position(), (0, 0));
        assert_eq!(navigator.goal(), (3, 2));
        assert_eq!(navigator.steps_taken(), 0);
    }
}
