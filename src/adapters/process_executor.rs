use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::domain::{AppError, CancellationToken, CommandInvocation, CommandResult, OutputStream};
use crate::ports::ProcessExecutor;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
/// How long to keep reading after the child exits while its pipes are still held open.
const DRAIN_GRACE: Duration = Duration::from_millis(500);

/// Runs the external tool through `std::process`, draining stdout and stderr concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdProcessExecutor;

impl StdProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

/// A chunk read from one pipe, terminator included.
struct Chunk {
    stream: OutputStream,
    text: String,
}

fn spawn_reader<R: Read + Send + 'static>(
    pipe: Option<R>,
    stream: OutputStream,
    tx: Sender<Chunk>,
) -> Option<thread::JoinHandle<()>> {
    let pipe = pipe?;
    Some(thread::spawn(move || {
        let mut reader = BufReader::new(pipe);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let text = String::from_utf8_lossy(&buf).into_owned();
                    if tx.send(Chunk { stream, text }).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!("Failed reading child {:?}: {}", stream, err);
                    break;
                }
            }
        }
    }))
}

fn strip_terminator(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

fn terminate(child: &mut Child, invocation: &CommandInvocation) -> AppError {
    debug!("Cancelling '{}' (pid {})", invocation.display(), child.id());
    if let Err(err) = child.kill() {
        warn!("Failed to kill child process: {}", err);
    }
    let _ = child.wait();
    AppError::Cancelled
}

fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

impl ProcessExecutor for StdProcessExecutor {
    fn execute(
        &self,
        invocation: &CommandInvocation,
        on_line: &mut dyn FnMut(OutputStream, &str),
        cancel: &CancellationToken,
    ) -> Result<CommandResult, AppError> {
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        let mut command = Command::new(invocation.executable());
        command
            .args(invocation.arguments())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = invocation.working_directory() {
            command.current_dir(dir);
        }

        debug!("Launching '{}'", invocation.display());
        let mut child = command.spawn().map_err(|e| AppError::Launch {
            executable: invocation.executable().to_string(),
            details: e.to_string(),
        })?;

        let (tx, rx) = mpsc::channel();
        let readers = [
            spawn_reader(child.stdout.take(), OutputStream::Stdout, tx.clone()),
            spawn_reader(child.stderr.take(), OutputStream::Stderr, tx),
        ];

        let mut result = CommandResult::default();
        let mut exited: Option<(ExitStatus, Instant)> = None;
        let mut drained = false;

        // Both readers own a sender; the channel disconnects once both pipes hit EOF.
        // A background grandchild can keep the pipes open past the child's exit, so
        // reading stops after DRAIN_GRACE once the child itself is gone.
        loop {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(chunk) => {
                    on_line(chunk.stream, strip_terminator(&chunk.text));
                    match chunk.stream {
                        OutputStream::Stdout => result.stdout.push_str(&chunk.text),
                        OutputStream::Stderr => result.stderr.push_str(&chunk.text),
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    drained = true;
                    break;
                }
            }
            if cancel.is_cancelled() {
                return Err(terminate(&mut child, invocation));
            }
            match exited {
                None => {
                    if let Some(status) = child.try_wait()? {
                        exited = Some((status, Instant::now()));
                    }
                }
                Some((_, at)) if at.elapsed() >= DRAIN_GRACE => {
                    debug!("'{}' exited but its output is still open", invocation.display());
                    break;
                }
                Some(_) => {}
            }
        }

        if drained {
            for reader in readers.into_iter().flatten() {
                let _ = reader.join();
            }
        }

        let status = match exited {
            Some((status, _)) => status,
            None => loop {
                if let Some(status) = child.try_wait()? {
                    break status;
                }
                if cancel.is_cancelled() {
                    return Err(terminate(&mut child, invocation));
                }
                thread::sleep(POLL_INTERVAL);
            },
        };

        result.exit_code = exit_code(status);
        debug!("'{}' exited with code {}", invocation.display(), result.exit_code);
        Ok(result)
    }
}
