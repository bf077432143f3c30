//! Subprocess launching with concurrent, line-oriented output draining

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::adapters::EnvPathAdapter;
use crate::error::{TrimError, TrimResult};
use crate::ports::ProcessLauncher;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Which of the child's streams a line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSource {
    Stdout,
    Stderr,
}

/// One line of child output, without its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub source: OutputSource,
    pub text: String,
}

/// Merged feed of both streams.
///
/// Lines from one stream keep the order the child wrote them; there is no
/// ordering between the two streams. The feed ends once both streams close.
#[derive(Debug)]
pub struct OutputLines {
    receiver: mpsc::UnboundedReceiver<OutputLine>,
}

impl OutputLines {
    pub async fn next(&mut self) -> Option<OutputLine> {
        self.receiver.recv().await
    }
}

/// Everything a finished process produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapturedOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A spawned child whose output is already being drained.
///
/// Dropping it before [`RunningProcess::wait`] returns kills the child.
#[derive(Debug)]
pub struct RunningProcess {
    tool: String,
    child: Child,
    lines: Option<OutputLines>,
    readers: Vec<JoinHandle<()>>,
}

impl RunningProcess {
    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Hand out the line feed. Only the first call returns it.
    pub fn take_lines(&mut self) -> Option<OutputLines> {
        self.lines.take()
    }

    /// Wait for the child to exit and for both readers to reach end of
    /// stream. Does not depend on anybody consuming the line feed.
    pub async fn wait(&mut self) -> TrimResult<i32> {
        let status = self
            .child
            .wait()
            .await
            .map_err(|source| TrimError::LaunchFailure {
                tool: self.tool.clone(),
                source,
            })?;

        for reader in self.readers.drain(..) {
            if let Err(e) = reader.await {
                warn!(tool = %self.tool, error = %e, "output reader task ended abnormally");
            }
        }

        let code = status.code().unwrap_or_else(|| {
            warn!(tool = %self.tool, %status, "process terminated without an exit code");
            -1
        });
        debug!(tool = %self.tool, code, "process exited");
        Ok(code)
    }

    /// Drain everything and wait; for short-lived invocations
    pub async fn collect(mut self) -> TrimResult<CapturedOutput> {
        let mut lines = self.take_lines();
        let gather = async {
            let mut captured = CapturedOutput::default();
            if let Some(lines) = lines.as_mut() {
                while let Some(line) = lines.next().await {
                    let target = match line.source {
                        OutputSource::Stdout => &mut captured.stdout,
                        OutputSource::Stderr => &mut captured.stderr,
                    };
                    target.push_str(&line.text);
                    target.push('\n');
                }
            }
            captured
        };

        let (mut captured, exit) = tokio::join!(gather, self.wait());
        captured.exit_code = exit?;
        Ok(captured)
    }
}

/// Default [`ProcessLauncher`] built on `tokio::process`
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessLauncher for ProcessRunner {
    async fn launch(&self, program: &Path, args: &[OsString]) -> TrimResult<RunningProcess> {
        let executable = EnvPathAdapter::resolve_executable(program)?;
        let tool = executable
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| executable.display().to_string());

        debug!(program = %executable.display(), ?args, "spawning process");

        let mut command = Command::new(&executable);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(windows)]
        command.creation_flags(CREATE_NO_WINDOW);

        let mut child = command.spawn().map_err(|source| TrimError::LaunchFailure {
            tool: tool.clone(),
            source,
        })?;

        let (sender, receiver) = mpsc::unbounded_channel();
        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            readers.push(spawn_reader(stdout, OutputSource::Stdout, sender.clone()));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(spawn_reader(stderr, OutputSource::Stderr, sender));
        }

        Ok(RunningProcess {
            tool,
            child,
            lines: Some(OutputLines { receiver }),
            readers,
        })
    }
}

fn spawn_reader<R>(
    stream: R,
    source: OutputSource,
    sender: mpsc::UnboundedSender<OutputLine>,
) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = LineReader::new(stream);
        loop {
            match reader.next_line().await {
                // Keep draining even if the feed was dropped, or the child stalls
                Ok(Some(text)) => {
                    let _ = sender.send(OutputLine { source, text });
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(?source, error = %e, "failed to read process output");
                    break;
                }
            }
        }
    })
}

/// Splits a byte stream on `\n`, `\r` and `\r\n`.
///
/// ffmpeg redraws its status line with bare carriage returns, so newline-only
/// splitting would glue every progress update into one line.
pub struct LineReader<R> {
    inner: BufReader<R>,
    pending_cr: bool,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(stream: R) -> Self {
        Self {
            inner: BufReader::new(stream),
            pending_cr: false,
        }
    }

    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        loop {
            let available = self.inner.fill_buf().await?;
            if available.is_empty() {
                self.pending_cr = false;
                return Ok(if line.is_empty() {
                    None
                } else {
                    Some(String::from_utf8_lossy(&line).into_owned())
                });
            }

            let mut start = 0;
            if self.pending_cr {
                self.pending_cr = false;
                if available[0] == b'\n' {
                    start = 1;
                }
            }

            match available[start..]
                .iter()
                .position(|b| *b == b'\n' || *b == b'\r')
            {
                Some(offset) => {
                    let end = start + offset;
                    line.extend_from_slice(&available[start..end]);
                    self.pending_cr = available[end] == b'\r';
                    self.inner.consume(end + 1);
                    return Ok(Some(String::from_utf8_lossy(&line).into_owned()));
                }
                None => {
                    line.extend_from_slice(&available[start..]);
                    let consumed = available.len();
                    self.inner.consume(consumed);
                }
            }
        }
    }
}
