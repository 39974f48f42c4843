//! ## Example
//!
//! ```no_run
//! use fdpwn::connection::{Connection, Process};
//! use fdpwn::solver::compute_argument;
//!
//! # async fn solve() -> fdpwn::error::Result<()> {
//! let arg = compute_argument(0x1234, 0);
//! let mut conn = Process::with_args(&"./fd", &[arg.to_string()])?;
//! conn.sendline(b"LETMEWIN").await?;
//! conn.interactive().await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use futures::future;
use log::debug;
use std::ffi::OsStr;
use std::io::{BufReader, Read, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::error::{Error, Result};
use crate::util::Payload;

/// What a bounded read observed.
///
/// A read of zero bytes with no error indicator is the stream's end, not a
/// failure; it gets its own variant instead of an `Err`. The caller's recovery
/// is to reposition the underlying resource and retry, where that is possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Data(Vec<u8>),
    EndOfResource,
}

pub struct Process {
    child: Child,
    stdin: ChildStdin,
    stdout_reader: BufReader<ChildStdout>,
}

pub trait ToVec {
    fn to_vec(&self) -> Vec<u8>;
}

impl ToVec for Payload {
    fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl ToVec for Vec<u8> {
    fn to_vec(&self) -> Vec<u8> {
        self.clone()
    }
}

impl<const N: usize> ToVec for [u8; N] {
    fn to_vec(&self) -> Vec<u8> {
        self[..].to_vec()
    }
}

impl ToVec for [u8] {
    fn to_vec(&self) -> Vec<u8> {
        self.to_vec()
    }
}

#[async_trait]
pub trait Connection {
    async fn send<D: ?Sized + ToVec + Sync>(&mut self, data: &D) -> Result<()>;
    async fn sendline<D: ?Sized + ToVec + Sync>(&mut self, data: &D) -> Result<()> {
        self.send(data).await?;
        self.send(b"\n").await?;
        Ok(())
    }
    /// Read up to `n` bytes. Zero bytes without an error is
    /// [`ReadOutcome::EndOfResource`].
    async fn recv(&mut self, n: usize) -> Result<ReadOutcome>;
    async fn recvline(&mut self) -> Result<Vec<u8>> {
        self.recvuntil(b"\n").await
    }
    async fn recvuntil(&mut self, pattern: &[u8]) -> Result<Vec<u8>>;
    async fn interactive(self) -> Result<()>;
}

impl Process {
    pub fn new<S>(program: S) -> Result<Self>
    where
        S: AsRef<OsStr>,
    {
        Self::with_args::<S, S>(program, &[])
    }

    /// Spawn with arguments. Redirection challenges take the computed offset
    /// argument on argv.
    pub fn with_args<S, A>(program: S, args: &[A]) -> Result<Self>
    where
        S: AsRef<OsStr>,
        A: AsRef<OsStr>,
    {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;
        let stdin = child.stdin.take().unwrap();
        let stdout = child.stdout.take().unwrap();
        let stdout_reader = BufReader::new(stdout);
        Ok(Self {
            child,
            stdin,
            stdout_reader,
        })
    }
}

#[async_trait]
impl Connection for Process {
    async fn send<D: ?Sized + ToVec + Sync>(&mut self, data: &D) -> Result<()> {
        let data = data.to_vec();
        debug!("send: {} bytes", data.len());
        self.stdin.write_all(&data)?;
        self.stdin.flush()?;
        Ok(())
    }

    async fn recv(&mut self, n: usize) -> Result<ReadOutcome> {
        let mut buf = vec![0; n];
        let got = self.stdout_reader.read(&mut buf)?;
        if got == 0 && n > 0 {
            debug!("recv: end of resource");
            return Ok(ReadOutcome::EndOfResource);
        }
        buf.truncate(got);
        debug!("recv: {} bytes", got);
        Ok(ReadOutcome::Data(buf))
    }

    async fn recvuntil(&mut self, pattern: &[u8]) -> Result<Vec<u8>> {
        let mut result = vec![];

        let mut buf = [0; 1];
        while self.stdout_reader.read_exact(&mut buf).is_ok() {
            result.extend_from_slice(&buf);
            if result.ends_with(pattern) {
                return Ok(result);
            }
        }
        Err(Error::PatternNotFound)
    }

    async fn interactive(mut self) -> Result<()> {
        let mut stdin = self.stdin;

        std::thread::spawn(move || std::io::copy(&mut std::io::stdin(), &mut stdin).unwrap());
        let mut stdout = self.stdout_reader;

        std::thread::spawn(move || std::io::copy(&mut stdout, &mut std::io::stdout()).unwrap());
        self.child.wait()?;

        Ok(())
    }
}

pub struct Remote {
    stream: TcpStream,
}

impl Remote {
    pub async fn new(addr: &str) -> Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self { stream })
    }
}

#[async_trait]
impl Connection for Remote {
    async fn send<D: ?Sized + ToVec + Sync>(&mut self, data: &D) -> Result<()> {
        let data = data.to_vec();
        debug!("send: {} bytes", data.len());
        self.stream.write_all(&data).await?;
        self.stream.flush().await?;
        Ok(())
    }

    async fn recv(&mut self, n: usize) -> Result<ReadOutcome> {
        let mut buf = vec![0; n];
        let got = self.stream.read(&mut buf).await?;
        if got == 0 && n > 0 {
            debug!("recv: end of resource");
            return Ok(ReadOutcome::EndOfResource);
        }
        buf.truncate(got);
        debug!("recv: {} bytes", got);
        Ok(ReadOutcome::Data(buf))
    }

    async fn recvuntil(&mut self, pattern: &[u8]) -> Result<Vec<u8>> {
        let mut buf = vec![];
        loop {
            let mut buf_ = [0];
            self.stream.read_exact(&mut buf_).await?;
            buf.extend_from_slice(&buf_[..]);
            if buf.ends_with(pattern) {
                break;
            }
        }
        Ok(buf)
    }

    async fn interactive(self) -> Result<()> {
        let (mut read_half, mut write_half) = tokio::io::split(self.stream);
        future::try_join(
            tokio::io::copy(&mut tokio::io::stdin(), &mut write_half),
            tokio::io::copy(&mut read_half, &mut tokio::io::stdout()),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn line_round_trip_through_child() {
        let mut conn = Process::new("cat").unwrap();
        conn.sendline(b"LETMEWIN").await.unwrap();
        assert_eq!(conn.recvline().await.unwrap(), b"LETMEWIN\n");
    }

    #[tokio::test]
    async fn silent_child_is_end_of_resource_not_error() {
        let mut conn = Process::new("true").unwrap();
        assert_eq!(conn.recv(1).await.unwrap(), ReadOutcome::EndOfResource);
        // Still exhausted on retry; only a new resource would change that.
        assert_eq!(conn.recv(1).await.unwrap(), ReadOutcome::EndOfResource);
    }

    #[tokio::test]
    async fn recvuntil_reports_missing_pattern() {
        let mut conn = Process::with_args("echo", &["-n", "LETME"]).unwrap();
        match conn.recvuntil(b"WIN").await {
            Err(Error::PatternNotFound) => {}
            other => panic!("expected PatternNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn to_vec_adapters() {
        let mut payload = Payload::default();
        payload += &b"ab"[..];
        assert_eq!(ToVec::to_vec(&payload), b"ab");
        assert_eq!(ToVec::to_vec(&[1u8, 2][..]), vec![1, 2]);
        assert_eq!(ToVec::to_vec(&[3u8; 2]), vec![3, 3]);
    }
}
