use std::io;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time;
use tracing::debug;

/// Upper bound on a single response read; longer replies are truncated.
pub const RESPONSE_BUF_SIZE: usize = 4096;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connect to {addr} failed: {source}")]
    Connect { addr: String, source: io::Error },
    #[error("send failed: {0}")]
    Send(io::Error),
    #[error("recv failed: {0}")]
    Recv(io::Error),
}

/// One request/response exchange over a fresh connection. The response
/// bytes come back raw; nothing is parsed or validated.
pub async fn exchange(addr: &str, request: &str) -> Result<Vec<u8>, TransportError> {
    let mut stream = TcpStream::connect(addr)
        .await
        .map_err(|source| TransportError::Connect {
            addr: addr.to_string(),
            source,
        })?;

    stream
        .write_all(request.as_bytes())
        .await
        .map_err(TransportError::Send)?;

    let mut buf = [0u8; RESPONSE_BUF_SIZE];
    let n = stream.read(&mut buf).await.map_err(TransportError::Recv)?;
    Ok(buf[..n].to_vec())
}

/// Startup reachability check with a connect timeout.
pub async fn probe(addr: &str, timeout: Duration) -> anyhow::Result<()> {
    match time::timeout(timeout, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => {
            debug!("Probe of {} succeeded", addr);
            Ok(())
        }
        Ok(Err(e)) => Err(anyhow::Error::new(e).context(format!("cannot connect to {}", addr))),
        Err(_) => anyhow::bail!("connecting to {} timed out after {:?}", addr, timeout),
    }
}
