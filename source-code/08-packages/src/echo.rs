//! Toy TCP echo: each connection carries exactly one framed `String`.
//!
//! The server spawns a task per connection, decodes one value, hands it
//! to a channel, and closes the connection. A bad frame only costs that
//! one connection; the accept loop carries on.

use crate::codec::{decode_value, encode_value, LengthPrefixedCodec};
use crate::net::NetError;
use futures::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, info, warn};

/// Accepts connections until `sink`'s receiver is dropped.
///
/// The receiver going away is noticed on the next accepted connection.
pub async fn serve(listener: TcpListener, sink: mpsc::UnboundedSender<String>) -> Result<(), NetError> {
    info!(addr = %listener.local_addr()?, "echo server listening");

    loop {
        if sink.is_closed() {
            info!("message receiver dropped, stopping echo server");
            return Ok(());
        }

        let (stream, peer) = match listener.accept().await {
            Ok(pair) => pair,
            Err(e) => {
                warn!(error = %e, "accept failed");
                continue;
            }
        };
        debug!(%peer, "accepted connection");

        let sink = sink.clone();
        tokio::spawn(async move {
            match receive_one(stream).await {
                Ok(message) => {
                    info!(%peer, %message, "Received");
                    let _ = sink.send(message);
                }
                Err(e) => warn!(%peer, error = %e, "dropping connection"),
            }
        });
    }
}

/// Reads the single framed string a client sends.
pub async fn receive_one(stream: TcpStream) -> Result<String, NetError> {
    let mut frames = FramedRead::new(stream, LengthPrefixedCodec::new());
    match frames.next().await {
        Some(frame) => Ok(decode_value(&frame?)?),
        None => Err(NetError::ConnectionClosed),
    }
}

/// Dials `addr`, sends `message` as one frame, and hangs up.
pub async fn send(addr: impl ToSocketAddrs, message: &str) -> Result<(), NetError> {
    let stream = TcpStream::connect(addr).await?;
    let mut frames = FramedWrite::new(stream, LengthPrefixedCodec::new());
    debug!(%message, "Sending");
    frames.send(encode_value(message)?).await?;
    frames.close().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio::io::AsyncWriteExt;
    use tokio::time::timeout;

    async fn start() -> (SocketAddr, mpsc::UnboundedReceiver<String>, tokio::task::JoinHandle<Result<(), NetError>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(serve(listener, tx));
        (addr, rx, handle)
    }

    #[tokio::test]
    async fn delivers_one_message() {
        let (addr, mut rx, handle) = start().await;

        send(addr, "hello world").await.unwrap();
        let got = timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
        assert_eq!(got.as_deref(), Some("hello world"));

        handle.abort();
    }

    #[tokio::test]
    async fn handles_several_clients() {
        let (addr, mut rx, handle) = start().await;

        for i in 0..3 {
            send(addr, &format!("message {}", i)).await.unwrap();
        }
        let mut got = Vec::new();
        for _ in 0..3 {
            got.push(timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap());
        }
        got.sort();
        assert_eq!(got, vec!["message 0", "message 1", "message 2"]);

        handle.abort();
    }

    #[tokio::test]
    async fn bad_frame_does_not_stop_server() {
        let (addr, mut rx, handle) = start().await;

        // Two payload bytes can't hold bincode's 8-byte string length
        let mut raw = TcpStream::connect(addr).await.unwrap();
        raw.write_all(&[0, 0, 0, 2, 1, 2]).await.unwrap();
        raw.shutdown().await.unwrap();

        // Connecting and closing without a frame is also just dropped
        drop(TcpStream::connect(addr).await.unwrap());

        send(addr, "still alive").await.unwrap();
        let got = timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
        assert_eq!(got.as_deref(), Some("still alive"));

        handle.abort();
    }

    #[tokio::test]
    async fn stops_after_receiver_dropped() {
        let (addr, rx, handle) = start().await;
        drop(rx);

        // Wake the accept loop so it notices. The server may already be gone.
        let _ = send(addr, "anyone there?").await;

        let result = timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn send_to_closed_port_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert!(matches!(send(addr, "nobody").await, Err(NetError::Io(_))));
    }
}
