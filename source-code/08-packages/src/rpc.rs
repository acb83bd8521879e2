//! Toy remote procedure calls over the length-prefixed framing.
//!
//! A `Registry` maps method names to handlers. Each request frame gets
//! exactly one response frame, and a connection may carry any number of
//! calls.

use crate::codec::{decode_value, encode_value, CodecError, LengthPrefixedCodec};
use crate::net::NetError;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tokio_util::codec::Framed;
use tracing::{debug, info, warn};

pub const NEGATE: &str = "Server.Negate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    pub arg: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub result: Result<i64, String>,
}

#[derive(Error, Debug)]
pub enum RpcError {
    #[error(transparent)]
    Net(#[from] NetError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("remote error: {0}")]
    Remote(String),
    #[error("server closed the connection")]
    ConnectionClosed,
}

type Handler = Arc<dyn Fn(i64) -> Result<i64, String> + Send + Sync>;

#[derive(Clone, Default)]
pub struct Registry {
    methods: HashMap<String, Handler>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry exposing only `Server.Negate`.
    pub fn with_negate() -> Self {
        let mut registry = Self::new();
        registry.register(NEGATE, |x| Ok(x.wrapping_neg()));
        registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(i64) -> Result<i64, String> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(handler));
    }

    pub fn methods(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn dispatch(&self, request: &RpcRequest) -> RpcResponse {
        let result = match self.methods.get(&request.method) {
            Some(handler) => handler(request.arg),
            None => Err(format!("unknown method {}", request.method)),
        };
        RpcResponse { result }
    }
}

pub async fn serve(listener: TcpListener, registry: Arc<Registry>) -> Result<(), NetError> {
    info!(addr = %listener.local_addr()?, methods = ?registry.methods(), "rpc server listening");

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(pair) => pair,
            Err(e) => {
                warn!(error = %e, "accept failed");
                continue;
            }
        };

        let registry = Arc::clone(&registry);
        tokio::spawn(async move {
            match serve_connection(stream, &registry).await {
                Ok(calls) => debug!(%peer, calls, "rpc client disconnected"),
                Err(e) => warn!(%peer, error = %e, "rpc connection failed"),
            }
        });
    }
}

/// Answers requests until the client hangs up; returns how many were served.
async fn serve_connection(stream: TcpStream, registry: &Registry) -> Result<usize, NetError> {
    let mut frames = Framed::new(stream, LengthPrefixedCodec::new());
    let mut calls = 0;

    while let Some(frame) = frames.next().await {
        let request: RpcRequest = decode_value(&frame?)?;
        debug!(method = %request.method, arg = request.arg, "rpc call");

        let response = registry.dispatch(&request);
        frames.send(encode_value(&response)?).await?;
        calls += 1;
    }

    Ok(calls)
}

pub struct RpcClient {
    frames: Framed<TcpStream, LengthPrefixedCodec>,
}

impl RpcClient {
    pub async fn dial(addr: impl ToSocketAddrs) -> Result<Self, RpcError> {
        let stream = TcpStream::connect(addr).await.map_err(NetError::from)?;
        Ok(RpcClient {
            frames: Framed::new(stream, LengthPrefixedCodec::new()),
        })
    }

    pub async fn call(&mut self, method: &str, arg: i64) -> Result<i64, RpcError> {
        let request = RpcRequest {
            method: method.to_string(),
            arg,
        };
        self.frames.send(encode_value(&request)?).await?;

        let frame = self.frames.next().await.ok_or(RpcError::ConnectionClosed)??;
        let response: RpcResponse = decode_value(&frame)?;
        response.result.map_err(RpcError::Remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    async fn start(registry: Registry) -> (SocketAddr, tokio::task::JoinHandle<Result<(), NetError>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(serve(listener, Arc::new(registry)));
        (addr, handle)
    }

    #[test]
    fn dispatch_without_network() {
        let registry = Registry::with_negate();
        let request = RpcRequest {
            method: NEGATE.to_string(),
            arg: 5,
        };
        assert_eq!(registry.dispatch(&request).result, Ok(-5));
        assert_eq!(registry.methods(), vec![NEGATE]);
    }

    #[test]
    fn dispatch_unknown_method() {
        let request = RpcRequest {
            method: "Server.Missing".to_string(),
            arg: 1,
        };
        let response = Registry::with_negate().dispatch(&request);
        assert_eq!(response.result, Err("unknown method Server.Missing".to_string()));
    }

    #[test]
    fn negate_wraps_at_minimum() {
        let request = RpcRequest {
            method: NEGATE.to_string(),
            arg: i64::MIN,
        };
        assert_eq!(Registry::with_negate().dispatch(&request).result, Ok(i64::MIN));
    }

    #[tokio::test]
    async fn negate_over_tcp() {
        let (addr, handle) = start(Registry::with_negate()).await;

        let mut client = RpcClient::dial(addr).await.unwrap();
        assert_eq!(client.call(NEGATE, 99).await.unwrap(), -99);

        handle.abort();
    }

    #[tokio::test]
    async fn many_calls_on_one_connection() {
        let (addr, handle) = start(Registry::with_negate()).await;

        let mut client = RpcClient::dial(addr).await.unwrap();
        for arg in [-3, 0, 7, i64::MAX] {
            assert_eq!(client.call(NEGATE, arg).await.unwrap(), -arg);
        }

        handle.abort();
    }

    #[tokio::test]
    async fn remote_errors_come_back() {
        let mut registry = Registry::with_negate();
        registry.register("Server.Halve", |x| {
            if x % 2 == 0 {
                Ok(x / 2)
            } else {
                Err(format!("{} is odd", x))
            }
        });
        let (addr, handle) = start(registry).await;

        let mut client = RpcClient::dial(addr).await.unwrap();
        assert_eq!(client.call("Server.Halve", 8).await.unwrap(), 4);
        match client.call("Server.Halve", 7).await {
            Err(RpcError::Remote(msg)) => assert_eq!(msg, "7 is odd"),
            other => panic!("expected remote error, got {:?}", other),
        }
        match client.call("Server.Nope", 1).await {
            Err(RpcError::Remote(msg)) => assert!(msg.contains("unknown method")),
            other => panic!("expected remote error, got {:?}", other),
        }
        // The connection survives application-level errors
        assert_eq!(client.call(NEGATE, 1).await.unwrap(), -1);

        handle.abort();
    }

    #[tokio::test]
    async fn dial_closed_port_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert!(matches!(RpcClient::dial(addr).await, Err(RpcError::Net(NetError::Io(_)))));
    }
}
