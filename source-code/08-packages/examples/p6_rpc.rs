//! Pattern 6: Remote Procedure Call
//! Example: Calling Server.Negate over TCP
//!
//! Run with: cargo run -p packages --example p6_rpc

use packages::net::NetConfig;
use packages::rpc::{self, Registry, RpcClient, NEGATE};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    packages::init_tracing();
    let config = NetConfig::from_env()?;

    let listener = TcpListener::bind(config.addr).await?;
    let server = tokio::spawn(rpc::serve(listener, Arc::new(Registry::with_negate())));

    let mut client = RpcClient::dial(config.addr).await?;
    match client.call(NEGATE, 99).await {
        Ok(result) => println!("server negate result: {}", result),
        Err(e) => println!("{}", e),
    }

    match client.call("Server.Square", 3).await {
        Ok(result) => println!("unexpected result: {}", result),
        Err(e) => println!("as expected: {}", e),
    }

    server.abort();
    Ok(())
}
