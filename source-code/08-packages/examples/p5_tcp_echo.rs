//! Pattern 5: TCP Echo
//! Example: Server and Client in One Process, One Framed Value per Connection
//!
//! Run with: RUST_LOG=debug cargo run -p packages --example p5_tcp_echo
//! Override the address with FUNDAMENTALS_ADDR=127.0.0.1:9000

use packages::echo;
use packages::net::NetConfig;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    packages::init_tracing();
    let config = NetConfig::from_env()?;

    let listener = TcpListener::bind(config.addr).await?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let server = tokio::spawn(echo::serve(listener, tx));

    let msg = "hello world";
    println!("Sending {}", msg);
    echo::send(config.addr, msg).await?;

    match tokio::time::timeout(Duration::from_secs(2), rx.recv()).await {
        Ok(Some(received)) => println!("Received: {}", received),
        Ok(None) => println!("Server stopped"),
        Err(_) => println!("Timed out waiting for the server"),
    }

    server.abort();
    Ok(())
}
