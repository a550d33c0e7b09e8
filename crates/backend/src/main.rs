use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ws::Message, ws::WebSocket, State, WebSocketUpgrade},
    response::IntoResponse,
    routing, Router,
};
use backend::directory::InMemoryRooms;
use backend::relay::Relay;
use common::ws::ClientMsg;
use futures::{lock::Mutex, SinkExt, StreamExt};
use log::{debug, info, warn};
use tower_http::services::ServeDir;

type SharedRelay = Arc<Mutex<Relay<InMemoryRooms>>>;

#[tokio::main]
async fn main() {
    simple_logger::SimpleLogger::new()
        .env()
        .init()
        .expect("logger init");

    let relay: SharedRelay = Arc::new(Mutex::new(Relay::new(InMemoryRooms::new())));

    let app = Router::new()
        .route("/ws", routing::get(websocket_handler))
        .fallback_service(ServeDir::new("dist"))
        .with_state(relay);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(4000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("relay listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(relay): State<SharedRelay>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| websocket(socket, relay))
}

// One websocket connection end to end. By splitting, we can send and receive
// at the same time: the send task drains this connection's outbox, the
// receive task feeds decoded events into the relay.
async fn websocket(socket: WebSocket, relay: SharedRelay) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let conn = relay.lock().await.connect(tx);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg.into()).await.is_err() {
                break;
            }
        }
    });

    let recv_relay = relay.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(err) => {
                    debug!("connection {conn}: transport error: {err}");
                    break;
                }
            };
            match msg {
                Message::Close(_) => break,
                Message::Ping(_) | Message::Pong(_) => continue,
                other => match ClientMsg::try_from(other) {
                    Ok(msg) => recv_relay.lock().await.handle(conn, msg),
                    // A single connection's bad input never affects the rest.
                    Err(err) => warn!("connection {conn}: dropping malformed event: {err}"),
                },
            }
        }
    });

    // If either task runs to completion, abort the other.
    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    relay.lock().await.disconnect(conn);
}
