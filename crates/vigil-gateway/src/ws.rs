//! WebSocket gateway connection.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{SplitSink, SplitStream, StreamExt};
use futures::SinkExt;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, Mutex};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use vigil_core::error::{AppError, ErrorKind};
use vigil_core::events::GatewayEvent;
use vigil_core::result::AppResult;
use vigil_core::traits::{Messenger, PresenceChannel};
use vigil_core::types::{Activity, PresenceStatus};

use crate::frame::{translate, InboundFrame, OutboundFrame};

/// Buffer size of the typed event feed.
const EVENT_BUFFER: usize = 256;

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;
type WsSource = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

/// A live connection to the platform gateway.
///
/// The handle carries the write half; a spawned task drains the read
/// half into the typed event feed. When the socket closes, the feed
/// ends and the handle's outbound operations start failing, which is
/// the caller's cue to reconnect.
pub struct WsGateway {
    sink: Mutex<WsSink>,
}

impl WsGateway {
    /// Connect to the gateway, identify, and spawn the read loop.
    ///
    /// Returns the connection handle and the typed event feed.
    pub async fn connect(
        url: &str,
        token: &str,
    ) -> AppResult<(Arc<Self>, mpsc::Receiver<GatewayEvent>)> {
        let (stream, _response) = connect_async(url).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Gateway,
                format!("Failed to connect to gateway: {url}"),
                e,
            )
        })?;
        info!(url, "Gateway connected");

        let (sink, source) = stream.split();
        let gateway = Arc::new(Self {
            sink: Mutex::new(sink),
        });

        gateway
            .send_frame(&OutboundFrame::Identify {
                token: token.to_string(),
            })
            .await?;

        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        tokio::spawn(read_loop(source, event_tx));

        Ok((gateway, event_rx))
    }

    /// Serialize and send one outbound frame.
    async fn send_frame(&self, frame: &OutboundFrame) -> AppResult<()> {
        let text = serde_json::to_string(frame)?;
        let mut sink = self.sink.lock().await;
        sink.send(Message::text(text)).await.map_err(|e| {
            AppError::with_source(ErrorKind::Gateway, "Failed to send gateway frame", e)
        })
    }
}

/// Drain the read half into the typed event feed until the socket ends.
async fn read_loop(mut source: WsSource, events: mpsc::Sender<GatewayEvent>) {
    while let Some(message) = source.next().await {
        let message = match message {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Gateway read error, closing feed");
                break;
            }
        };

        match message {
            Message::Text(text) => {
                let frame: InboundFrame = match serde_json::from_str(&text) {
                    Ok(frame) => frame,
                    Err(e) => {
                        debug!(error = %e, "Skipping undecodable gateway frame");
                        continue;
                    }
                };
                if let Some(event) = translate(frame) {
                    if events.send(event).await.is_err() {
                        break;
                    }
                }
            }
            Message::Close(_) => {
                info!("Gateway connection closed by server");
                break;
            }
            // Pings are answered by the transport; binary frames are not
            // part of the protocol.
            _ => {}
        }
    }
}

#[async_trait]
impl PresenceChannel for WsGateway {
    async fn set_activity(&self, activity: Option<Activity>) -> AppResult<()> {
        self.send_frame(&OutboundFrame::SetActivity { activity }).await
    }

    async fn set_presence(
        &self,
        status: PresenceStatus,
        activities: Vec<Activity>,
    ) -> AppResult<()> {
        self.send_frame(&OutboundFrame::SetPresence { status, activities })
            .await
    }
}

#[async_trait]
impl Messenger for WsGateway {
    async fn send_message(&self, channel_id: &str, content: &str) -> AppResult<()> {
        self.send_frame(&OutboundFrame::SendMessage {
            channel_id: channel_id.to_string(),
            content: content.to_string(),
        })
        .await
    }
}
