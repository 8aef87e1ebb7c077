use crate::Error;
use futures_util::StreamExt;
use tokio_tungstenite::{
  connect_async_with_config,
  tungstenite::{error::CapacityError, protocol::WebSocketConfig, Error as WsError, Message},
};

/// Opens one outbound connection to `uri`, suspends until the first data
/// message arrives and returns its payload. The socket is released on every
/// exit path because the stream never leaves this function.
///
/// Control frames that precede the payload are skipped. Close-before-data and
/// oversized announcements surface as distinct errors and are never retried.
pub(crate) async fn fetch_single_message(
  uri: &str,
  max_message_size: usize,
) -> crate::Result<Vec<u8>> {
  let config = WebSocketConfig {
    // Real captures arrive as one large frame, so the per-frame limit must
    // follow the per-message ceiling.
    max_frame_size: Some(max_message_size),
    max_message_size: Some(max_message_size),
    ..WebSocketConfig::default()
  };
  let (mut ws, _res) = connect_async_with_config(uri, Some(config), false).await?;
  tracing::debug!("connected to {uri}");
  let payload = loop {
    let Some(rslt) = ws.next().await else {
      return Err(Error::ConnectionClosedBeforeMessage);
    };
    match rslt {
      Ok(Message::Binary(payload)) => break payload,
      Ok(Message::Text(payload)) => break payload.into_bytes(),
      Ok(Message::Close(_)) => return Err(Error::ConnectionClosedBeforeMessage),
      Ok(_) => {}
      Err(WsError::Capacity(CapacityError::MessageTooLong { size, max_size })) => {
        return Err(Error::MessageExceedsCeiling { max: max_size, size });
      }
      Err(err) => return Err(err.into()),
    }
  };
  let _rslt = ws.close(None).await;
  Ok(payload)
}
