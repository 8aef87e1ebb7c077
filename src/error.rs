use core::fmt::{Debug, Display, Formatter};

/// Alias of `core::result::Result<T, pcgrab::Error>`.
pub(crate) type Result<T> = core::result::Result<T, Error>;

/// Grouped individual errors
#[derive(Debug)]
pub(crate) enum Error {
  // External
  //
  IoError(std::io::Error),
  TryInitError(tracing_subscriber::util::TryInitError),
  Tungstenite(Box<tokio_tungstenite::tungstenite::Error>),

  // Generic
  //
  /// The peer sent a close frame or ended the stream before any data message
  /// arrived.
  ConnectionClosedBeforeMessage,
  /// The payload does not start with the `pc` magic bytes.
  FrameBadMagic,
  /// The payload length does not match the declared number of points.
  FrameLengthMismatch {
    len: usize,
    point_count: u64,
  },
  /// The payload is too short to hold a frame header.
  FrameTruncatedHeader,
  /// The peer announced a message larger than the configured ceiling.
  MessageExceedsCeiling {
    max: usize,
    size: usize,
  },
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl From<std::io::Error> for Error {
  #[inline]
  fn from(from: std::io::Error) -> Self {
    Self::IoError(from)
  }
}

impl From<tracing_subscriber::util::TryInitError> for Error {
  #[inline]
  fn from(from: tracing_subscriber::util::TryInitError) -> Self {
    Self::TryInitError(from)
  }
}

impl From<tokio_tungstenite::tungstenite::Error> for Error {
  #[inline]
  fn from(from: tokio_tungstenite::tungstenite::Error) -> Self {
    Self::Tungstenite(from.into())
  }
}
