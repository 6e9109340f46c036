use thiserror::Error;

/// Main error type for subtitle extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// An error originating from the underlying FFmpeg library
    #[error("FFmpeg error: {0}")]
    Ffmpeg(#[from] FfmpegError),

    /// A standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A packet payload could not be decoded; the whole track is abandoned
    #[error("Malformed packet {index} ({codec_id}): {source}")]
    MalformedPacket {
        index: usize,
        codec_id: String,
        #[source]
        source: BlockError,
    },

    /// The track's codec id is outside the supported text families
    #[error("Unsupported codec ID: {0}")]
    UnsupportedCodec(String),

    /// The packet source failed before reaching end of stream
    #[error("Packet read error: {0}")]
    PacketRead(String),

    /// The requested subtitle stream does not exist in the source file
    #[error("Track not found: stream {0}")]
    TrackNotFound(usize),

    /// Writing the output script failed part way through
    #[error("Failed writing {stage}: {source}")]
    Write {
        stage: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Structured-field block parse failures (`ReadOrder,Layer,Style,...,Text`)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("empty block data")]
    Empty,

    #[error("expected {expected} fields, got {got}")]
    FieldCount { expected: usize, got: usize },

    #[error("invalid ReadOrder {0:?}")]
    InvalidReadOrder(String),

    #[error("invalid Layer {0:?}")]
    InvalidLayer(String),
}

/// FFmpeg-specific errors
#[derive(Error, Debug)]
pub enum FfmpegError {
    /// Failure during global FFmpeg initialization
    #[error("FFmpeg initialization failed: {0}")]
    InitFailed(String),

    /// Failure opening an input media file
    #[error("Failed to open input file: {0}")]
    OpenInput(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ExtractError>;

impl ExtractError {
    /// Wrap an I/O failure with the output stage it happened in.
    pub(crate) fn write(stage: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| ExtractError::Write { stage, source }
    }
}
