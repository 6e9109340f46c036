//! Safe wrappers around FFmpeg FFI calls.
//!
//! Every function in this module is `pub` and **safe** to call. All `unsafe`
//! blocks are contained here with explicit safety arguments.

use ffmpeg_next as ffmpeg;

// ── Codec-parameter field accessors ─────────────────────────────────────────

/// Borrow `extradata` from an `AVCodecParameters` struct.
///
/// For Matroska subtitle tracks this is the track's CodecPrivate, which holds
/// the ASS/SSA style sheet. Returns an empty slice when absent.
pub fn codec_params_extradata(params: &ffmpeg::codec::parameters::Parameters) -> &[u8] {
    // SAFETY: `params.as_ptr()` returns a valid non-null pointer for the
    // lifetime of `params`. `extradata` is either null or points to
    // `extradata_size` initialized bytes owned by the parameters struct, which
    // outlives the returned borrow.
    unsafe {
        let p = params.as_ptr();
        let data = (*p).extradata;
        let size = (*p).extradata_size;
        if data.is_null() || size <= 0 {
            return &[];
        }
        std::slice::from_raw_parts(data, size as usize)
    }
}

/// Style-sheet header text from a stream's extradata, lossily decoded as UTF-8.
///
/// Trailing NUL padding is dropped.
pub fn stream_header_text(stream: &ffmpeg::Stream) -> String {
    let params = stream.parameters();
    let data = codec_params_extradata(&params);
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&data[..end]).into_owned()
}

// ── Stream selection ─────────────────────────────────────────────────────────

/// Tell the demuxer to drop every packet of this stream.
///
/// Skips the packet-level work for audio and video while extracting subtitles.
pub fn stream_discard_all(stream: &mut ffmpeg::format::stream::StreamMut) {
    // SAFETY: `stream.as_mut_ptr()` is valid for the lifetime of the stream.
    // `discard` is a plain enum field read by the demuxer on the next
    // `av_read_frame`.
    unsafe {
        (*stream.as_mut_ptr()).discard = ffmpeg::ffi::AVDiscard::AVDISCARD_ALL;
    }
}
