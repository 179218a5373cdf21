//! Response handling: size-capped body reads and device error mapping.

use crate::error::{Error, Result};
use futures_util::StreamExt;
use reqwest::Response;
use tracing::{debug, warn};

use super::builder::DigestClient;

/// Characters of an error body recorded in the log.
const BODY_PREVIEW_SIZE: usize = 200;

/// Initial buffer size when the device does not advertise a length.
const DEFAULT_BODY_CAPACITY: usize = 8 * 1024;

impl DigestClient {
    /// Reads a response body within the configured size limit, returning it
    /// for success statuses and mapping everything else to
    /// [`Error::Device`].
    ///
    /// Only success bodies can fail with [`Error::ResponseTooLarge`]. An
    /// error status carries the diagnosis in the status code itself, so an
    /// oversized error page is cut at the limit instead of displacing the
    /// device error.
    pub(super) async fn read_body(&self, response: Response) -> Result<String> {
        let status = response.status();
        let limit = self.config().max_response_size;

        if status.is_success()
            && let Some(length) = response.content_length()
            && length > limit as u64
        {
            return Err(Error::response_too_large(length, limit as u64));
        }

        let capped = read_capped(response, limit).await?;
        if status.is_success() && capped.truncated {
            return Err(Error::response_too_large(capped.size, limit as u64));
        }

        let body = String::from_utf8_lossy(&capped.bytes).into_owned();
        if status.is_success() {
            debug!(
                status = status.as_u16(),
                bytes = capped.bytes.len(),
                "device answered"
            );
            Ok(body)
        } else {
            let preview: String = body.chars().take(BODY_PREVIEW_SIZE).collect();
            warn!(
                status = status.as_u16(),
                body = %preview,
                truncated = capped.truncated,
                "device returned an error status"
            );
            Err(Error::device(status.as_u16(), body))
        }
    }
}

/// Body bytes buffered within the cap.
struct CappedBody {
    bytes: Vec<u8>,
    /// Whether the device offered more than the cap.
    truncated: bool,
    /// Bytes observed up to the point the read stopped.
    size: u64,
}

/// Streams the body chunk by chunk, buffering no more than `limit` bytes.
/// Guards against devices that send unbounded streams, such as an MJPEG
/// endpoint hit by mistake. The read stops at the cap; the caller decides
/// whether a truncated body is an error.
async fn read_capped(response: Response, limit: usize) -> Result<CappedBody> {
    let capacity = response
        .content_length()
        .map_or(DEFAULT_BODY_CAPACITY, |length| {
            usize::try_from(length).unwrap_or(limit).min(limit)
        });

    let mut buffer = Vec::with_capacity(capacity);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let size = buffer.len().saturating_add(chunk.len());
        if size > limit {
            let room = limit - buffer.len();
            buffer.extend_from_slice(&chunk[..room]);
            return Ok(CappedBody {
                bytes: buffer,
                truncated: true,
                size: size as u64,
            });
        }
        buffer.extend_from_slice(&chunk);
    }

    buffer.shrink_to_fit();
    let size = buffer.len() as u64;
    Ok(CappedBody {
        bytes: buffer,
        truncated: false,
        size,
    })
}
