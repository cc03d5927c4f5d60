use crate::error::BatchError;

/// Lazy iterator of fixed-size chunks over an owned source iterator.
///
/// Owns the source, so the produced sequence is one-shot: iterating it
/// consumes the source, and a fresh call to [`chunked`] with a fresh source
/// is the only way to start over. Dropping it — fully drained or abandoned
/// after the first chunk — drops the source exactly once, which releases
/// whatever resources the source holds.
#[derive(Debug)]
pub struct Chunks<I> {
    source: I,
    size: usize,
    done: bool,
}

/// Split `source` into chunks of at most `size` elements, preserving order.
///
/// Every chunk except the last has exactly `size` elements; the last chunk
/// holds whatever remains and is never empty. Concatenating the chunks in
/// emission order reproduces the source exactly.
///
/// `size == 0` is rejected before the source is touched, so misconfigured
/// callers fail fast instead of failing on the first chunk request.
pub fn chunked<I>(source: I, size: usize) -> Result<Chunks<I::IntoIter>, BatchError>
where
    I: IntoIterator,
{
    if size < 1 {
        return Err(BatchError::InvalidChunkSize(size));
    }

    Ok(Chunks {
        source: source.into_iter(),
        size,
        done: false,
    })
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // No first element means the source ended exactly on a chunk
        // boundary; terminate without emitting an empty chunk.
        let first = match self.source.next() {
            Some(item) => item,
            None => {
                self.done = true;
                return None;
            }
        };

        let mut chunk = Vec::with_capacity(self.size);
        chunk.push(first);

        while chunk.len() < self.size {
            match self.source.next() {
                Some(item) => chunk.push(item),
                None => {
                    // A short chunk can only be the final one; remember the
                    // exhaustion so the source is never polled again.
                    self.done = true;
                    break;
                }
            }
        }

        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }

        let (lower, upper) = self.source.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|u| u.div_ceil(self.size)),
        )
    }
}

impl<I: Iterator> std::iter::FusedIterator for Chunks<I> {}

/// Adaptor form of [`chunked`] for iterator chains.
pub trait ChunkedExt: Iterator + Sized {
    fn chunked(self, size: usize) -> Result<Chunks<Self>, BatchError> {
        chunked(self, size)
    }
}

impl<I: Iterator> ChunkedExt for I {}
