//! Fixed-size overlapping text chunker.
//!
//! Splits document body text into [`Chunk`]s of `chunk_size` characters with
//! `overlap` characters shared across each boundary, so context spanning a
//! boundary is never lost. No semantic-boundary awareness: the window slides
//! by `chunk_size - overlap` characters each step. Windows are measured in
//! characters and never split a UTF-8 code point.
//!
//! Each chunk's id is the SHA-256 hash of its text, which makes re-indexing
//! the same document idempotent under upsert.

use sha2::{Digest, Sha256};

use crate::models::Chunk;

/// Split text into overlapping chunks. Returns chunks with contiguous
/// indices starting at 0; empty input yields no chunks.
///
/// `overlap` must be smaller than `chunk_size` (enforced at config load).
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<Chunk> {
    debug_assert!(chunk_size > 0 && overlap < chunk_size);
    let step = chunk_size.saturating_sub(overlap).max(1);

    // Byte offset of every char boundary, so windows can be sliced safely.
    let offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let total_chars = offsets.len();
    if total_chars == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut chunk_index = 0usize;

    loop {
        let end = (start + chunk_size).min(total_chars);
        let byte_start = offsets[start];
        let byte_end = if end == total_chars {
            text.len()
        } else {
            offsets[end]
        };
        chunks.push(make_chunk(chunk_index, &text[byte_start..byte_end]));

        if end == total_chars {
            break;
        }
        start += step;
        chunk_index += 1;
    }

    chunks
}

fn make_chunk(chunk_index: usize, text: &str) -> Chunk {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let id = format!("{:x}", hasher.finalize());

    Chunk {
        id,
        chunk_index,
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_text_single_chunk() {
        let chunks = chunk_text("Hello, world!", 1000, 100);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_index, 0);
        assert_eq!(chunks[0].text, "Hello, world!");
    }

    #[test]
    fn empty_text_no_chunks() {
        assert!(chunk_text("", 1000, 100).is_empty());
    }

    #[test]
    fn synthetic_2500_chars_yields_three_chunks() {
        let text = "abcdefghij".repeat(250);
        assert_eq!(text.chars().count(), 2500);

        let chunks = chunk_text(&text, 1000, 100);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text.chars().count(), 1000);
        assert_eq!(chunks[1].text.chars().count(), 1000);
        assert_eq!(chunks[2].text.chars().count(), 700);
    }

    #[test]
    fn overlap_present_at_each_boundary() {
        let text: String = (0..2500).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let chunks = chunk_text(&text, 1000, 100);
        assert_eq!(chunks.len(), 3);

        for pair in chunks.windows(2) {
            let tail: String = pair[0]
                .text
                .chars()
                .skip(pair[0].text.chars().count() - 100)
                .collect();
            let head: String = pair[1].text.chars().take(100).collect();
            assert_eq!(tail, head, "boundary must share exactly 100 chars");
        }
    }

    #[test]
    fn indices_contiguous_from_zero() {
        let text = "x".repeat(5000);
        let chunks = chunk_text(&text, 1000, 100);
        for (i, c) in chunks.iter().enumerate() {
            assert_eq!(c.chunk_index, i);
        }
    }

    #[test]
    fn ids_are_stable_across_runs() {
        let text = "Informasi Penerimaan Mahasiswa Baru. ".repeat(100);
        let a = chunk_text(&text, 1000, 100);
        let b = chunk_text(&text, 1000, 100);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.text, y.text);
        }
    }

    #[test]
    fn multibyte_text_never_splits_code_points() {
        let text = "séléksi mändiri Undikshä ".repeat(200);
        let chunks = chunk_text(&text, 1000, 100);
        assert!(chunks.len() > 1);

        // Slicing a code point in half would have panicked inside chunk_text.
        // Each window starts 900 chars after the previous one and the last
        // window runs to the end of the text.
        let total_chars = text.chars().count();
        let last = chunks.last().unwrap();
        assert_eq!(900 * (chunks.len() - 1) + last.text.chars().count(), total_chars);
    }
}
