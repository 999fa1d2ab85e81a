//! Vector similarity helpers

/// Cosine similarity between two vectors
///
/// Returns `None` when the dimensions differ or either vector is empty, and
/// `Some(0.0)` when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return Some(0.0);
    }
    Some(dot / denom)
}

/// Mean of the vectors, re-normalized to unit length
///
/// Returns `None` for no vectors or mixed dimensions.
pub fn centroid<'a, I>(vectors: I) -> Option<Vec<f32>>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut iter = vectors.into_iter();
    let first = iter.next()?;
    let mut sum: Vec<f32> = first.to_vec();
    let mut count = 1usize;
    for v in iter {
        if v.len() != sum.len() {
            return None;
        }
        for (s, x) in sum.iter_mut().zip(v) {
            *s += x;
        }
        count += 1;
    }

    for s in &mut sum {
        *s /= count as f32;
    }
    let magnitude: f32 = sum.iter().map(|x| x * x).sum::<f32>().sqrt();
    if magnitude > 0.0 {
        for s in &mut sum {
            *s /= magnitude;
        }
    }
    Some(sum)
}
