//! Result fusion for multi-source retrieval
//!
//! Implements Reciprocal Rank Fusion (RRF) for merging ranked lists produced
//! by heterogeneous retrieval sources (e.g. vector search + full-text search,
//! or several query rewrites against the same index), plus a weighted
//! score-averaging alternative.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::{FusionSettings, FusionStrategy};
use crate::types::{ResultList, ScoredChunk};
use crate::{Error, Result};

/// RRF damping constant from the literature
pub const DEFAULT_RRF_K: f32 = 60.0;

/// Reciprocal Rank Fusion (RRF)
///
/// Combines any number of ranked lists using the RRF algorithm:
/// score(c) = Σ 1 / (rank_i(c) + k) over every occurrence of chunk c.
///
/// Ranks are 0-based and derived per list by sorting that list's chunks by
/// their source score in descending order (missing scores count as 0.0);
/// the order a source happened to materialize its hits in is not trusted.
/// Chunks are deduplicated by exact text equality across lists, and the
/// combined score replaces the source score on the returned chunks. When
/// duplicates carry different metadata, the last occurrence processed wins.
///
/// Input lists are left untouched; the output is freshly constructed.
///
/// # References
/// - Cormack, Clarke, and Buettcher. "Reciprocal Rank Fusion Outperforms
///   Condorcet and Individual Rank Learning Methods." SIGIR 2009.
pub fn reciprocal_rank_fusion(result_lists: &[ResultList], k: f32) -> Result<ResultList> {
    if !k.is_finite() || k <= 0.0 {
        return Err(Error::invalid_config(format!(
            "damping constant k must be a positive finite number, got {}",
            k
        )));
    }

    // Unique chunks in first-observed order; the final stable sort then
    // breaks score ties by first appearance.
    let mut fused: Vec<(ScoredChunk, f32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for list in result_lists {
        // Rank within a list comes from the source's own scores, not from
        // the order the list was materialized in. The sort is stable, so
        // equally scored chunks keep their list order.
        let mut ranked: Vec<&ScoredChunk> = list.iter().collect();
        ranked.sort_by(|a, b| {
            score_or_zero(b)
                .partial_cmp(&score_or_zero(a))
                .unwrap_or(Ordering::Equal)
        });

        for (rank, chunk) in ranked.iter().enumerate() {
            let text = chunk_identity(chunk)?;
            let contribution = 1.0 / (rank as f32 + k);
            match index.get(text) {
                Some(&at) => {
                    fused[at].0 = (*chunk).clone();
                    fused[at].1 += contribution;
                }
                None => {
                    index.insert(text.to_string(), fused.len());
                    fused.push(((*chunk).clone(), contribution));
                }
            }
        }
    }

    Ok(finalize(fused))
}

/// Weighted score fusion
///
/// Averages source scores per unique chunk, optionally scaling each list's
/// contribution by a per-source weight. Preserves score magnitudes instead
/// of rank positions; the simpler alternative when sources already produce
/// comparable scores.
///
/// `weights`, when given, must match `result_lists` in length; `None` weighs
/// every source equally at 1.0. Identity, metadata survival, and ordering
/// rules match [`reciprocal_rank_fusion`].
pub fn weighted_score_fusion(
    result_lists: &[ResultList],
    weights: Option<&[f32]>,
) -> Result<ResultList> {
    if let Some(weights) = weights {
        if weights.len() != result_lists.len() {
            return Err(Error::invalid_config(format!(
                "got {} weights for {} result lists",
                weights.len(),
                result_lists.len()
            )));
        }
        if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(Error::invalid_config(
                "per-source weights must be positive finite numbers",
            ));
        }
    }

    let mut fused: Vec<(ScoredChunk, f32, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (list_idx, list) in result_lists.iter().enumerate() {
        let weight = weights.map_or(1.0, |w| w[list_idx]);
        for chunk in list {
            let text = chunk_identity(chunk)?;
            let contribution = weight * score_or_zero(chunk);
            match index.get(text) {
                Some(&at) => {
                    fused[at].0 = chunk.clone();
                    fused[at].1 += contribution;
                    fused[at].2 += 1;
                }
                None => {
                    index.insert(text.to_string(), fused.len());
                    fused.push((chunk.clone(), contribution, 1));
                }
            }
        }
    }

    // Average by the number of occurrences
    let averaged = fused
        .into_iter()
        .map(|(chunk, sum, count)| (chunk, sum / count as f32))
        .collect();

    Ok(finalize(averaged))
}

/// Fuse result lists according to `settings`.
pub fn fuse(result_lists: &[ResultList], settings: &FusionSettings) -> Result<ResultList> {
    settings.validate()?;

    tracing::debug!(
        strategy = ?settings.strategy,
        lists = result_lists.len(),
        "fusing result lists"
    );

    match settings.strategy {
        FusionStrategy::Rrf => reciprocal_rank_fusion(result_lists, settings.k),
        FusionStrategy::Weighted => {
            weighted_score_fusion(result_lists, settings.weights.as_deref())
        }
    }
}

/// Fusion identity of a chunk: its exact text. Empty text is a valid
/// identity that all empty chunks share.
fn chunk_identity(chunk: &ScoredChunk) -> Result<&str> {
    chunk.text.as_deref().ok_or_else(|| {
        Error::malformed_chunk("chunk has no text to derive a fusion identity from")
    })
}

fn score_or_zero(chunk: &ScoredChunk) -> f32 {
    chunk.score.unwrap_or(0.0)
}

/// Sort accumulated chunks by combined score descending (stable, so ties
/// keep first-observed order) and write the combined score onto each chunk.
fn finalize(mut fused: Vec<(ScoredChunk, f32)>) -> ResultList {
    fused.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    fused
        .into_iter()
        .map(|(mut chunk, score)| {
            chunk.score = Some(score);
            chunk
        })
        .collect()
}
