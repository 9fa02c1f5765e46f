//! Basic usage example for rankfuse

use std::collections::HashMap;

use tracing_subscriber::EnvFilter;

use rankfuse::config::{FusionSettings, FusionStrategy};
use rankfuse::fusion::{fuse, reciprocal_rank_fusion, DEFAULT_RRF_K};
use rankfuse::types::{AttributeValue, ScoredChunk};

fn main() -> rankfuse::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rankfuse=debug")),
        )
        .init();

    println!("=== Rankfuse Basic Usage Example ===\n");

    // 1. Pretend three retrieval sources answered the same query. The vector
    //    and full-text sources overlap on some chunks; the rewrite source
    //    found one of them again under a different score scale.
    let vector_hits = vec![
        labelled("Rust ownership explained", Some(0.91), "vector"),
        labelled("Borrow checker basics", Some(0.84), "vector"),
        labelled("Async Rust patterns", Some(0.66), "vector"),
    ];
    let fulltext_hits = vec![
        labelled("Borrow checker basics", Some(12.4), "fulltext"),
        labelled("Lifetimes in practice", Some(9.1), "fulltext"),
    ];
    let rewrite_hits = vec![labelled("Rust ownership explained", Some(0.97), "rewrite")];

    println!("Source result lists:");
    println!("  - vector:   {} hits", vector_hits.len());
    println!("  - fulltext: {} hits", fulltext_hits.len());
    println!("  - rewrite:  {} hits\n", rewrite_hits.len());

    // 2. Merge them with reciprocal rank fusion
    let lists = vec![vector_hits, fulltext_hits, rewrite_hits];
    let fused = reciprocal_rank_fusion(&lists, DEFAULT_RRF_K)?;

    println!("RRF fused ranking (k = {}):", DEFAULT_RRF_K);
    for (i, chunk) in fused.iter().enumerate() {
        println!(
            "  {}. {:.5}  {}",
            i + 1,
            chunk.score.unwrap_or(0.0),
            chunk.text.as_deref().unwrap_or(""),
        );
    }
    println!();

    // 3. The same lists through the weighted strategy, favouring the vector
    //    source
    let settings = FusionSettings {
        strategy: FusionStrategy::Weighted,
        weights: Some(vec![0.6, 0.2, 0.2]),
        ..Default::default()
    };
    let weighted = fuse(&lists, &settings)?;

    println!("Weighted fused ranking:");
    for (i, chunk) in weighted.iter().enumerate() {
        println!(
            "  {}. {:.5}  {}",
            i + 1,
            chunk.score.unwrap_or(0.0),
            chunk.text.as_deref().unwrap_or(""),
        );
    }

    println!("\n✓ Example completed successfully!");

    Ok(())
}

fn labelled(text: &str, score: Option<f32>, source: &str) -> ScoredChunk {
    let mut attributes = HashMap::new();
    attributes.insert(
        "source".to_string(),
        AttributeValue::String(source.to_string()),
    );
    ScoredChunk {
        text: Some(text.to_string()),
        score,
        attributes,
    }
}
