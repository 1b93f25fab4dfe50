mod helpers;

use helpers::{fixed_now, make_record, test_embedding, FixedProvider};
use memoir::memory::types::MemoryCategory;
use memoir::retrieval::rerank::{rerank, RerankOptions};

fn options(top_n: usize, diagnostics: bool) -> RerankOptions {
    RerankOptions {
        top_n,
        candidate_k: 10,
        diagnostics,
        now: Some(fixed_now()),
    }
}

#[test]
fn career_query_prefers_fresh_project_over_stale_event() {
    // Equal similarity; recency, importance, confidence, project relevance,
    // and the jobs-domain boost all favor A.
    let provider = FixedProvider {
        vector: test_embedding(0),
    };
    let shared = test_embedding(0);
    let a = make_record("a", MemoryCategory::Project, 1, 0.9, Some(shared.clone()));
    let b = make_record("b", MemoryCategory::Event, 50, 0.3, Some(shared));
    let records = [b, a];

    let result = rerank(&provider, "career plans", &records, &options(2, true));

    let ids: Vec<&str> = result.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    let diags = result.diagnostics.unwrap();
    assert_eq!(diags[0].record_id, "a");
    assert_eq!(diags[0].project_relevance, 1.0);
    assert_eq!(diags[0].domain_boost, 0.2);
    assert!(diags[0].final_score > diags[1].final_score);
}

#[test]
fn family_query_lifts_identity_over_project() {
    // Same age, confidence, and similarity; only the category differs. The
    // family-domain boost (+0.2 identity, -0.15 project) decides the order
    // even though project has the higher base importance.
    let provider = FixedProvider {
        vector: test_embedding(0),
    };
    let shared = test_embedding(0);
    let identity = make_record("fam", MemoryCategory::Identity, 10, 0.8, Some(shared.clone()));
    let project = make_record("proj", MemoryCategory::Project, 10, 0.8, Some(shared));
    let records = [project, identity];

    let result = rerank(
        &provider,
        "How is my family doing?",
        &records,
        &options(2, false),
    );

    let ids: Vec<&str> = result.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["fam", "proj"]);
}

#[test]
fn recency_and_confidence_break_equal_similarity() {
    let provider = FixedProvider {
        vector: test_embedding(0),
    };
    let shared = test_embedding(0);
    let recent_high = make_record("a", MemoryCategory::Reflection, 1, 0.9, Some(shared.clone()));
    let older_low = make_record("b", MemoryCategory::Reflection, 50, 0.3, Some(shared));
    let records = [older_low, recent_high];

    let result = rerank(&provider, "How have I felt?", &records, &options(2, true));

    assert_eq!(result.records[0].id, "a");
    let diags = result.diagnostics.unwrap();
    assert_eq!(diags[0].record_id, "a");
}

#[test]
fn similarity_dominates_when_other_signals_are_equal() {
    let provider = FixedProvider {
        vector: test_embedding(0),
    };
    let close = make_record("close", MemoryCategory::Event, 5, 0.5, Some(test_embedding(0)));
    let far = make_record("far", MemoryCategory::Event, 5, 0.5, Some(test_embedding(1)));
    let records = [far, close];

    let result = rerank(&provider, "no domain words", &records, &options(2, false));
    assert_eq!(result.records[0].id, "close");
}

#[test]
fn identical_candidates_tie_break_by_id_ascending() {
    let provider = FixedProvider {
        vector: test_embedding(0),
    };
    let shared = test_embedding(0);
    let x = make_record("x", MemoryCategory::Event, 3, 0.5, Some(shared.clone()));
    let m = make_record("m", MemoryCategory::Event, 3, 0.5, Some(shared.clone()));
    let q = make_record("q", MemoryCategory::Event, 3, 0.5, Some(shared));
    let records = [x, m, q];

    let result = rerank(&provider, "plain query", &records, &options(3, false));
    let ids: Vec<&str> = result.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["m", "q", "x"]);
}

#[test]
fn rerank_is_deterministic_for_fixed_now() {
    let provider = FixedProvider {
        vector: test_embedding(0),
    };
    let records = vec![
        make_record("a", MemoryCategory::Project, 2, 0.9, Some(test_embedding(0))),
        make_record("b", MemoryCategory::Event, 9, 0.4, Some(test_embedding(1))),
        make_record("c", MemoryCategory::Identity, 40, 0.7, Some(test_embedding(0))),
        make_record("d", MemoryCategory::Preference, 15, 0.6, None),
    ];

    let first = rerank(&provider, "work and career", &records, &options(3, true));
    let second = rerank(&provider, "work and career", &records, &options(3, true));

    let first_ids: Vec<&str> = first.records.iter().map(|r| r.id.as_str()).collect();
    let second_ids: Vec<&str> = second.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(first_ids, second_ids);

    let first_scores: Vec<u64> = first
        .diagnostics
        .unwrap()
        .iter()
        .map(|d| d.final_score.to_bits())
        .collect();
    let second_scores: Vec<u64> = second
        .diagnostics
        .unwrap()
        .iter()
        .map(|d| d.final_score.to_bits())
        .collect();
    assert_eq!(first_scores, second_scores);
}

#[test]
fn diagnostics_are_limited_to_top_n() {
    let provider = FixedProvider {
        vector: test_embedding(0),
    };
    let records: Vec<_> = (0..6)
        .map(|i| {
            make_record(
                &format!("r{i}"),
                MemoryCategory::Event,
                i as i64,
                0.5,
                Some(test_embedding(0)),
            )
        })
        .collect();

    let result = rerank(&provider, "anything", &records, &options(4, true));
    assert_eq!(result.records.len(), 4);
    assert_eq!(result.diagnostics.unwrap().len(), 4);
}

#[test]
fn records_without_embeddings_are_ignored_on_the_scored_path() {
    let provider = FixedProvider {
        vector: test_embedding(0),
    };
    let embedded = make_record("with", MemoryCategory::Event, 20, 0.5, Some(test_embedding(0)));
    // Newer, but invisible to similarity search.
    let bare = make_record("without", MemoryCategory::Event, 1, 0.9, None);
    let records = [bare, embedded];

    let result = rerank(&provider, "anything", &records, &options(5, false));
    let ids: Vec<&str> = result.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["with"]);
}
