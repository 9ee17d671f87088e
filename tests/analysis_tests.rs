//! Integration tests for the encode and compress analysis
//!
//! These tests run whole columns through selection, fan-out, the compression
//! matrix and the scorer, and check the properties every analysis must hold.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsprism::analysis::{compressor_catalog, select_encoders, Scorer};
use tsprism::*;

fn sizes(records: &[AnalysisRecord]) -> Vec<(&'static str, &'static str, u64, u64)> {
    let mut sizes: Vec<_> = records
        .iter()
        .map(|r| {
            (
                r.encode_name(),
                r.compress_name(),
                r.origin_size(),
                r.compressed_size(),
            )
        })
        .collect();
    sizes.sort();
    sizes
}

fn random_int32(seed: u64, len: usize) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| Value::Int32(rng.random_range(-5000..5000)))
        .collect()
}

fn sample_column(data_type: LogicalType) -> Vec<Value> {
    match data_type {
        LogicalType::Int64 => (0..200i64).map(|i| Value::Int64(i * 3)).collect(),
        LogicalType::Int32 => (0..200i32).map(|i| Value::Int32(i % 7)).collect(),
        LogicalType::Float => (0..200).map(|i| Value::Float(i as f32 / 4.0)).collect(),
        LogicalType::Double => (0..200).map(|i| Value::Double(i as f64 * 0.1)).collect(),
        LogicalType::Text => (0..200)
            .map(|i| Value::from(if i % 2 == 0 { "up" } else { "down" }))
            .collect(),
        LogicalType::Boolean | LogicalType::Vector => Vec::new(),
    }
}

/// Every analyzable type yields one record per encoding x compressor
#[test]
fn test_record_count_per_type() -> TsPrismResult<()> {
    for data_type in [
        LogicalType::Int64,
        LogicalType::Int32,
        LogicalType::Float,
        LogicalType::Double,
        LogicalType::Text,
    ] {
        let records = analyze_values(&sample_column(data_type))?.unwrap_or_default();
        assert_eq!(
            records.len(),
            select_encoders(data_type).len() * compressor_catalog().len(),
            "record count for {}",
            data_type
        );
        assert!(records.iter().all(|r| r.data_type() == data_type));
    }
    Ok(())
}

/// The identity compressor reports the encoded size unchanged
#[test]
fn test_uncompressed_size_identity() -> TsPrismResult<()> {
    let records = analyze_values(&random_int32(11, 2000))?.unwrap_or_default();
    let uncompressed: Vec<_> = records
        .iter()
        .filter(|r| r.compression() == CompressionType::Uncompressed)
        .collect();
    assert_eq!(uncompressed.len(), 4);
    for record in uncompressed {
        assert_eq!(record.compressed_size(), record.origin_size());
        assert_eq!(record.encoded_size(), record.origin_size());
        assert_eq!(record.uncompressed_size(), record.origin_size());
    }
    Ok(())
}

/// Sizes do not depend on timing, so two runs agree on them
#[test]
fn test_sizes_are_reproducible() -> TsPrismResult<()> {
    let values = random_int32(42, 3000);
    let first = analyze_values(&values)?.unwrap_or_default();
    let second = analyze_values(&values)?.unwrap_or_default();
    assert_eq!(sizes(&first), sizes(&second));
    Ok(())
}

/// Scores are descending and every record is scored
#[test]
fn test_ranked_output_descends() -> TsPrismResult<()> {
    let records = analyze_values(&random_int32(5, 1500))?.unwrap_or_default();
    assert!(records.iter().all(|r| r.score().is_some()));
    for pair in records.windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }
    Ok(())
}

/// A smaller compressed size never earns a smaller size-rank bonus
#[test]
fn test_size_bonus_is_monotonic() -> TsPrismResult<()> {
    let records = analyze_values(&random_int32(9, 1000))?.unwrap_or_default();
    let bonuses = Scorer::default().size_rank_bonuses(&records);
    for a in &records {
        for b in &records {
            if a.compressed_size() < b.compressed_size() {
                assert!(bonuses[&a.key()] >= bonuses[&b.key()]);
            }
        }
    }
    Ok(())
}

/// Sequential integers favour the delta encoding, paired with a fast compressor
#[test]
fn test_sequential_integers_rank_ts2diff_lz4_high() -> TsPrismResult<()> {
    let values: Vec<Value> = (0..1000i64).map(Value::Int64).collect();
    let records = analyze_values(&values)?.unwrap_or_default();
    assert_eq!(records.len(), 16);

    let smallest = records
        .iter()
        .min_by_key(|r| r.origin_size())
        .map(|r| r.encoding());
    assert_eq!(smallest, Some(EncodingType::Ts2Diff));

    // eight blocks of header only: every delta equals the minimum
    let ts2diff_size = records
        .iter()
        .find(|r| r.encoding() == EncodingType::Ts2Diff)
        .map(|r| r.origin_size());
    assert_eq!(ts2diff_size, Some(8 * 24));

    let position = records.iter().position(|r| {
        r.encoding() == EncodingType::Ts2Diff && r.compression() == CompressionType::Lz4
    });
    assert!(
        matches!(position, Some(0) | Some(1)),
        "TS_2DIFF+LZ4 ranked at {:?}",
        position
    );
    Ok(())
}

/// Repeated text collapses under the dictionary encoding
#[test]
fn test_repeated_text_prefers_dictionary() -> TsPrismResult<()> {
    let values = vec![Value::from("sensor-alpha"); 10_000];
    let records = analyze_values(&values)?.unwrap_or_default();
    assert_eq!(records.len(), 8);

    let origin = |encoding: EncodingType| {
        records
            .iter()
            .find(|r| r.encoding() == encoding)
            .map(|r| r.origin_size())
            .unwrap_or_default()
    };
    let plain = origin(EncodingType::Plain);
    let dictionary = origin(EncodingType::Dictionary);
    assert_eq!(plain, 10_000 * 13);
    assert!(dictionary > 0);
    assert!(dictionary * 10 <= plain);
    Ok(())
}

/// A cursor over the values analyzes exactly like the slice
#[test]
fn test_cursor_agrees_with_slice() -> TsPrismResult<()> {
    let values = random_int32(3, 700);
    let mut batch = BatchData::new(LogicalType::Int32);
    for value in &values {
        batch.put(value.clone());
    }

    let from_cursor = analyze_batch(&mut batch)?.unwrap_or_default();
    let from_slice = analyze_values(&values)?.unwrap_or_default();
    assert_eq!(sizes(&from_cursor), sizes(&from_slice));

    // the cursor is drained, rewinding replays the same column
    assert!(!batch.has_current());
    batch.reset();
    let replayed = analyze_batch(&mut batch)?.unwrap_or_default();
    assert_eq!(sizes(&replayed), sizes(&from_slice));
    Ok(())
}

/// Parallel measurement reports the same sizes as sequential measurement
#[test]
fn test_parallel_matrix_agrees() -> TsPrismResult<()> {
    let values: Vec<Value> = (0..4000)
        .map(|i| Value::Double(100.0 + (i as f64 / 30.0).cos()))
        .collect();
    let parallel = Analyzer::with_config(AnalyzerConfig::new().with_parallel_matrix(true))?;
    let from_parallel = parallel.analyze_values(&values)?.unwrap_or_default();
    let from_sequential = analyze_values(&values)?.unwrap_or_default();
    assert_eq!(from_parallel.len(), 8);
    assert_eq!(sizes(&from_parallel), sizes(&from_sequential));
    Ok(())
}

#[test]
fn test_empty_and_unsupported_columns() -> TsPrismResult<()> {
    assert!(analyze_values(&[])?.is_none());
    assert!(analyze_values(&[Value::Boolean(true), Value::Boolean(false)])?.is_none());

    let mut empty = BatchData::new(LogicalType::Text);
    assert!(analyze_batch(&mut empty)?.is_none());
    Ok(())
}

#[test]
fn test_mixed_column_is_rejected() {
    let values = vec![Value::Int64(1), Value::Double(2.0)];
    let result = analyze_values(&values);
    assert!(matches!(result, Err(TsPrismError::TypeMismatch { .. })));
}

#[test]
fn test_compress_deadline_aborts() -> TsPrismResult<()> {
    let values: Vec<Value> = (0..5000i64).map(Value::Int64).collect();
    let analyzer = Analyzer::with_config(
        AnalyzerConfig::new().with_compress_deadline(std::time::Duration::from_nanos(1)),
    )?;
    let result = analyzer.analyze_values(&values);
    assert!(matches!(result, Err(TsPrismError::DeadlineExceeded { .. })));
    Ok(())
}

#[test]
fn test_record_json_shape() -> TsPrismResult<()> {
    let values: Vec<Value> = (0..64).map(|i| Value::Float(i as f32)).collect();
    let records = analyze_values(&values)?.unwrap_or_default();
    let json = serde_json::to_value(&records[0]).map_err(|e| TsPrismError::Encoding(e.to_string()))?;

    assert_eq!(json["typeName"], "FLOAT");
    for key in [
        "encodeName",
        "compressName",
        "originSize",
        "encodedSize",
        "uncompressedSize",
        "compressedSize",
        "compressedCost",
        "score",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(json["originSize"], json["encodedSize"]);
    Ok(())
}

#[test]
fn test_record_display_line() -> TsPrismResult<()> {
    let values: Vec<Value> = (0..64i64).map(Value::Int64).collect();
    let records = analyze_values(&values)?.unwrap_or_default();
    let line = records[0].to_string();
    assert!(line.starts_with("typeName : INT64 compressName : "));
    assert!(line.contains(" originSize : "));
    assert!(line.contains(" score : "));
    Ok(())
}
