// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the export pipeline

use picker::{Bitmap, EncodingFormat, ExportError, ExportPipeline, QualityPreset};

fn solid_bitmap(width: u32, height: u32, value: u8) -> Bitmap {
    Bitmap::from_rgba8(vec![value; (width * height * 4) as usize], width, height).unwrap()
}

#[tokio::test]
async fn test_export_preserves_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ExportPipeline::new(
        EncodingFormat::Png,
        QualityPreset::Balanced,
        dir.path(),
    );

    // the large bitmap encodes slower than the small one; order must not
    // follow completion
    let large = solid_bitmap(512, 512, 10);
    let small = solid_bitmap(2, 2, 20);

    let results = pipeline
        .export_to_temporary_store(&[large, small])
        .await;

    assert_eq!(results.len(), 2);
    let first = results[0].as_ref().unwrap();
    let second = results[1].as_ref().unwrap();

    let first_decoded = image::open(first).unwrap();
    let second_decoded = image::open(second).unwrap();
    assert_eq!(first_decoded.width(), 512);
    assert_eq!(second_decoded.width(), 2);
}

#[tokio::test]
async fn test_artifact_names_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ExportPipeline::new(
        EncodingFormat::Jpeg,
        QualityPreset::High,
        dir.path(),
    );

    let bitmap = solid_bitmap(4, 4, 100);
    let results = pipeline
        .export_to_temporary_store(&[bitmap.clone(), bitmap.clone(), bitmap])
        .await;

    let mut paths: Vec<_> = results.into_iter().map(|r| r.unwrap()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 3);
    for path in &paths {
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("jpg"));
        assert!(path.exists());
    }
}

#[tokio::test]
async fn test_encode_failure_reported_per_item() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ExportPipeline::new(
        EncodingFormat::Jpeg,
        QualityPreset::Balanced,
        dir.path(),
    );

    // JPEG caps dimensions at 65535; this bitmap cannot be encoded
    let good = solid_bitmap(4, 4, 50);
    let degenerate = Bitmap::from_rgba8(vec![0; 70_000 * 4], 70_000, 1).unwrap();

    let results = pipeline
        .export_to_temporary_store(&[good.clone(), degenerate, good])
        .await;

    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(ExportError::EncodeFailed(_))));
    // the failure did not abort the rest of the batch
    assert!(results[2].is_ok());
}

#[tokio::test]
async fn test_write_failure_reported_per_item() {
    // point the namespace at a regular file so directory creation fails
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let pipeline = ExportPipeline::new(
        EncodingFormat::Png,
        QualityPreset::Balanced,
        &blocker,
    );

    let results = pipeline
        .export_to_temporary_store(&[solid_bitmap(2, 2, 1), solid_bitmap(2, 2, 2)])
        .await;

    assert_eq!(results.len(), 2);
    for result in results {
        assert!(matches!(result, Err(ExportError::WriteFailed(_))));
    }
}

#[tokio::test]
async fn test_reclaim_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ExportPipeline::new(
        EncodingFormat::Png,
        QualityPreset::Balanced,
        dir.path(),
    );

    let path = pipeline.export_one(solid_bitmap(2, 2, 7)).await.unwrap();
    assert!(path.exists());

    pipeline.reclaim(&path).await;
    assert!(!path.exists());

    // absence is not an error
    pipeline.reclaim(&path).await;
}

#[tokio::test]
async fn test_take_reads_then_reclaims() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ExportPipeline::new(
        EncodingFormat::Png,
        QualityPreset::Balanced,
        dir.path(),
    );

    let path = pipeline.export_one(solid_bitmap(2, 2, 7)).await.unwrap();

    let bytes = pipeline.take(&path).await.expect("first take succeeds");
    assert!(!bytes.is_empty());
    assert!(!path.exists());

    assert!(pipeline.take(&path).await.is_none());
}
