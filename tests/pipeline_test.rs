//! End-to-end pipeline tests: the reference 100-file split and a full
//! split-then-manifest run.

use std::fs;
use std::path::Path;

use segprep::corpus::list_with_suffix;
use segprep::manifest::DatasetMetadata;
use segprep::pipeline::{create_dataset, split_data};
use segprep::split::SplitRatio;
use tempfile::TempDir;

fn seed_corpus(base: &Path, n: usize) {
    fs::create_dir(base.join("images")).unwrap();
    fs::create_dir(base.join("labels")).unwrap();
    for i in 0..n {
        let name = format!("sub-{i:03}.nii");
        fs::write(base.join("images").join(&name), format!("image-{i}")).unwrap();
        fs::write(base.join("labels").join(&name), format!("label-{i}")).unwrap();
    }
}

#[test]
fn test_reference_split_100_files_ratio_09_seed_42() {
    let tmp = TempDir::new().unwrap();
    seed_corpus(tmp.path(), 100);

    let ratio = SplitRatio::new(0.9).unwrap();
    let summary = split_data::run(tmp.path(), ratio, 42, ".nii").unwrap();
    assert_eq!(summary.train, 90);
    assert_eq!(summary.test, 10);

    let train_images = list_with_suffix(&tmp.path().join("imagesTr"), ".nii").unwrap();
    let train_labels = list_with_suffix(&tmp.path().join("labelsTr"), ".nii").unwrap();
    let test_images = list_with_suffix(&tmp.path().join("imagesTs"), ".nii").unwrap();
    let test_labels = list_with_suffix(&tmp.path().join("labelsTs"), ".nii").unwrap();

    assert_eq!(train_images.len(), 90);
    assert_eq!(train_labels.len(), 90);
    assert_eq!(test_images.len(), 10);
    assert_eq!(test_labels.len(), 10);

    // Every training image has its label under the same name, and the
    // copies carry the source content.
    assert_eq!(train_images, train_labels);
    assert_eq!(test_images, test_labels);
    for name in &train_images {
        let copied = fs::read_to_string(tmp.path().join("imagesTr").join(name)).unwrap();
        let original = fs::read_to_string(tmp.path().join("images").join(name)).unwrap();
        assert_eq!(copied, original);
    }
}

#[test]
fn test_rerun_with_same_seed_reproduces_membership() {
    let tmp_a = TempDir::new().unwrap();
    let tmp_b = TempDir::new().unwrap();
    seed_corpus(tmp_a.path(), 40);
    seed_corpus(tmp_b.path(), 40);

    let ratio = SplitRatio::new(0.75).unwrap();
    split_data::run(tmp_a.path(), ratio, 7, ".nii").unwrap();
    split_data::run(tmp_b.path(), ratio, 7, ".nii").unwrap();

    for dir in ["imagesTr", "imagesTs"] {
        let a = list_with_suffix(&tmp_a.path().join(dir), ".nii").unwrap();
        let b = list_with_suffix(&tmp_b.path().join(dir), ".nii").unwrap();
        assert_eq!(a, b, "{dir} membership differs between identical runs");
    }
}

#[test]
fn test_split_then_manifest_end_to_end() {
    let tmp = TempDir::new().unwrap();
    seed_corpus(tmp.path(), 50);

    let ratio = SplitRatio::new(0.9).unwrap();
    let summary = split_data::run(tmp.path(), ratio, 42, ".nii").unwrap();
    assert_eq!(summary.train, 45);
    assert_eq!(summary.test, 5);

    let output = tmp.path().join("dataset.json");
    let manifest = create_dataset::run(
        tmp.path(),
        DatasetMetadata::new("ACT", "end-to-end test"),
        &output,
        ".nii",
    )
    .unwrap();

    // 45 training files minus ceil(45 * 0.10) = 5 held out.
    assert_eq!(manifest.num_training(), 40);
    assert_eq!(manifest.validation().len(), 5);
    assert_eq!(manifest.num_test(), 5);

    // Manifest paths point at files that exist on disk.
    for entry in manifest.training().iter().chain(manifest.validation()) {
        assert!(Path::new(&entry.image).exists(), "{} missing", entry.image);
        assert!(Path::new(&entry.label).exists(), "{} missing", entry.label);
    }
    for path in manifest.test() {
        assert!(Path::new(path).exists(), "{path} missing");
    }
}
