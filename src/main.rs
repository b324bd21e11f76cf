//! Segprep CLI: `split` copies paired volumes into train/test
//! directories; `manifest` builds and writes `dataset.json`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use segprep::corpus::DEFAULT_SUFFIX;
use segprep::manifest::DatasetMetadata;
use segprep::pipeline::{create_dataset, split_data};
use segprep::split::SplitRatio;

#[derive(Parser, Debug)]
#[command(name = "segprep", version, about = "Deterministic dataset preparation for segmentation training")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split paired images/ and labels/ into train/test directories
    Split {
        /// Base directory containing images/ and labels/ folders
        #[arg(long)]
        base_dir: PathBuf,

        /// Train ratio, strictly between 0.0 and 1.0 (e.g. 0.9 = 90% train)
        #[arg(long)]
        split_ratio: f64,

        /// Random seed for reproducibility
        #[arg(long)]
        random_seed: u64,

        /// Filename suffix of volume files
        #[arg(long, default_value = DEFAULT_SUFFIX)]
        suffix: String,
    },
    /// Build dataset.json from an already-split directory tree
    Manifest {
        /// Base directory containing imagesTr/, labelsTr/, imagesTs/
        #[arg(long)]
        base_dir: PathBuf,

        /// Output path of the manifest
        #[arg(long, default_value = "dataset.json")]
        output: PathBuf,

        /// Dataset name recorded in the manifest
        #[arg(long, default_value = "ACT")]
        name: String,

        /// Dataset description recorded in the manifest
        #[arg(long, default_value = "AISEG V5 - Code Validation")]
        description: String,

        /// Filename suffix of volume files
        #[arg(long, default_value = DEFAULT_SUFFIX)]
        suffix: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match args.command {
        Command::Split {
            base_dir,
            split_ratio,
            random_seed,
            suffix,
        } => {
            let ratio = SplitRatio::new(split_ratio)?;
            let summary = split_data::run(&base_dir, ratio, random_seed, &suffix)?;
            tracing::info!(
                train = summary.train,
                test = summary.test,
                "data split completed successfully"
            );
        }
        Command::Manifest {
            base_dir,
            output,
            name,
            description,
            suffix,
        } => {
            let metadata = reference_metadata(name, description);
            create_dataset::run(&base_dir, metadata, &output, &suffix)?;
            tracing::info!("dataset.json creation completed successfully");
        }
    }
    Ok(())
}

/// Metadata of the reference head-segmentation dataset: single T1
/// channel, twelve tissue classes.
fn reference_metadata(name: String, description: String) -> DatasetMetadata {
    let mut metadata = DatasetMetadata::new(name, description);
    metadata.license = "UF".to_string();
    metadata.modality = BTreeMap::from([("x0".to_string(), "T1".to_string())]);
    metadata.labels = [
        ("x0", "background"),
        ("x1", "wm"),
        ("x2", "gm"),
        ("x3", "eyes"),
        ("x4", "csf"),
        ("x5", "air"),
        ("x6", "blood"),
        ("x7", "cancellous"),
        ("x8", "cortical"),
        ("x9", "skin"),
        ("x10", "fat"),
        ("x11", "muscle"),
    ]
    .into_iter()
    .map(|(id, class)| (id.to_string(), class.to_string()))
    .collect();
    metadata
}
