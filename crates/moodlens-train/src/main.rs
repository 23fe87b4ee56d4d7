use clap::Parser;
use moodlens_core::{TrainingParams, VectorizerParams};
use moodlens_service::{EmotionClassifier, InferenceService};
use moodlens_train::cli::{Cli, Commands};
use moodlens_train::pipeline::run_training;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train {
            data,
            out_dir,
            text_column,
            min_df,
            max_vocabulary,
            verbose,
        } => {
            init_logging(verbose);

            let mut vec_params = VectorizerParams::default();
            if let Some(min_df) = min_df {
                vec_params.min_document_frequency = min_df;
            }
            if let Some(cap) = max_vocabulary {
                vec_params.max_vocabulary = cap;
            }

            let report = run_training(
                &data,
                &text_column,
                &out_dir,
                &vec_params,
                &TrainingParams::default(),
            )?;

            println!("Training complete in {:.1}s", report.elapsed_secs);
            println!("  Documents:   {}", report.documents);
            println!("  Vocabulary:  {}", report.vocabulary_size);
            println!("  Artifacts:   {}", out_dir.display());
            println!();
            println!("  Positive samples per label:");
            for (label, positives) in &report.positive_counts {
                println!("    {label:<12} {positives}");
            }
        }

        Commands::Predict {
            artifacts,
            text,
            threshold,
            ranked,
            verbose,
        } => {
            init_logging(verbose);

            let service = InferenceService::load(&artifacts)?;

            if ranked {
                let scores = service.predict_with_confidence(&text, 0.0).await;
                for entry in scores {
                    println!("{:<12} {:.4}", entry.label.to_string(), entry.confidence);
                }
            } else {
                let prediction = service.predict(&text, threshold).await;
                if prediction.labels.is_empty() {
                    println!("(no labels at threshold {threshold})");
                } else {
                    for label in &prediction.labels {
                        println!("{label}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "moodlens_train=debug,moodlens_model=debug,moodlens_service=debug"
    } else {
        "moodlens_train=info,moodlens_model=info,moodlens_service=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
