//! Train on a CSV dataset, print the evaluation report, and optionally
//! classify one ad hoc subject/body pair.

use anyhow::Result;
use classifier_rs::dataset::features::build_text;
use classifier_rs::dataset::{load_csv_path, MissingFieldPolicy};
use classifier_rs::model::{train, TrainingOptions};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <dataset.csv> [subject] [body]", args[0]);
        eprintln!("Example: {} emails.csv \"Win money\" \"Click now\"", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];

    println!("Loading dataset: {}", path);
    let records = load_csv_path(path, MissingFieldPolicy::TreatAsEmpty)?;
    println!("Loaded {} records", records.len());

    let (model, report) = train(&records, TrainingOptions::default())?;

    println!();
    println!("Training report");
    println!("  Training records: {}", report.training_records);
    println!("  Held-out records: {}", report.heldout_records);
    println!("  Spam / ham:       {} / {}", report.spam_records, report.ham_records);
    println!("  Vocabulary size:  {}", report.vocabulary_size);
    match report.accuracy {
        Some(accuracy) => println!("  Accuracy:         {:.4}", accuracy),
        None => println!("  Accuracy:         n/a (no held-out split)"),
    }

    if args.len() >= 4 {
        let (label, confidence) = model.predict_text(&build_text(&args[2], &args[3]))?;
        println!();
        println!("Ad hoc query");
        println!("  Subject:    {}", args[2]);
        println!("  Body:       {}", args[3]);
        println!("  Prediction: {} ({:.2}%)", label, confidence * 100.0);
    }

    Ok(())
}
