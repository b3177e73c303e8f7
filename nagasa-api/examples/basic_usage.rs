//! Basic usage of the nagasa API

use nagasa_api::{select, summarize, Config, Input, Summarizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "Rust is a systems programming language. It is fast. \
                It guarantees memory safety without a garbage collector. \
                Many teams use it.";

    // Method 1: convenience function
    println!("=== Method 1: Convenience Function ===");
    let summary = summarize(text, 2)?;
    for sentence in &summary {
        println!("- {sentence}");
    }
    println!(
        "Kept {} of {} sentences\n",
        summary.metadata.selected, summary.metadata.document_sentences
    );

    // Method 2: configured summarizer
    println!("=== Method 2: Configured Summarizer ===");
    let config = Config::builder().language("ja")?.count(1).build()?;
    let summarizer = Summarizer::with_config(config)?;
    let summary = summarizer.summarize_input(Input::from_text("短い文。これは少し長い文です。"))?;
    println!("{}\n", summary.to_plain_text());

    // Method 3: ranking sentences you already have
    println!("=== Method 3: Select ===");
    for sentence in select(&["one", "three", "eleven"], 2) {
        println!("- {sentence}");
    }

    let download = summary.download();
    println!("\nDownload as {} ({})", download.file_name, download.mime);

    Ok(())
}
