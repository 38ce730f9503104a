use clap::Parser;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use ortho_coverage::{CharInventory, Languages, LanguagesConfig, SupportLevel, SupportOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the language database (JSON)
    #[arg(short, long, default_value = "data/languages.json")]
    db: String,

    /// Characters to check, e.g. a font's repertoire
    #[arg(short, long, conflicts_with = "chars_file")]
    chars: Option<String>,

    /// Read the characters to check from a text file
    #[arg(short = 'f', long)]
    chars_file: Option<String>,

    /// Support level: base or aux
    #[arg(short, long, default_value_t = SupportLevel::Base)]
    level: SupportLevel,

    /// Only check orthographies of this script
    #[arg(short, long)]
    script: Option<String>,

    /// Check all non-deprecated orthographies, not just the primary ones
    #[arg(short = 'a', long)]
    all_orthographies: bool,

    /// Also check historical and deprecated orthographies (with --all-orthographies)
    #[arg(long, requires = "all_orthographies")]
    include_historical: bool,

    /// Require every mark an orthography lists
    #[arg(short, long)]
    marks: bool,

    /// Keep scripts without any supported language in the output
    #[arg(long)]
    no_prune: bool,

    /// Do not borrow character sets from related languages
    #[arg(long)]
    no_inherit: bool,

    /// Output file (JSON) - optional
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = match (&args.chars, &args.chars_file) {
        (Some(chars), _) => chars.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => anyhow::bail!("pass the characters to check with --chars or --chars-file"),
    };
    let inventory = CharInventory::from_text(&text);

    let start_load = Instant::now();
    let config = LanguagesConfig {
        inherit: !args.no_inherit,
    };
    let languages = Languages::from_path(Path::new(&args.db), config)?;
    println!(
        "Loaded {} languages from {} in {:.2}s",
        languages.len(),
        args.db,
        start_load.elapsed().as_secs_f32()
    );

    let options = SupportOptions {
        level: args.level,
        script: args.script.clone(),
        prune_orthographies: !args.no_prune,
        check_all_orthographies: args.all_orthographies,
        include_historical: args.include_historical,
        check_all_marks: args.marks,
    };

    println!("Checking {} characters at {} level...", inventory.len(), options.level);
    let start_check = Instant::now();
    let support = languages.supported_languages(&inventory, &options);
    let duration = start_check.elapsed();

    if support.is_empty() {
        println!("No language supported.");
    }
    for (script, codes) in support.iter() {
        println!("{} ({}): {}", script, codes.len(), codes.join(", "));
    }

    if let Some(ref output_path) = args.output {
        let output_file = File::create(output_path)?;
        let mut writer = BufWriter::new(output_file);
        serde_json::to_writer_pretty(&mut writer, &support)?;
        writeln!(writer)?;
        writer.flush()?;
        println!("Saved to {}", output_path);
    }

    println!("Time taken: {:.2}ms", duration.as_secs_f64() * 1000.0);

    Ok(())
}
