use anyhow::Result;
use boxload::process::parse_filename;
use std::env;

/// Names covering overtime, same-team, divergent team code, half and quarter.
const SAMPLE_FILENAMES: &[&str] = &[
    "202511100MIA_box-CLE-ot1-basic_2025-11-28.csv",
    "202511200MIL_box-MIL-game-basic_2025-11-28.csv",
    "202511170TOR_box-CHO-game-basic_2025-11-28.csv",
    "202510210LAL_box-GSW-h1-basic_2025-11-28.csv",
    "202511080LAC_box-PHO-q4-basic_2025-11-28.csv",
];

fn main() -> Result<()> {
    // 1) Filenames from argv, or the built-in samples
    let args: Vec<String> = env::args().skip(1).collect();
    let names: Vec<String> = if args.is_empty() {
        SAMPLE_FILENAMES.iter().map(|s| s.to_string()).collect()
    } else {
        args
    };

    // 2) Parse each and print the descriptor
    let mut failed = 0;
    for name in &names {
        match parse_filename(name) {
            Ok(file) => {
                println!("✅ {}", name);
                println!("{}", serde_json::to_string_pretty(&file)?);
                println!(
                    "   side: {}, period: {:?}",
                    file.home_away().as_str(),
                    file.period_kind()
                );
            }
            Err(e) => {
                failed += 1;
                println!("❌ {}: {}", name, e);
            }
        }
    }

    println!("{}/{} filenames parsed", names.len() - failed, names.len());
    Ok(())
}
