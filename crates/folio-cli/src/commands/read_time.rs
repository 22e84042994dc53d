use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use folio_core::text::read_time_minutes;

pub fn run(file: Option<&Path>) -> Result<()> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let minutes = read_time_minutes(&content);
    println!("{} min read", minutes);

    Ok(())
}
