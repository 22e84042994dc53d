use anyhow::Result;

use folio_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    let table = config.category_table();

    if table.is_empty() {
        println!("No categories configured.");
        return Ok(());
    }

    println!("Categories ({}):\n", table.len());

    for category in table.iter() {
        let scope = if category.match_in_text {
            "tags, title, description"
        } else {
            "tags only"
        };

        println!("  {} - {}", category.slug, category.name);
        println!("    Matches on: {}", scope);
        println!("    Keywords: {}", category.keywords.join(", "));
        println!();
    }

    Ok(())
}
